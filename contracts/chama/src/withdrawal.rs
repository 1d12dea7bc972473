use soroban_sdk::{log, token, Address, Env, Vec};

use crate::admin;
use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::storage;
use crate::types::{RequestStatus, WithdrawalRequest};

pub fn withdrawal_request(
    env: &Env,
    requester: Address,
    rosca_id: u64,
    recipient: Address,
    amount: i128,
) -> Result<u32, ContractError> {
    requester.require_auth();

    let rosca = group::load(env, rosca_id)?;
    group::require_member(&rosca, &requester)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let index = storage::get_withdrawal_count(env, rosca_id);
    let request = WithdrawalRequest {
        index,
        requester: requester.clone(),
        recipient: recipient.clone(),
        amount,
        approvals: Vec::new(env),
        status: RequestStatus::Pending,
        created_at: env.ledger().timestamp(),
        executed_at: 0,
    };

    storage::set_withdrawal(env, rosca_id, &request);
    storage::set_withdrawal_count(env, rosca_id, index + 1);

    events::withdrawal_requested(env, rosca_id, index, requester, recipient, amount);

    Ok(index)
}

/// Records `approver`'s approval and executes the request in the same call
/// once the quorum is met.
pub fn approve_withdrawal_request(
    env: &Env,
    approver: Address,
    rosca_id: u64,
    index: u32,
) -> Result<RequestStatus, ContractError> {
    approver.require_auth();

    let rosca = group::load(env, rosca_id)?;
    group::require_member(&rosca, &approver)?;

    let mut request =
        storage::get_withdrawal(env, rosca_id, index).ok_or(ContractError::RequestNotFound)?;

    if request.status == RequestStatus::Executed {
        return Err(ContractError::AlreadyExecuted);
    }
    if request.approvals.contains(&approver) {
        return Err(ContractError::AlreadyApproved);
    }

    request.approvals.push_back(approver.clone());

    let quorum = admin::get_config(env)?.quorum;
    let required = admin::required_approvals(&quorum, rosca.members.len());
    let approvals = request.approvals.len();

    if approvals >= required {
        let reserve = storage::get_reserve(env, rosca_id);
        if reserve < request.amount {
            return Err(ContractError::InsufficientReserve);
        }

        let token_client = token::Client::new(env, &rosca.details.token);
        token_client.transfer(
            &env.current_contract_address(),
            &request.recipient,
            &request.amount,
        );

        storage::set_reserve(env, rosca_id, reserve - request.amount);
        request.status = RequestStatus::Executed;
        request.executed_at = env.ledger().timestamp();
    }

    storage::set_withdrawal(env, rosca_id, &request);

    events::withdrawal_approved(env, rosca_id, index, approver, approvals, required);

    if request.status == RequestStatus::Executed {
        log!(env, "withdrawal executed", rosca_id, index, request.amount);
        events::withdrawal_executed(env, rosca_id, index, request.recipient, request.amount);
    }

    Ok(request.status)
}

pub fn get_withdrawal_request(
    env: &Env,
    rosca_id: u64,
    index: u32,
) -> Result<WithdrawalRequest, ContractError> {
    storage::get_withdrawal(env, rosca_id, index).ok_or(ContractError::RequestNotFound)
}

pub fn get_withdrawal_count(env: &Env, rosca_id: u64) -> Result<u32, ContractError> {
    group::load(env, rosca_id)?;
    Ok(storage::get_withdrawal_count(env, rosca_id))
}
