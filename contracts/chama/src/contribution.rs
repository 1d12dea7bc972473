use soroban_sdk::{log, token, Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::storage;
use crate::types::PotDetails;

pub fn contribute(
    env: &Env,
    member: Address,
    rosca_id: u64,
    amount: i128,
) -> Result<(), ContractError> {
    member.require_auth();

    let rosca = group::load(env, rosca_id)?;
    group::require_member(&rosca, &member)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut pot = storage::get_pot(env, rosca_id).ok_or(ContractError::RoscaNotFound)?;

    // No clamping: the whole amount fits or nothing moves
    let new_balance = pot
        .pot_balance
        .checked_add(amount)
        .ok_or(ContractError::PotWouldOverfund)?;
    if new_balance > pot.pot_amount {
        return Err(ContractError::PotWouldOverfund);
    }

    pull_approved(env, &rosca.details.token, &member, amount)?;

    let contributed = pot.contributions.get(member.clone()).unwrap_or(0);
    pot.contributions.set(member.clone(), contributed + amount);
    pot.pot_balance = new_balance;
    storage::set_pot(env, rosca_id, &pot);

    log!(env, "contribution", rosca_id, member, amount);

    events::contribution(env, rosca_id, member, amount);

    Ok(())
}

/// Sends tokens straight to the group's reserve, outside of the pot.
/// Reserve funds only leave through approved withdrawal requests.
pub fn fund_rosca(
    env: &Env,
    from: Address,
    rosca_id: u64,
    amount: i128,
) -> Result<(), ContractError> {
    from.require_auth();

    let rosca = group::load(env, rosca_id)?;

    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let token_client = token::Client::new(env, &rosca.details.token);
    if token_client.balance(&from) < amount {
        return Err(ContractError::InsufficientBalance);
    }
    token_client.transfer(&from, &env.current_contract_address(), &amount);

    let reserve = storage::get_reserve(env, rosca_id);
    storage::set_reserve(env, rosca_id, reserve + amount);

    events::funded(env, rosca_id, from, amount);

    Ok(())
}

pub fn get_current_pot_details(env: &Env, rosca_id: u64) -> Result<PotDetails, ContractError> {
    let pot = storage::get_pot(env, rosca_id).ok_or(ContractError::RoscaNotFound)?;
    Ok(PotDetails {
        cycle: pot.cycle,
        pot_amount: pot.pot_amount,
        pot_balance: pot.pot_balance,
        pot_owner: pot.owner,
    })
}

pub fn get_contribution(
    env: &Env,
    rosca_id: u64,
    member: Address,
) -> Result<i128, ContractError> {
    let pot = storage::get_pot(env, rosca_id).ok_or(ContractError::RoscaNotFound)?;
    Ok(pot.contributions.get(member).unwrap_or(0))
}

pub fn get_reserve_balance(env: &Env, rosca_id: u64) -> Result<i128, ContractError> {
    group::load(env, rosca_id)?;
    Ok(storage::get_reserve(env, rosca_id))
}

/// Pulls `amount` from `from` using the allowance it granted this contract.
fn pull_approved(
    env: &Env,
    token_id: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let token_client = token::Client::new(env, token_id);
    let custodian = env.current_contract_address();

    if token_client.allowance(from, &custodian) < amount {
        return Err(ContractError::NotEnoughAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    token_client.transfer_from(&custodian, from, &custodian, &amount);
    Ok(())
}
