use soroban_sdk::{log, Address, Env, String, Vec};

use crate::admin;
use crate::errors::ContractError;
use crate::events;
use crate::schedule;
use crate::storage;
use crate::types::{Member, Rosca, RoscaSummary};

pub fn join_rosca(
    env: &Env,
    member: Address,
    rosca_id: u64,
    invite_code: String,
) -> Result<(), ContractError> {
    member.require_auth();

    let mut rosca = load(env, rosca_id)?;

    if invite_code != rosca.invite_code {
        return Err(ContractError::InvalidInviteCode);
    }

    if find_member(&rosca, &member).is_some() {
        return Err(ContractError::AlreadyMember);
    }

    let max_members = admin::get_config(env)?.max_members;
    if max_members > 0 && rosca.members.len() >= max_members {
        return Err(ContractError::RoscaFull);
    }

    rosca.members.push_back(Member {
        address: member.clone(),
        is_potted: false,
        joined_at: env.ledger().timestamp(),
    });
    storage::set_rosca(env, &rosca);
    storage::add_member_rosca(env, &member, rosca_id);

    log!(env, "member joined", rosca_id, member);

    events::member_joined(env, rosca_id, member);

    Ok(())
}

pub fn get_members(env: &Env, rosca_id: u64) -> Result<Vec<Member>, ContractError> {
    Ok(load(env, rosca_id)?.members)
}

pub fn get_rosca_details(env: &Env, rosca_id: u64) -> Result<RoscaSummary, ContractError> {
    let rosca = load(env, rosca_id)?;
    Ok(RoscaSummary {
        id: rosca.id,
        creator: rosca.creator,
        details: rosca.details,
        member_count: rosca.members.len(),
        current_pot_index: rosca.current_pot_index,
        rotation: rosca.rotation,
        created_at: rosca.created_at,
    })
}

pub fn next_contribution_date(env: &Env, rosca_id: u64) -> Result<u64, ContractError> {
    let details = load(env, rosca_id)?.details;
    Ok(schedule::next_occurrence(
        details.contribution_day,
        details.contribution_recurrence,
        env.ledger().timestamp(),
    ))
}

pub fn next_disbursement_date(env: &Env, rosca_id: u64) -> Result<u64, ContractError> {
    let details = load(env, rosca_id)?.details;
    Ok(schedule::next_occurrence(
        details.disbursement_day,
        details.disbursement_recurrence,
        env.ledger().timestamp(),
    ))
}

pub(crate) fn load(env: &Env, rosca_id: u64) -> Result<Rosca, ContractError> {
    storage::get_rosca(env, rosca_id).ok_or(ContractError::RoscaNotFound)
}

/// Rotation slot of `address`, if it is a member.
pub(crate) fn find_member(rosca: &Rosca, address: &Address) -> Option<u32> {
    rosca
        .members
        .iter()
        .position(|m| m.address == *address)
        .map(|i| i as u32)
}

pub(crate) fn require_member(rosca: &Rosca, address: &Address) -> Result<u32, ContractError> {
    find_member(rosca, address).ok_or(ContractError::Unauthorized)
}
