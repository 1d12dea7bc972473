use soroban_sdk::{log, Address, Env, Map, String, Vec};

use crate::errors::ContractError;
use crate::events;
use crate::storage;
use crate::types::{Member, PotCycle, Rosca, RoscaDetails, RoscaPage};

/// Largest page `get_roscas` will return.
pub const MAX_PAGE_SIZE: u32 = 50;

pub fn create_rosca(
    env: &Env,
    creator: Address,
    details: RoscaDetails,
    invite_code: String,
) -> Result<u64, ContractError> {
    creator.require_auth();

    if details.goal_amount <= 0 || details.contribution_amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if invite_code.len() == 0 {
        return Err(ContractError::InvalidInviteCode);
    }

    let rosca_id = storage::get_rosca_counter(env) + 1;
    storage::set_rosca_counter(env, rosca_id);

    let now = env.ledger().timestamp();
    let mut members = Vec::new(env);
    members.push_back(Member {
        address: creator.clone(),
        is_potted: false,
        joined_at: now,
    });

    // Creator holds the first rotation slot
    let pot = PotCycle {
        cycle: 1,
        pot_amount: details.goal_amount,
        pot_balance: 0,
        owner: creator.clone(),
        contributions: Map::new(env),
    };

    let name = details.name.clone();
    let rosca = Rosca {
        id: rosca_id,
        creator: creator.clone(),
        details,
        invite_code,
        members,
        current_pot_index: 0,
        rotation: 0,
        created_at: now,
    };

    storage::set_rosca(env, &rosca);
    storage::set_pot(env, rosca_id, &pot);
    storage::add_creator_rosca(env, &creator, rosca_id);
    storage::add_member_rosca(env, &creator, rosca_id);

    log!(env, "rosca created", rosca_id, creator);

    events::rosca_created(env, rosca_id, name, creator.clone());
    events::member_joined(env, rosca_id, creator);

    Ok(rosca_id)
}

pub fn get_roscas_by_owner(env: &Env, owner: Address) -> Vec<u64> {
    storage::get_creator_roscas(env, &owner)
}

pub fn get_member_roscas(env: &Env, member: Address) -> Vec<u64> {
    storage::get_member_roscas(env, &member)
}

pub fn get_rosca_count(env: &Env) -> u64 {
    storage::get_rosca_counter(env)
}

/// Ids are allocated sequentially from 1, so position `n` in the directory
/// is rosca `n + 1`.
pub fn get_roscas(env: &Env, offset: u32, limit: u32) -> RoscaPage {
    let total = storage::get_rosca_counter(env);
    let mut roscas = Vec::new(env);

    let start = offset as u64;
    let limit = limit.min(MAX_PAGE_SIZE) as u64;
    if limit == 0 || start >= total {
        return RoscaPage {
            roscas,
            next_offset: 0,
        };
    }

    let end = (start + limit).min(total);
    for position in start..end {
        roscas.push_back(position + 1);
    }

    let next_offset = if end >= total { 0 } else { end as u32 };
    RoscaPage {
        roscas,
        next_offset,
    }
}
