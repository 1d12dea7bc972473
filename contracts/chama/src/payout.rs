use soroban_sdk::{log, token, Address, Env, Map};

use crate::errors::ContractError;
use crate::events;
use crate::group;
use crate::storage;
use crate::types::{Member, PotCycle};

/// Pays the full pot to the current slot's owner. Any member may trigger
/// it; the funds always go to the owner.
pub fn pay_out_pot(env: &Env, caller: Address, rosca_id: u64) -> Result<(), ContractError> {
    caller.require_auth();

    let mut rosca = group::load(env, rosca_id)?;
    group::require_member(&rosca, &caller)?;

    let pot = storage::get_pot(env, rosca_id).ok_or(ContractError::RoscaNotFound)?;

    if pot.pot_balance != pot.pot_amount {
        return Err(ContractError::PotNotFull);
    }

    let index = rosca.current_pot_index;
    let recipient = rosca.members.get(index).ok_or(ContractError::NotMember)?;

    // Slot already paid means every member was paid last rotation
    if recipient.is_potted {
        let mut reset = rosca.members.clone();
        for (i, m) in rosca.members.iter().enumerate() {
            reset.set(
                i as u32,
                Member {
                    is_potted: false,
                    ..m
                },
            );
        }
        rosca.members = reset;
        rosca.rotation += 1;

        log!(env, "rotation reset", rosca_id, rosca.rotation);
        events::rotation_reset(env, rosca_id, rosca.rotation, rosca.members.len());
    }

    let token_client = token::Client::new(env, &rosca.details.token);
    token_client.transfer(
        &env.current_contract_address(),
        &recipient.address,
        &pot.pot_balance,
    );

    rosca.members.set(
        index,
        Member {
            is_potted: true,
            ..recipient.clone()
        },
    );

    let next_index = (index + 1) % rosca.members.len();
    let next_owner = rosca
        .members
        .get(next_index)
        .ok_or(ContractError::NotMember)?;
    rosca.current_pot_index = next_index;

    let next_pot = PotCycle {
        cycle: pot.cycle + 1,
        pot_amount: rosca.details.goal_amount,
        pot_balance: 0,
        owner: next_owner.address,
        contributions: Map::new(env),
    };

    storage::set_rosca(env, &rosca);
    storage::set_pot(env, rosca_id, &next_pot);

    log!(env, "pot paid out", rosca_id, recipient.address, pot.pot_balance);

    events::pot_paid_out(env, rosca_id, recipient.address, pot.pot_balance, pot.cycle);

    Ok(())
}

pub fn get_current_recipient(env: &Env, rosca_id: u64) -> Result<Address, ContractError> {
    let pot = storage::get_pot(env, rosca_id).ok_or(ContractError::RoscaNotFound)?;
    Ok(pot.owner)
}
