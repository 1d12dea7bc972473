use soroban_sdk::{log, Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::storage;
use crate::types::{Config, QuorumPolicy};

pub fn initialize(env: &Env, admin: Address, config: Config) -> Result<(), ContractError> {
    if storage::has_admin(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    validate_config(&config)?;

    storage::set_admin(env, &admin);
    storage::set_config(env, &config);

    log!(env, "protocol initialized", admin);
    Ok(())
}

pub fn set_config(env: &Env, admin: Address, config: Config) -> Result<(), ContractError> {
    admin.require_auth();
    require_admin(env, &admin)?;
    validate_config(&config)?;

    storage::set_config(env, &config);

    events::config_updated(env, config);

    Ok(())
}

pub fn set_admin(
    env: &Env,
    current_admin: Address,
    new_admin: Address,
) -> Result<(), ContractError> {
    current_admin.require_auth();
    require_admin(env, &current_admin)?;

    storage::set_admin(env, &new_admin);

    events::admin_changed(env, new_admin);

    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    storage::get_admin(env).ok_or(ContractError::NotInitialized)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    storage::get_config(env).ok_or(ContractError::NotInitialized)
}

/// Distinct approvals a withdrawal request needs among `member_count` members.
pub fn required_approvals(policy: &QuorumPolicy, member_count: u32) -> u32 {
    match policy {
        QuorumPolicy::Unanimous => member_count,
        QuorumPolicy::Threshold(threshold) => (*threshold).min(member_count),
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller != get_admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ContractError> {
    if config.quorum == QuorumPolicy::Threshold(0) {
        return Err(ContractError::InvalidConfig);
    }
    Ok(())
}
