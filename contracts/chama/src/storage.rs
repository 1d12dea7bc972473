use soroban_sdk::{Address, Env, Vec};

use crate::types::{Config, DataKey, PotCycle, Rosca, WithdrawalRequest};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Admin & Config ---

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// --- Rosca Counter ---

pub fn get_rosca_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RoscaCounter)
        .unwrap_or(0)
}

pub fn set_rosca_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::RoscaCounter, &counter);
    extend_instance_ttl(env);
}

// --- Rosca ---

pub fn get_rosca(env: &Env, rosca_id: u64) -> Option<Rosca> {
    let key = DataKey::Rosca(rosca_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_rosca(env: &Env, rosca: &Rosca) {
    let key = DataKey::Rosca(rosca.id);
    env.storage().persistent().set(&key, rosca);
    extend_persistent_ttl(env, &key);
}

// --- Pot ---

pub fn get_pot(env: &Env, rosca_id: u64) -> Option<PotCycle> {
    let key = DataKey::Pot(rosca_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_pot(env: &Env, rosca_id: u64, pot: &PotCycle) {
    let key = DataKey::Pot(rosca_id);
    env.storage().persistent().set(&key, pot);
    extend_persistent_ttl(env, &key);
}

// --- Reserve (funds received outside of contributions) ---

pub fn get_reserve(env: &Env, rosca_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Reserve(rosca_id))
        .unwrap_or(0)
}

pub fn set_reserve(env: &Env, rosca_id: u64, amount: i128) {
    let key = DataKey::Reserve(rosca_id);
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

// --- Withdrawal Requests ---

pub fn get_withdrawal_count(env: &Env, rosca_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::WithdrawalCount(rosca_id))
        .unwrap_or(0)
}

pub fn set_withdrawal_count(env: &Env, rosca_id: u64, count: u32) {
    let key = DataKey::WithdrawalCount(rosca_id);
    env.storage().persistent().set(&key, &count);
    extend_persistent_ttl(env, &key);
}

pub fn get_withdrawal(env: &Env, rosca_id: u64, index: u32) -> Option<WithdrawalRequest> {
    let key = DataKey::Withdrawal(rosca_id, index);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_withdrawal(env: &Env, rosca_id: u64, request: &WithdrawalRequest) {
    let key = DataKey::Withdrawal(rosca_id, request.index);
    env.storage().persistent().set(&key, request);
    extend_persistent_ttl(env, &key);
}

// --- Directory Indexes ---

pub fn get_creator_roscas(env: &Env, creator: &Address) -> Vec<u64> {
    let key = DataKey::CreatorRoscas(creator.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_creator_rosca(env: &Env, creator: &Address, rosca_id: u64) {
    let key = DataKey::CreatorRoscas(creator.clone());
    let mut roscas = get_creator_roscas(env, creator);
    roscas.push_back(rosca_id);
    env.storage().persistent().set(&key, &roscas);
    extend_persistent_ttl(env, &key);
}

pub fn get_member_roscas(env: &Env, member: &Address) -> Vec<u64> {
    let key = DataKey::MemberRoscas(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_member_rosca(env: &Env, member: &Address, rosca_id: u64) {
    let key = DataKey::MemberRoscas(member.clone());
    let mut roscas = get_member_roscas(env, member);
    roscas.push_back(rosca_id);
    env.storage().persistent().set(&key, &roscas);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
