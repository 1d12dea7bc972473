use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoscaCreatedEvent {
    pub rosca_id: u64,
    pub name: String,
    pub creator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoinedEvent {
    pub rosca_id: u64,
    pub member: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionEvent {
    pub member: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PotPaidOutEvent {
    pub member: Address,
    pub amount: i128,
    pub cycle: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RotationResetEvent {
    pub rotation: u32,
    pub member_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundedEvent {
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequestedEvent {
    pub index: u32,
    pub requester: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalApprovedEvent {
    pub index: u32,
    pub approver: Address,
    pub approvals: u32,
    pub required: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalExecutedEvent {
    pub index: u32,
    pub recipient: Address,
    pub amount: i128,
}

pub fn rosca_created(env: &Env, rosca_id: u64, name: String, creator: Address) {
    env.events().publish(
        (symbol_short!("created"), rosca_id),
        RoscaCreatedEvent {
            rosca_id,
            name,
            creator,
        },
    );
}

pub fn member_joined(env: &Env, rosca_id: u64, member: Address) {
    env.events().publish(
        (symbol_short!("joined"), rosca_id),
        MemberJoinedEvent { rosca_id, member },
    );
}

pub fn contribution(env: &Env, rosca_id: u64, member: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("contrib"), rosca_id),
        ContributionEvent { member, amount },
    );
}

pub fn pot_paid_out(env: &Env, rosca_id: u64, member: Address, amount: i128, cycle: u32) {
    env.events().publish(
        (symbol_short!("payout"), rosca_id),
        PotPaidOutEvent {
            member,
            amount,
            cycle,
        },
    );
}

pub fn rotation_reset(env: &Env, rosca_id: u64, rotation: u32, member_count: u32) {
    env.events().publish(
        (symbol_short!("rot_reset"), rosca_id),
        RotationResetEvent {
            rotation,
            member_count,
        },
    );
}

pub fn funded(env: &Env, rosca_id: u64, from: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funded"), rosca_id),
        FundedEvent { from, amount },
    );
}

pub fn withdrawal_requested(
    env: &Env,
    rosca_id: u64,
    index: u32,
    requester: Address,
    recipient: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("wd_req"), rosca_id),
        WithdrawalRequestedEvent {
            index,
            requester,
            recipient,
            amount,
        },
    );
}

pub fn withdrawal_approved(
    env: &Env,
    rosca_id: u64,
    index: u32,
    approver: Address,
    approvals: u32,
    required: u32,
) {
    env.events().publish(
        (symbol_short!("wd_appr"), rosca_id),
        WithdrawalApprovedEvent {
            index,
            approver,
            approvals,
            required,
        },
    );
}

pub fn withdrawal_executed(
    env: &Env,
    rosca_id: u64,
    index: u32,
    recipient: Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("wd_exec"), rosca_id),
        WithdrawalExecutedEvent {
            index,
            recipient,
            amount,
        },
    );
}

pub fn config_updated(env: &Env, config: Config) {
    env.events().publish((symbol_short!("cfg_upd"),), config);
}

pub fn admin_changed(env: &Env, new_admin: Address) {
    env.events().publish((symbol_short!("adm_chng"),), new_admin);
}
