#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

mod admin;
mod contribution;
mod directory;
mod errors;
mod events;
mod group;
mod payout;
mod schedule;
mod storage;
mod types;
mod withdrawal;

pub use errors::ContractError;
pub use events::{
    ContributionEvent, FundedEvent, MemberJoinedEvent, PotPaidOutEvent, RoscaCreatedEvent,
    RotationResetEvent, WithdrawalApprovedEvent, WithdrawalExecutedEvent,
    WithdrawalRequestedEvent,
};
pub use types::*;

#[contract]
pub struct ChamaContract;

#[contractimpl]
impl ChamaContract {
    /// Initialize the protocol with a global admin and its configuration.
    pub fn __constructor(env: Env, admin: Address, config: Config) {
        if let Err(err) = admin::initialize(&env, admin, config) {
            panic_with_error!(&env, err);
        }
    }

    // ─── Directory ──────────────────────────────────────────────────

    /// Create a new rosca. The creator becomes the first member and holds
    /// the first rotation slot.
    pub fn create_rosca(
        env: Env,
        creator: Address,
        details: RoscaDetails,
        invite_code: String,
    ) -> Result<u64, ContractError> {
        directory::create_rosca(&env, creator, details, invite_code)
    }

    /// All roscas created by `owner`, in creation order.
    pub fn get_roscas_by_owner(env: Env, owner: Address) -> Vec<u64> {
        directory::get_roscas_by_owner(&env, owner)
    }

    /// All roscas `member` belongs to, including the ones it created.
    pub fn get_member_roscas(env: Env, member: Address) -> Vec<u64> {
        directory::get_member_roscas(&env, member)
    }

    /// Page through every rosca. `next_offset` is 0 at the end.
    pub fn get_roscas(env: Env, offset: u32, limit: u32) -> RoscaPage {
        directory::get_roscas(&env, offset, limit)
    }

    pub fn get_rosca_count(env: Env) -> u64 {
        directory::get_rosca_count(&env)
    }

    // ─── Membership ─────────────────────────────────────────────────

    /// Join a rosca by presenting its invite code.
    pub fn join_rosca(
        env: Env,
        member: Address,
        rosca_id: u64,
        invite_code: String,
    ) -> Result<(), ContractError> {
        group::join_rosca(&env, member, rosca_id, invite_code)
    }

    /// Members in rotation order.
    pub fn get_members(env: Env, rosca_id: u64) -> Result<Vec<Member>, ContractError> {
        group::get_members(&env, rosca_id)
    }

    pub fn get_rosca_details(env: Env, rosca_id: u64) -> Result<RoscaSummary, ContractError> {
        group::get_rosca_details(&env, rosca_id)
    }

    // ─── Contributions ──────────────────────────────────────────────

    /// Contribute `amount` to the active pot. The member must have approved
    /// this contract to spend at least `amount` of the rosca token.
    pub fn contribute(
        env: Env,
        member: Address,
        rosca_id: u64,
        amount: i128,
    ) -> Result<(), ContractError> {
        contribution::contribute(&env, member, rosca_id, amount)
    }

    /// Move tokens into the rosca's reserve, outside of the pot.
    pub fn fund_rosca(
        env: Env,
        from: Address,
        rosca_id: u64,
        amount: i128,
    ) -> Result<(), ContractError> {
        contribution::fund_rosca(&env, from, rosca_id, amount)
    }

    pub fn get_current_pot_details(env: Env, rosca_id: u64) -> Result<PotDetails, ContractError> {
        contribution::get_current_pot_details(&env, rosca_id)
    }

    /// Amount `member` has put into the active pot.
    pub fn get_contribution(
        env: Env,
        rosca_id: u64,
        member: Address,
    ) -> Result<i128, ContractError> {
        contribution::get_contribution(&env, rosca_id, member)
    }

    pub fn get_reserve_balance(env: Env, rosca_id: u64) -> Result<i128, ContractError> {
        contribution::get_reserve_balance(&env, rosca_id)
    }

    // ─── Payouts ────────────────────────────────────────────────────

    /// Pay the full pot to the current rotation slot. Any member can call
    /// this once the pot has reached its goal.
    pub fn pay_out_pot(env: Env, caller: Address, rosca_id: u64) -> Result<(), ContractError> {
        payout::pay_out_pot(&env, caller, rosca_id)
    }

    /// Member slated to receive the active pot.
    pub fn get_current_recipient(env: Env, rosca_id: u64) -> Result<Address, ContractError> {
        payout::get_current_recipient(&env, rosca_id)
    }

    // ─── Withdrawals ────────────────────────────────────────────────

    /// Ask to move reserve funds to `recipient`. Returns the request index.
    pub fn withdrawal_request(
        env: Env,
        requester: Address,
        rosca_id: u64,
        recipient: Address,
        amount: i128,
    ) -> Result<u32, ContractError> {
        withdrawal::withdrawal_request(&env, requester, rosca_id, recipient, amount)
    }

    /// Approve a pending request; executes it once the quorum is reached.
    pub fn approve_withdrawal_request(
        env: Env,
        approver: Address,
        rosca_id: u64,
        index: u32,
    ) -> Result<RequestStatus, ContractError> {
        withdrawal::approve_withdrawal_request(&env, approver, rosca_id, index)
    }

    pub fn get_withdrawal_request(
        env: Env,
        rosca_id: u64,
        index: u32,
    ) -> Result<WithdrawalRequest, ContractError> {
        withdrawal::get_withdrawal_request(&env, rosca_id, index)
    }

    pub fn get_withdrawal_count(env: Env, rosca_id: u64) -> Result<u32, ContractError> {
        withdrawal::get_withdrawal_count(&env, rosca_id)
    }

    // ─── Schedule ───────────────────────────────────────────────────

    /// Next midnight (UTC) on or after `now` that matches `weekday` under
    /// `recurrence`.
    pub fn next_occurrence(_env: Env, weekday: Weekday, recurrence: Recurrence, now: u64) -> u64 {
        schedule::next_occurrence(weekday, recurrence, now)
    }

    pub fn next_contribution_date(env: Env, rosca_id: u64) -> Result<u64, ContractError> {
        group::next_contribution_date(&env, rosca_id)
    }

    pub fn next_disbursement_date(env: Env, rosca_id: u64) -> Result<u64, ContractError> {
        group::next_disbursement_date(&env, rosca_id)
    }

    // ─── Admin ──────────────────────────────────────────────────────

    /// Replace the protocol configuration.
    pub fn set_config(env: Env, admin: Address, config: Config) -> Result<(), ContractError> {
        admin::set_config(&env, admin, config)
    }

    /// Transfer the protocol admin role.
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        admin::set_admin(&env, current_admin, new_admin)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        admin::get_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env)
    }
}
