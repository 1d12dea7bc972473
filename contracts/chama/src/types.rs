use soroban_sdk::{contracttype, Address, Map, String, Vec};

/// Day of the week a contribution or disbursement falls on.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Days since Sunday.
    pub fn index(&self) -> u64 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Recurrence {
    Weekly,
    Monthly,
}

/// How many distinct member approvals a withdrawal request needs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QuorumPolicy {
    /// Every current member.
    Unanimous,
    /// Fixed count, capped at the member count.
    Threshold(u32),
}

/// Protocol-wide settings owned by the protocol admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub max_members: u32, // 0 = unbounded
    pub quorum: QuorumPolicy,
}

/// Creation record supplied to the directory. Immutable once the group exists.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoscaDetails {
    pub token: Address,
    pub name: String,
    pub image_link: String,
    pub goal_amount: i128,
    pub contribution_amount: i128,
    pub contribution_day: Weekday,
    pub contribution_recurrence: Recurrence,
    pub disbursement_day: Weekday,
    pub disbursement_recurrence: Recurrence,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub address: Address,
    pub is_potted: bool,
    pub joined_at: u64,
}

/// Core group state. Member order is join order and rotation order.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Rosca {
    pub id: u64,
    pub creator: Address,
    pub details: RoscaDetails,
    pub invite_code: String,
    pub members: Vec<Member>,
    pub current_pot_index: u32,
    pub rotation: u32,
    pub created_at: u64,
}

/// The pot currently collecting contributions.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PotCycle {
    pub cycle: u32,
    pub pot_amount: i128,
    pub pot_balance: i128,
    pub owner: Address,
    pub contributions: Map<Address, i128>,
}

/// Public projection of a group; the invite code is never exposed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoscaSummary {
    pub id: u64,
    pub creator: Address,
    pub details: RoscaDetails,
    pub member_count: u32,
    pub current_pot_index: u32,
    pub rotation: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PotDetails {
    pub cycle: u32,
    pub pot_amount: i128,
    pub pot_balance: i128,
    pub pot_owner: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Pending,
    Executed,
}

/// Request to move reserve funds (money that reached the group outside of
/// contributions) to a recipient once enough members approve.
#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawalRequest {
    pub index: u32,
    pub requester: Address,
    pub recipient: Address,
    pub amount: i128,
    pub approvals: Vec<Address>,
    pub status: RequestStatus,
    pub created_at: u64,
    pub executed_at: u64,
}

/// One page of the group directory. `next_offset` is 0 once the end is reached.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoscaPage {
    pub roscas: Vec<u64>,
    pub next_offset: u32,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    RoscaCounter,
    Rosca(u64),
    Pot(u64),
    Reserve(u64),
    WithdrawalCount(u64),
    Withdrawal(u64, u32),
    CreatorRoscas(Address),
    MemberRoscas(Address),
}
