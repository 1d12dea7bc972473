use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    RoscaNotFound = 4,
    RoscaFull = 5,
    AlreadyMember = 6,
    NotMember = 7,
    InvalidInviteCode = 8,
    InvalidAmount = 9,
    InvalidConfig = 10,
    // Pot accounting
    PotWouldOverfund = 11,
    PotNotFull = 12,
    // Token layer
    NotEnoughAllowance = 13,
    InsufficientBalance = 14,
    InsufficientReserve = 15,
    // Withdrawal workflow
    RequestNotFound = 16,
    AlreadyApproved = 17,
    AlreadyExecuted = 18,
}
