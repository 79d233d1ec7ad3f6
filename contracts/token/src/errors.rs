use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    Unauthorized = 402,
    Blacklisted = 403,
    Paused = 404,
    NotPaused = 405,
    InsufficientBalance = 406,
    InsufficientAllowance = 407,
    CapExceeded = 408,
    InvalidRecipient = 409,
    InvalidSpender = 410,
    AgentNotConfigured = 411,
    AgentAlreadyConfigured = 412,
    NotBlacklisted = 413,
    ArithmeticFault = 414,
}
