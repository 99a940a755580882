// Error messages surfaced through `require!` / `sc_panic!`.
// Every one of them aborts the transaction and reverts its writes.

pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller is not an owner";

pub const ERR_NO_OWNERS: &str = "Invalid configuration: owner list is empty";
pub const ERR_INVALID_THRESHOLD: &str = "Invalid configuration: threshold out of range";
pub const ERR_ZERO_OWNER: &str = "Invalid configuration: zero address owner";
pub const ERR_DUPLICATE_OWNER: &str = "Invalid configuration: duplicate owner";

pub const ERR_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
pub const ERR_ALREADY_CONFIRMED: &str = "Proposal already confirmed by caller";
pub const ERR_INSUFFICIENT_APPROVALS: &str = "Not enough confirmations";
pub const ERR_NOT_EXECUTED: &str = "Proposal not executed";
pub const ERR_NOT_CONFIRMED: &str = "Proposal not confirmed by caller";

/// Carried by the `actionFailed` event rather than a revert, so the
/// executed flag survives.
pub const ERR_INSUFFICIENT_FUNDS: &str = "Action failed: insufficient vault balance";

pub const ERR_INVALID_AMOUNT: &str = "Deposit amount must be positive";
