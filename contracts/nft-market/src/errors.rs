//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError::Xxx)`, the SDK calls `env::panic_str()` with the Display
//! message — same on-wire behaviour as raw panics, but with structured,
//! testable codes.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketError {
    /// Caller lacks permission (not the order's creator, not the owner, etc.)
    Unauthorized(String),
    /// Invalid parameters, IDs, or data from the caller.
    InvalidInput(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// Operation not allowed given current state (tombstoned entry, reentrancy).
    InvalidState(String),
    /// Attached deposit is too low.
    InsufficientDeposit(String),
    /// Escrow or withdrawable balance is too low.
    InsufficientFunds(String),
    /// Both transfer-adapter attempts failed.
    TransferFailed(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            Self::TransferFailed(msg) => write!(f, "Transfer failed: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketError {
    pub fn collection_not_found() -> Self {
        Self::NotFound("Collection not found".into())
    }
    pub fn order_not_found() -> Self {
        Self::NotFound("No order book for this token".into())
    }
    pub fn index_out_of_range(index: u64) -> Self {
        Self::InvalidInput(format!("Order index {} out of range", index))
    }
    pub fn entry_inactive(index: u64) -> Self {
        Self::InvalidState(format!("Order at index {} is no longer active", index))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn reentrant_call() -> Self {
        Self::InvalidState("Reentrant call rejected".into())
    }
}
