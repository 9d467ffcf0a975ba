//! Marketplace-wide constants.

use near_sdk::NearToken;

/// Basis points denominator (10,000 = 100%).
pub const BASIS_POINTS: u16 = 10_000;

/// Default market fee in basis points (200 = 2.0%).
pub const DEFAULT_FEE_BPS: u16 = 200;

/// Maximum token ID length.
pub const MAX_TOKEN_ID_LEN: usize = 256;

/// Maximum items per batch call (ask/bid/cancel/accept).
pub const MAX_BATCH_OPS: usize = 20;

/// Delimiter for composite storage keys.
/// `\0` is not a valid character in NEAR account IDs and is rejected in token
/// IDs, preventing key collisions.
pub const DELIMITER: &str = "\0";

/// No deposit / 1 yocto.
pub const NO_DEPOSIT: NearToken = NearToken::from_yoctonear(0);
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
