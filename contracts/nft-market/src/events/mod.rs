//! NEP-297-style JSON events for off-chain indexers.
//!
//! Every event carries the full relevant entry so indexers never need a
//! follow-up read.

mod builder;
mod types;

mod admin;
mod collection;
mod market;
mod token;

pub use admin::*;
pub use collection::*;
pub use market::*;
pub use token::*;

pub(crate) const STANDARD: &str = "nft_market";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

// Event types (the `event` field).
pub(crate) const MARKET: &str = "market";
pub(crate) const COLLECTION: &str = "collection";
pub(crate) const TOKEN: &str = "token";
pub(crate) const ADMIN: &str = "admin";
