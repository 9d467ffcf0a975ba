//! Dual-standard NFT marketplace — per-token ask/bid order books, value escrow
//! for bids, pull-based withdrawable balances for fees and royalties, JSON
//! events for off-chain indexers.

use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
mod ask;
mod bid;
mod collections;
pub mod constants;
mod errors;
mod events;
mod fees;
mod guards;
mod internal;
mod ledger;
mod market_views;
mod royalties;
mod settlement;
mod token;
mod transfer_adapter;
pub mod types;


pub use constants::*;
pub use errors::MarketError;
pub use fees::FeePolicy;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Collections,
    Creators,
    Asks,
    Bids,
    KnownTokens,
    KnownTokensInner { account_id_hash: Vec<u8> },
    Escrow,
    Withdrawable,
    SaleLogs,
    TokenOwners,
    TokenBalances,
    ApprovedFactories,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    /// Receives the market fee on every settlement (pull-based).
    pub beneficiary_id: AccountId,
    pub fee_policy: FeePolicy,

    /// Key = collection account id. `listed_at > 0` for every stored record.
    pub collections: IterableMap<AccountId, Collection>,
    /// Ordered royalty recipients per collection; immutable after registration.
    pub creators: LookupMap<AccountId, Vec<Creator>>,

    /// Key = `"{collection_id}\0{token_id}"`. Entries are tombstoned in place,
    /// never removed, so external indices stay valid.
    pub asks: LookupMap<String, Vec<Ask>>,
    pub bids: LookupMap<String, Vec<Bid>>,
    /// Every token id that ever had an ask or bid, per collection.
    pub known_token_ids: LookupMap<AccountId, IterableSet<String>>,

    /// yoctoNEAR deposited by buyers against their open bids.
    pub escrow: LookupMap<AccountId, u128>,
    /// yoctoNEAR owed to payees (beneficiary, creators); claimed via `withdraw`.
    pub withdrawable: LookupMap<AccountId, u128>,

    /// Append-only fill history per `"{collection_id}\0{token_id}"`.
    pub sale_logs: LookupMap<String, Vec<SaleLog>>,

    /// Single-owner store: `"{collection_id}\0{token_id}"` → owner.
    pub token_owners: LookupMap<String, AccountId>,
    /// Multi-owner store: `"{collection_id}\0{token_id}\0{owner}"` → quantity.
    pub token_balances: LookupMap<String, u128>,

    /// Accounts allowed to register collections besides the owner.
    pub approved_factories: IterableSet<AccountId>,

    /// Reentrancy latch; set for the duration of every mutating entry point.
    pub entered: bool,
}

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, beneficiary_id: AccountId, fee_bps: Option<u16>) -> Self {
        let fee_policy = FeePolicy::new(fee_bps.unwrap_or(DEFAULT_FEE_BPS));
        near_sdk::require!(
            fee_policy.fee_bps < BASIS_POINTS,
            "Fee rate must be below 10000 bps"
        );
        Self {
            owner_id,
            beneficiary_id,
            fee_policy,
            collections: IterableMap::new(StorageKey::Collections),
            creators: LookupMap::new(StorageKey::Creators),
            asks: LookupMap::new(StorageKey::Asks),
            bids: LookupMap::new(StorageKey::Bids),
            known_token_ids: LookupMap::new(StorageKey::KnownTokens),
            escrow: LookupMap::new(StorageKey::Escrow),
            withdrawable: LookupMap::new(StorageKey::Withdrawable),
            sale_logs: LookupMap::new(StorageKey::SaleLogs),
            token_owners: LookupMap::new(StorageKey::TokenOwners),
            token_balances: LookupMap::new(StorageKey::TokenBalances),
            approved_factories: IterableSet::new(StorageKey::ApprovedFactories),
            entered: false,
        }
    }
}

// --- Key helpers ---

/// Order-book / history / single-owner-store key. `\0` cannot appear in NEAR
/// account ids or sane token ids, preventing collisions.
pub(crate) fn order_key(collection_id: &AccountId, token_id: &str) -> String {
    format!("{}{}{}", collection_id, DELIMITER, token_id)
}

pub(crate) fn balance_key(collection_id: &AccountId, token_id: &str, owner: &AccountId) -> String {
    format!(
        "{}{}{}{}{}",
        collection_id, DELIMITER, token_id, DELIMITER, owner
    )
}
