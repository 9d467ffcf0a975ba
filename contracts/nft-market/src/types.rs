use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

// --- Registry types ---

/// Collection record. Created exactly once per token-contract address;
/// `listed_at > 0` for every stored record (0 is the "does not exist"
/// sentinel used by views).
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Collection {
    /// Multi-owner (quantity) semantics when true; single-owner otherwise.
    pub is_fractional: bool,
    pub minted_by_platform: bool,
    pub created_by: AccountId,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub slug: String,
    /// Royalty taken off every settlement; 0 = no royalty.
    pub royalty_rate_bps: u16,
    /// Units minted through this contract.
    pub total_supply: u128,
    /// Nanosecond registration timestamp; always > 0.
    pub listed_at: u64,
    /// yoctoNEAR; cumulative gross across all settlements.
    pub volume_traded: u128,
    /// Last settled unit price (yoctoNEAR); 0 until the first trade.
    #[serde(default)]
    pub last_price: u128,
}

/// Royalty recipient. The shares of a collection's creator list sum to
/// exactly 10000 bps, or to 0 (no royalty).
#[near(serializers = [borsh, json])]
#[derive(Clone, PartialEq, Debug)]
pub struct Creator {
    pub recipient: AccountId,
    pub share_bps: u16,
}

/// Parameters for `register_collection`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct CollectionParams {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slug: String,
    pub is_fractional: bool,
    /// 300 = 3.0%. 0 disables royalties for the collection.
    pub royalty_rate_bps: u16,
    #[serde(default)]
    pub creators: Vec<Creator>,
    /// Recorded collection owner. Defaults to the registering account.
    #[serde(default)]
    pub created_by: Option<AccountId>,
}

// --- Order book types ---

/// A standing sell offer. Tombstoned in place (zeroed, `active = false`) on
/// cancel or full fill; `quantity > 0` while active.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Ask {
    pub active: bool,
    pub seller_id: AccountId,
    /// yoctoNEAR per unit.
    pub unit_price: u128,
    pub quantity: u128,
    pub created_at: u64,
}

impl Ask {
    pub(crate) fn tombstone(&mut self) {
        self.active = false;
        self.unit_price = 0;
        self.quantity = 0;
    }
}

/// A standing buy offer, backed by the buyer's escrow balance.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Bid {
    pub active: bool,
    pub buyer_id: AccountId,
    /// yoctoNEAR per unit.
    pub unit_price: u128,
    pub quantity: u128,
    pub created_at: u64,
}

impl Bid {
    pub(crate) fn tombstone(&mut self) {
        self.active = false;
        self.unit_price = 0;
        self.quantity = 0;
    }
}

/// One item of an `ask` or `bid` batch.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct OrderParams {
    pub collection_id: AccountId,
    pub token_id: String,
    /// yoctoNEAR per unit.
    pub price: U128,
    pub quantity: U128,
}

/// Reference to an existing order-book slot (for cancels).
#[near(serializers = [json])]
#[derive(Clone)]
pub struct OrderRef {
    pub collection_id: AccountId,
    pub token_id: String,
    pub index: u64,
}

/// One item of an `accept_ask` or `accept_bid` batch.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct FillParams {
    pub collection_id: AccountId,
    pub token_id: String,
    pub index: u64,
    pub quantity: U128,
}

// --- Settlement types ---

/// Per-fill money split; `fee + royalty + seller_payout == gross` exactly.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct SettlementBreakdown {
    pub gross: U128,
    pub fee: U128,
    pub royalty: U128,
    pub seller_payout: U128,
}

/// Append-only fill record.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SaleLog {
    pub seller_id: AccountId,
    pub buyer_id: AccountId,
    /// yoctoNEAR per unit.
    pub unit_price: u128,
    pub quantity: u128,
    pub timestamp: u64,
}

// --- View types ---

/// Best price on one side of a book, with quantity aggregated across all
/// active entries at that price.
#[near(serializers = [json])]
#[derive(Clone, PartialEq, Debug)]
pub struct PriceLevel {
    pub price: U128,
    pub quantity: U128,
}

/// One row of a holdings scan.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenHolding {
    pub collection_id: AccountId,
    pub token_id: String,
    pub quantity: U128,
}
