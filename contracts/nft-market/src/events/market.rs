use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;
use crate::types::{SettlementBreakdown, Ask, Bid};

// --- Asks ---

pub fn emit_ask_created(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    entry: &Ask,
) {
    EventBuilder::new(MARKET, "ask_created", &entry.seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("seller_id", &entry.seller_id)
        .field("unit_price", entry.unit_price)
        .field("quantity", entry.quantity)
        .field("created_at", entry.created_at)
        .emit();
}

pub fn emit_ask_cancelled(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    seller_id: &AccountId,
    unit_price: u128,
    quantity: u128,
) {
    EventBuilder::new(MARKET, "ask_cancelled", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("seller_id", seller_id)
        .field("unit_price", unit_price)
        .field("quantity", quantity)
        .emit();
}

#[allow(clippy::too_many_arguments)]
pub fn emit_ask_accepted(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    seller_id: &AccountId,
    buyer_id: &AccountId,
    unit_price: u128,
    quantity: u128,
    remaining: u128,
    breakdown: &SettlementBreakdown,
) {
    EventBuilder::new(MARKET, "ask_accepted", buyer_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("seller_id", seller_id)
        .field("buyer_id", buyer_id)
        .field("unit_price", unit_price)
        .field("quantity", quantity)
        .field("remaining", remaining)
        .field("gross", breakdown.gross)
        .field("fee", breakdown.fee)
        .field("royalty", breakdown.royalty)
        .field("seller_payout", breakdown.seller_payout)
        .emit();
}

// --- Bids ---

pub fn emit_bid_created(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    entry: &Bid,
) {
    EventBuilder::new(MARKET, "bid_created", &entry.buyer_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("buyer_id", &entry.buyer_id)
        .field("unit_price", entry.unit_price)
        .field("quantity", entry.quantity)
        .field("created_at", entry.created_at)
        .emit();
}

pub fn emit_bid_cancelled(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    buyer_id: &AccountId,
    unit_price: u128,
    quantity: u128,
) {
    EventBuilder::new(MARKET, "bid_cancelled", buyer_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("buyer_id", buyer_id)
        .field("unit_price", unit_price)
        .field("quantity", quantity)
        .emit();
}

#[allow(clippy::too_many_arguments)]
pub fn emit_bid_accepted(
    collection_id: &AccountId,
    token_id: &str,
    index: u64,
    seller_id: &AccountId,
    buyer_id: &AccountId,
    unit_price: u128,
    quantity: u128,
    remaining: u128,
    breakdown: &SettlementBreakdown,
) {
    EventBuilder::new(MARKET, "bid_accepted", seller_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("index", index)
        .field("seller_id", seller_id)
        .field("buyer_id", buyer_id)
        .field("unit_price", unit_price)
        .field("quantity", quantity)
        .field("remaining", remaining)
        .field("gross", breakdown.gross)
        .field("fee", breakdown.fee)
        .field("royalty", breakdown.royalty)
        .field("seller_payout", breakdown.seller_payout)
        .emit();
}

// --- Money ---

pub fn emit_royalty_paid(
    collection_id: &AccountId,
    token_id: &str,
    recipient: &AccountId,
    amount: u128,
) {
    EventBuilder::new(MARKET, "royalty_paid", recipient)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("recipient", recipient)
        .field("amount", amount)
        .emit();
}

pub fn emit_fee_credited(
    collection_id: &AccountId,
    token_id: &str,
    beneficiary_id: &AccountId,
    payer_id: &AccountId,
    amount: u128,
) {
    EventBuilder::new(MARKET, "fee_credited", beneficiary_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("beneficiary_id", beneficiary_id)
        .field("payer_id", payer_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdrawal(payee: &AccountId, amount: u128, remaining: u128) {
    EventBuilder::new(MARKET, "withdrawal", payee)
        .field("payee", payee)
        .field("amount", amount)
        .field("remaining", remaining)
        .emit();
}
