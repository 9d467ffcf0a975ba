use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::TOKEN;

pub fn emit_token_minted(
    collection_id: &AccountId,
    token_id: &str,
    owner_id: &AccountId,
    quantity: u128,
) {
    EventBuilder::new(TOKEN, "minted", owner_id)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("owner_id", owner_id)
        .field("quantity", quantity)
        .emit();
}

pub fn emit_token_transferred(
    collection_id: &AccountId,
    token_id: &str,
    from: &AccountId,
    to: &AccountId,
    quantity: u128,
) {
    EventBuilder::new(TOKEN, "transferred", from)
        .field("collection_id", collection_id)
        .field("token_id", token_id)
        .field("from", from)
        .field("to", to)
        .field("quantity", quantity)
        .emit();
}
