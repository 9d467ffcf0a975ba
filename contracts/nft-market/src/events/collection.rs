use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::COLLECTION;
use crate::types::Collection;

pub fn emit_collection_created(collection_id: &AccountId, collection: &Collection) {
    EventBuilder::new(COLLECTION, "created", &collection.created_by)
        .field("collection_id", collection_id)
        .field("created_by", &collection.created_by)
        .field("name", collection.name.as_str())
        .field("symbol", collection.symbol.as_str())
        .field("slug", collection.slug.as_str())
        .field("is_fractional", collection.is_fractional)
        .field("royalty_rate_bps", collection.royalty_rate_bps)
        .field("listed_at", collection.listed_at)
        .emit();
}

pub fn emit_collection_removed(actor: &AccountId, collection_id: &AccountId) {
    EventBuilder::new(COLLECTION, "removed", actor)
        .field("collection_id", collection_id)
        .emit();
}

pub fn emit_collection_owner_changed(
    actor: &AccountId,
    collection_id: &AccountId,
    new_owner: &AccountId,
) {
    EventBuilder::new(COLLECTION, "owner_changed", actor)
        .field("collection_id", collection_id)
        .field("new_owner", new_owner)
        .emit();
}
