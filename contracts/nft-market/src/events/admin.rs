use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::ADMIN;

pub fn emit_owner_changed(actor: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(ADMIN, "owner_changed", actor)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_beneficiary_changed(actor: &AccountId, new_beneficiary: &AccountId) {
    EventBuilder::new(ADMIN, "beneficiary_changed", actor)
        .field("new_beneficiary", new_beneficiary)
        .emit();
}

pub fn emit_fee_updated(actor: &AccountId, fee_bps: u16) {
    EventBuilder::new(ADMIN, "fee_updated", actor)
        .field("fee_bps", fee_bps)
        .emit();
}

pub fn emit_factory_added(actor: &AccountId, factory_id: &AccountId) {
    EventBuilder::new(ADMIN, "factory_added", actor)
        .field("factory_id", factory_id)
        .emit();
}

pub fn emit_factory_removed(actor: &AccountId, factory_id: &AccountId) {
    EventBuilder::new(ADMIN, "factory_removed", actor)
        .field("factory_id", factory_id)
        .emit();
}
