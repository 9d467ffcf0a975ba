//! Owner-only administration.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.assert_owner(&actor)?;
        self.owner_id = new_owner.clone();
        events::emit_owner_changed(&actor, &new_owner);
        Ok(())
    }

    #[handle_result]
    pub fn set_beneficiary(&mut self, new_beneficiary: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.assert_owner(&actor)?;
        self.beneficiary_id = new_beneficiary.clone();
        events::emit_beneficiary_changed(&actor, &new_beneficiary);
        Ok(())
    }

    #[handle_result]
    pub fn set_fee_bps(&mut self, fee_bps: u16) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.assert_owner(&actor)?;
        if fee_bps >= BASIS_POINTS {
            return Err(MarketError::InvalidInput(
                "Fee rate must be below 10000 bps".into(),
            ));
        }
        self.fee_policy = FeePolicy::new(fee_bps);
        events::emit_fee_updated(&actor, fee_bps);
        Ok(())
    }

    #[handle_result]
    pub fn add_approved_factory(&mut self, factory_id: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.assert_owner(&actor)?;
        self.approved_factories.insert(factory_id.clone());
        events::emit_factory_added(&actor, &factory_id);
        Ok(())
    }

    #[handle_result]
    pub fn remove_approved_factory(&mut self, factory_id: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.assert_owner(&actor)?;
        if !self.approved_factories.remove(&factory_id) {
            return Err(MarketError::NotFound("Factory is not approved".into()));
        }
        events::emit_factory_removed(&actor, &factory_id);
        Ok(())
    }

    #[handle_result]
    pub fn set_collection_owner(
        &mut self,
        collection_id: AccountId,
        new_owner: AccountId,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.internal_set_collection_owner(&actor, &collection_id, new_owner)
    }

    /// Delist a collection entirely. Open orders on its tokens keep their
    /// custodied assets and escrow and can still be cancelled.
    #[handle_result]
    pub fn remove_collection(&mut self, collection_id: AccountId) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.internal_remove_collection(&actor, &collection_id)
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn get_beneficiary(&self) -> AccountId {
        self.beneficiary_id.clone()
    }

    pub fn get_fee_bps(&self) -> u16 {
        self.fee_policy.fee_bps
    }
}
