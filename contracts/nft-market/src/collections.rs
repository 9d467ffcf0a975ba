//! Collection registry and creator/royalty table.

use crate::*;

#[near]
impl Contract {
    /// Register a collection under its token-contract account id. Privileged:
    /// the contract owner or an approved factory. A collection address can be
    /// registered exactly once.
    #[handle_result]
    pub fn register_collection(
        &mut self,
        collection_id: AccountId,
        params: CollectionParams,
    ) -> Result<(), MarketError> {
        let actor = env::predecessor_account_id();
        self.internal_register_collection(&actor, collection_id, params)
    }

    // ── Views ────────────────────────────────────────────────────────

    pub fn get_collection(&self, collection_id: AccountId) -> Option<Collection> {
        self.collections.get(&collection_id).cloned()
    }

    pub fn get_collections(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(AccountId, Collection)> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.collections
            .iter()
            .skip(start)
            .take(limit)
            .map(|(id, c)| (id.clone(), c.clone()))
            .collect()
    }

    pub fn get_creators(&self, collection_id: AccountId) -> Vec<Creator> {
        self.creators
            .get(&collection_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Contract {
    pub(crate) fn internal_register_collection(
        &mut self,
        actor: &AccountId,
        collection_id: AccountId,
        params: CollectionParams,
    ) -> Result<(), MarketError> {
        if actor != &self.owner_id && !self.approved_factories.contains(actor) {
            return Err(MarketError::only_owner(
                "the contract owner or an approved factory",
            ));
        }
        if self.collections.contains_key(&collection_id) {
            return Err(MarketError::InvalidInput(
                "Collection is already registered".into(),
            ));
        }
        if params.royalty_rate_bps >= BASIS_POINTS {
            return Err(MarketError::InvalidInput(
                "Royalty rate must be below 10000 bps".into(),
            ));
        }
        validate_creator_shares(&params.creators)?;

        let created_by = params.created_by.unwrap_or_else(|| actor.clone());
        let collection = Collection {
            is_fractional: params.is_fractional,
            minted_by_platform: actor == &self.owner_id,
            created_by,
            name: params.name,
            symbol: params.symbol,
            description: params.description,
            slug: params.slug,
            royalty_rate_bps: params.royalty_rate_bps,
            total_supply: 0,
            listed_at: env::block_timestamp(),
            volume_traded: 0,
            last_price: 0,
        };

        events::emit_collection_created(&collection_id, &collection);
        self.creators.insert(collection_id.clone(), params.creators);
        self.collections.insert(collection_id, collection);
        Ok(())
    }

    pub(crate) fn internal_remove_collection(
        &mut self,
        actor: &AccountId,
        collection_id: &AccountId,
    ) -> Result<(), MarketError> {
        self.assert_owner(actor)?;
        self.collections
            .remove(collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        self.creators.remove(collection_id);
        events::emit_collection_removed(actor, collection_id);
        Ok(())
    }

    pub(crate) fn internal_set_collection_owner(
        &mut self,
        actor: &AccountId,
        collection_id: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), MarketError> {
        self.assert_owner(actor)?;
        let collection = self
            .collections
            .get_mut(collection_id)
            .ok_or_else(MarketError::collection_not_found)?;
        collection.created_by = new_owner.clone();
        events::emit_collection_owner_changed(actor, collection_id, &new_owner);
        Ok(())
    }
}

/// Creator shares must sum to exactly 10000 bps, or to 0 (no royalty).
pub(crate) fn validate_creator_shares(creators: &[Creator]) -> Result<(), MarketError> {
    let sum: u64 = creators.iter().map(|c| c.share_bps as u64).sum();
    if sum != 0 && sum != BASIS_POINTS as u64 {
        return Err(MarketError::InvalidInput(format!(
            "Creator shares must sum to 0 or {} bps, got {}",
            BASIS_POINTS, sum
        )));
    }
    Ok(())
}
