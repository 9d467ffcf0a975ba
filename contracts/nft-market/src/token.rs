//! Token plumbing: minting into the dual-standard stores and plain
//! owner-initiated transfers. Mechanical CRUD; the settlement engine only
//! touches tokens through the transfer adapter.

use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::internal::validate_token_id;
use crate::*;

#[near]
impl Contract {
    /// Mint units of a token into its collection's store. Callable by the
    /// collection's recorded owner or the contract owner. Single-owner
    /// collections mint exactly one unit per token id.
    #[handle_result]
    pub fn mint(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        owner_id: AccountId,
        quantity: U128,
    ) -> Result<(), MarketError> {
        self.enter()?;
        let minter = env::predecessor_account_id();
        let result = self.internal_mint(&minter, &collection_id, &token_id, &owner_id, quantity.0);
        self.exit();
        result
    }

    /// Plain transfer between accounts. Requires 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn token_transfer(
        &mut self,
        collection_id: AccountId,
        token_id: String,
        receiver_id: AccountId,
        quantity: U128,
    ) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.enter()?;
        let sender = env::predecessor_account_id();
        let result = self.internal_token_transfer(
            &sender,
            &collection_id,
            &token_id,
            &receiver_id,
            quantity.0,
        );
        self.exit();
        result
    }

    // ── Views ────────────────────────────────────────────────────────

    /// Owner of a single-owner token; None for fractional tokens.
    pub fn token_owner_of(&self, collection_id: AccountId, token_id: String) -> Option<AccountId> {
        self.token_owners
            .get(&order_key(&collection_id, &token_id))
            .cloned()
    }

    pub fn token_balance_of(
        &self,
        collection_id: AccountId,
        owner_id: AccountId,
        token_id: String,
    ) -> U128 {
        U128(self.owned_quantity(&collection_id, &owner_id, &token_id))
    }
}

impl Contract {
    pub(crate) fn internal_mint(
        &mut self,
        minter: &AccountId,
        collection_id: &AccountId,
        token_id: &str,
        owner_id: &AccountId,
        quantity: u128,
    ) -> Result<(), MarketError> {
        validate_token_id(token_id)?;
        if quantity == 0 {
            return Err(MarketError::InvalidInput(
                "Mint quantity must be greater than 0".into(),
            ));
        }
        let collection = self.get_collection_or_err(collection_id)?;
        if minter != &collection.created_by && minter != &self.owner_id {
            return Err(MarketError::only_owner("the collection owner"));
        }

        if collection.is_fractional {
            let key = balance_key(collection_id, token_id, owner_id);
            let balance = self.token_balances.get(&key).copied().unwrap_or(0);
            self.token_balances.insert(key, balance + quantity);
        } else {
            if quantity != 1 {
                return Err(MarketError::InvalidInput(
                    "Single-owner tokens mint exactly one unit".into(),
                ));
            }
            let key = order_key(collection_id, token_id);
            if self.token_owners.contains_key(&key) {
                return Err(MarketError::InvalidState(
                    "Token is already minted".into(),
                ));
            }
            self.token_owners.insert(key, owner_id.clone());
        }

        if let Some(c) = self.collections.get_mut(collection_id) {
            c.total_supply = c.total_supply.saturating_add(quantity);
        }
        events::emit_token_minted(collection_id, token_id, owner_id, quantity);
        Ok(())
    }

    pub(crate) fn internal_token_transfer(
        &mut self,
        sender: &AccountId,
        collection_id: &AccountId,
        token_id: &str,
        receiver_id: &AccountId,
        quantity: u128,
    ) -> Result<(), MarketError> {
        if sender == receiver_id {
            return Err(MarketError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }
        self.adapter_transfer(collection_id, token_id, sender, receiver_id, quantity)?;
        events::emit_token_transferred(collection_id, token_id, sender, receiver_id, quantity);
        Ok(())
    }
}
