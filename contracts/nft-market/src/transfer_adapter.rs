//! Best-effort dual-standard asset transfer.
//!
//! Assets live in two stores sharing one key space: a single-owner store
//! (one owner per token id) and a multi-owner store (per-owner balances).
//! Callers never know a priori which standard a collection implements, so
//! every move tries single-owner semantics first and falls back to the
//! multi-owner store; only a failure of both is an error. No type tag is
//! consulted on the transfer path.

use crate::*;

impl Contract {
    /// Move `quantity` units from `from` to `to`. Errors only when both the
    /// single-owner and multi-owner attempts fail; state-mutating callers
    /// must propagate the error, never swallow it.
    pub(crate) fn adapter_transfer(
        &mut self,
        collection_id: &AccountId,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
        quantity: u128,
    ) -> Result<(), MarketError> {
        if self.try_single_owner_transfer(collection_id, token_id, from, to, quantity) {
            return Ok(());
        }
        if self.try_multi_owner_transfer(collection_id, token_id, from, to, quantity) {
            return Ok(());
        }
        Err(MarketError::TransferFailed(format!(
            "Cannot move {} of {}:{} from {}",
            quantity, collection_id, token_id, from
        )))
    }

    /// How many units of the token `owner` holds. Single-owner check first
    /// (1 if `owner` holds the item, else 0); multi-owner balance on fall
    /// through; 0 when both stores know nothing.
    pub(crate) fn owned_quantity(
        &self,
        collection_id: &AccountId,
        owner: &AccountId,
        token_id: &str,
    ) -> u128 {
        let key = order_key(collection_id, token_id);
        if let Some(current) = self.token_owners.get(&key) {
            return u128::from(current == owner);
        }
        self.token_balances
            .get(&balance_key(collection_id, token_id, owner))
            .copied()
            .unwrap_or(0)
    }

    fn try_single_owner_transfer(
        &mut self,
        collection_id: &AccountId,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
        quantity: u128,
    ) -> bool {
        if quantity != 1 {
            return false;
        }
        let key = order_key(collection_id, token_id);
        match self.token_owners.get(&key) {
            Some(current) if current == from => {
                self.token_owners.insert(key, to.clone());
                true
            }
            _ => false,
        }
    }

    fn try_multi_owner_transfer(
        &mut self,
        collection_id: &AccountId,
        token_id: &str,
        from: &AccountId,
        to: &AccountId,
        quantity: u128,
    ) -> bool {
        if quantity == 0 {
            return false;
        }
        let from_key = balance_key(collection_id, token_id, from);
        let balance = self.token_balances.get(&from_key).copied().unwrap_or(0);
        if balance < quantity {
            return false;
        }
        if balance == quantity {
            self.token_balances.remove(&from_key);
        } else {
            self.token_balances.insert(from_key, balance - quantity);
        }
        let to_key = balance_key(collection_id, token_id, to);
        let existing = self.token_balances.get(&to_key).copied().unwrap_or(0);
        self.token_balances.insert(to_key, existing + quantity);
        true
    }
}
