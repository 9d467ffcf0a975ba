//! Shared internal helpers.

use crate::*;

/// Hash an account ID for use in nested storage keys.
pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn validate_token_id(token_id: &str) -> Result<(), MarketError> {
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(MarketError::InvalidInput(format!(
            "Token ID must be 1..={} characters",
            MAX_TOKEN_ID_LEN
        )));
    }
    if token_id.contains('\0') {
        return Err(MarketError::InvalidInput(
            "Token ID must not contain NUL".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_batch_len(len: usize) -> Result<(), MarketError> {
    if len > MAX_BATCH_OPS {
        return Err(MarketError::InvalidInput(format!(
            "Batch exceeds maximum of {} items",
            MAX_BATCH_OPS
        )));
    }
    Ok(())
}

impl Contract {
    /// Record a token id in the collection's known set (dedup is free: it is a
    /// set). Feeds floor-price and holdings enumeration.
    pub(crate) fn record_known_token(&mut self, collection_id: &AccountId, token_id: &str) {
        let mut set = self
            .known_token_ids
            .remove(collection_id)
            .unwrap_or_else(|| {
                IterableSet::new(StorageKey::KnownTokensInner {
                    account_id_hash: hash_account_id(collection_id),
                })
            });
        set.insert(token_id.to_string());
        self.known_token_ids.insert(collection_id.clone(), set);
    }

    pub(crate) fn get_collection_or_err(
        &self,
        collection_id: &AccountId,
    ) -> Result<Collection, MarketError> {
        self.collections
            .get(collection_id)
            .cloned()
            .ok_or_else(MarketError::collection_not_found)
    }
}
