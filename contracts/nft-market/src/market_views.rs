//! Read-only market queries. These never fail; documented "not found"
//! sentinels are 0 / None / empty.

use near_sdk::json_types::U128;

use crate::*;

#[near]
impl Contract {
    /// Minimum active ask unit-price across every token the collection has
    /// ever traded; 0 if there are no active asks.
    pub fn floor_price(&self, collection_id: AccountId) -> U128 {
        let mut floor: Option<u128> = None;
        if let Some(token_ids) = self.known_token_ids.get(&collection_id) {
            for token_id in token_ids.iter() {
                if let Some(entries) = self.asks.get(&order_key(&collection_id, token_id)) {
                    for entry in entries.iter().filter(|e| e.active) {
                        floor = Some(match floor {
                            Some(f) => f.min(entry.unit_price),
                            None => entry.unit_price,
                        });
                    }
                }
            }
        }
        U128(floor.unwrap_or(0))
    }

    /// Lowest active ask price for a token, with quantity aggregated across
    /// all entries at that price. None if the book is empty.
    pub fn lowest_ask(&self, collection_id: AccountId, token_id: String) -> Option<PriceLevel> {
        let entries = self.asks.get(&order_key(&collection_id, &token_id))?;
        let best = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.unit_price)
            .min()?;
        let quantity = entries
            .iter()
            .filter(|e| e.active && e.unit_price == best)
            .map(|e| e.quantity)
            .sum();
        Some(PriceLevel {
            price: U128(best),
            quantity: U128(quantity),
        })
    }

    /// Highest active bid price for a token, with quantity aggregated across
    /// all entries at that price. None if the book is empty.
    pub fn highest_bid(&self, collection_id: AccountId, token_id: String) -> Option<PriceLevel> {
        let entries = self.bids.get(&order_key(&collection_id, &token_id))?;
        let best = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.unit_price)
            .max()?;
        let quantity = entries
            .iter()
            .filter(|e| e.active && e.unit_price == best)
            .map(|e| e.quantity)
            .sum();
        Some(PriceLevel {
            price: U128(best),
            quantity: U128(quantity),
        })
    }

    /// Full ask book for a token, tombstones included so slot indices line up.
    pub fn get_asks(
        &self,
        collection_id: AccountId,
        token_id: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Ask> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.asks
            .get(&order_key(&collection_id, &token_id))
            .map(|entries| entries.iter().skip(start).take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Full bid book for a token, tombstones included so slot indices line up.
    pub fn get_bids(
        &self,
        collection_id: AccountId,
        token_id: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Bid> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.bids
            .get(&order_key(&collection_id, &token_id))
            .map(|entries| entries.iter().skip(start).take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Append-only fill history for a token (paginated).
    pub fn get_price_history(
        &self,
        collection_id: AccountId,
        token_id: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<SaleLog> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.sale_logs
            .get(&order_key(&collection_id, &token_id))
            .map(|logs| logs.iter().skip(start).take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Token ids a collection has ever traded.
    pub fn get_known_tokens(
        &self,
        collection_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<String> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50).min(100) as usize;
        self.known_token_ids
            .get(&collection_id)
            .map(|set| set.iter().skip(start).take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Holdings scan: every known token of the given collections (all
    /// registered collections when None) that `account_id` holds.
    pub fn tokens_of(
        &self,
        account_id: AccountId,
        collection_ids: Option<Vec<AccountId>>,
    ) -> Vec<TokenHolding> {
        let collections: Vec<AccountId> = match collection_ids {
            Some(ids) => ids,
            None => self.collections.iter().map(|(id, _)| id.clone()).collect(),
        };
        let mut holdings = Vec::new();
        for collection_id in collections {
            let Some(token_ids) = self.known_token_ids.get(&collection_id) else {
                continue;
            };
            for token_id in token_ids.iter() {
                let quantity = self.owned_quantity(&collection_id, &account_id, token_id);
                if quantity > 0 {
                    holdings.push(TokenHolding {
                        collection_id: collection_id.clone(),
                        token_id: token_id.clone(),
                        quantity: U128(quantity),
                    });
                }
            }
        }
        holdings
    }
}
