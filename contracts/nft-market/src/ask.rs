//! Ask side of the order book.
//!
//! Creating an ask pulls the asset out of the seller's custody into the
//! contract's (asset escrow, distinct from the value escrow for bids).
//! Cancelling returns it. Entries are tombstoned in place so indices held by
//! external indexers stay valid.

use crate::guards::check_at_least_one_yocto;
use crate::internal::{check_batch_len, validate_token_id};
use crate::*;

#[near]
impl Contract {
    /// Place sell offers, processed strictly in order. Requires at least
    /// 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn ask(&mut self, orders: Vec<OrderParams>) -> Result<(), MarketError> {
        check_at_least_one_yocto()?;
        self.enter()?;
        let seller = env::predecessor_account_id();
        let result = self.internal_create_asks(&seller, orders);
        self.exit();
        result
    }

    /// Cancel asks by slot reference. Only the recording seller may cancel;
    /// the custodied asset is returned.
    #[handle_result]
    pub fn cancel_ask(&mut self, orders: Vec<OrderRef>) -> Result<(), MarketError> {
        self.enter()?;
        let seller = env::predecessor_account_id();
        let result = self.internal_cancel_asks(&seller, orders);
        self.exit();
        result
    }
}

impl Contract {
    pub(crate) fn internal_create_asks(
        &mut self,
        seller: &AccountId,
        orders: Vec<OrderParams>,
    ) -> Result<(), MarketError> {
        check_batch_len(orders.len())?;
        for order in orders {
            self.create_one_ask(seller, order)?;
        }
        Ok(())
    }

    fn create_one_ask(&mut self, seller: &AccountId, order: OrderParams) -> Result<(), MarketError> {
        validate_token_id(&order.token_id)?;
        let price = order.price.0;
        let quantity = order.quantity.0;
        if price == 0 {
            return Err(MarketError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }
        if quantity == 0 {
            return Err(MarketError::InvalidInput(
                "Quantity must be greater than 0".into(),
            ));
        }
        let collection = self.get_collection_or_err(&order.collection_id)?;
        if !collection.is_fractional && quantity != 1 {
            return Err(MarketError::InvalidInput(
                "Single-owner tokens trade one unit per ask".into(),
            ));
        }
        if self.owned_quantity(&order.collection_id, seller, &order.token_id) < quantity {
            return Err(MarketError::InsufficientFunds(
                "Seller does not hold the asked quantity".into(),
            ));
        }

        // Asset into contract custody before the entry goes live.
        let market = env::current_account_id();
        self.adapter_transfer(
            &order.collection_id,
            &order.token_id,
            seller,
            &market,
            quantity,
        )?;

        let entry = Ask {
            active: true,
            seller_id: seller.clone(),
            unit_price: price,
            quantity,
            created_at: env::block_timestamp(),
        };
        let key = order_key(&order.collection_id, &order.token_id);
        let mut entries = self.asks.remove(&key).unwrap_or_default();
        entries.push(entry.clone());
        let index = (entries.len() - 1) as u64;
        self.asks.insert(key, entries);

        self.record_known_token(&order.collection_id, &order.token_id);
        events::emit_ask_created(&order.collection_id, &order.token_id, index, &entry);
        Ok(())
    }

    pub(crate) fn internal_cancel_asks(
        &mut self,
        seller: &AccountId,
        orders: Vec<OrderRef>,
    ) -> Result<(), MarketError> {
        check_batch_len(orders.len())?;
        for order in orders {
            self.cancel_one_ask(seller, &order)?;
        }
        Ok(())
    }

    fn cancel_one_ask(&mut self, seller: &AccountId, order: &OrderRef) -> Result<(), MarketError> {
        let key = order_key(&order.collection_id, &order.token_id);
        let entries = self
            .asks
            .get_mut(&key)
            .ok_or_else(MarketError::order_not_found)?;
        let entry = entries
            .get_mut(order.index as usize)
            .ok_or_else(|| MarketError::index_out_of_range(order.index))?;
        if !entry.active {
            return Err(MarketError::entry_inactive(order.index));
        }
        if &entry.seller_id != seller {
            return Err(MarketError::Unauthorized(
                "Only the recording seller can cancel an ask".into(),
            ));
        }
        let unit_price = entry.unit_price;
        let quantity = entry.quantity;
        entry.tombstone();

        // Return the custodied asset after the entry is dead.
        let market = env::current_account_id();
        self.adapter_transfer(
            &order.collection_id,
            &order.token_id,
            &market,
            seller,
            quantity,
        )?;

        events::emit_ask_cancelled(
            &order.collection_id,
            &order.token_id,
            order.index,
            seller,
            unit_price,
            quantity,
        );
        Ok(())
    }
}
