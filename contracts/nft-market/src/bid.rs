//! Bid side of the order book.
//!
//! Bids are backed by pre-funded value escrow: the attached deposit must cover
//! the whole batch, the batch total moves into the buyer's escrow balance, and
//! any excess is refunded immediately. Cancelling a bid debits escrow and
//! refunds the same amount.

use crate::internal::{check_batch_len, validate_token_id};
use crate::*;

#[near]
impl Contract {
    /// Place buy offers, processed strictly in order. The attached deposit
    /// funds the buyer's escrow for the whole batch.
    #[payable]
    #[handle_result]
    pub fn bid(&mut self, orders: Vec<OrderParams>) -> Result<(), MarketError> {
        self.enter()?;
        let buyer = env::predecessor_account_id();
        let attached = env::attached_deposit().as_yoctonear();
        let result = self.internal_create_bids(&buyer, orders, attached);
        self.exit();
        result
    }

    /// Cancel bids by slot reference. Only the recording buyer may cancel;
    /// the escrowed value is refunded immediately.
    #[handle_result]
    pub fn cancel_bid(&mut self, orders: Vec<OrderRef>) -> Result<(), MarketError> {
        self.enter()?;
        let buyer = env::predecessor_account_id();
        let result = self.internal_cancel_bids(&buyer, orders);
        self.exit();
        result
    }
}

impl Contract {
    pub(crate) fn internal_create_bids(
        &mut self,
        buyer: &AccountId,
        orders: Vec<OrderParams>,
        attached: u128,
    ) -> Result<(), MarketError> {
        check_batch_len(orders.len())?;

        // Validate and price the whole batch before any entry is recorded.
        let mut batch_total: u128 = 0;
        for order in &orders {
            validate_token_id(&order.token_id)?;
            if order.price.0 == 0 {
                return Err(MarketError::InvalidInput(
                    "Price must be greater than 0".into(),
                ));
            }
            if order.quantity.0 == 0 {
                return Err(MarketError::InvalidInput(
                    "Quantity must be greater than 0".into(),
                ));
            }
            let collection = self.get_collection_or_err(&order.collection_id)?;
            if !collection.is_fractional && order.quantity.0 != 1 {
                return Err(MarketError::InvalidInput(
                    "Single-owner tokens trade one unit per bid".into(),
                ));
            }
            let cost = order
                .price
                .0
                .checked_mul(order.quantity.0)
                .and_then(|c| batch_total.checked_add(c))
                .ok_or_else(|| MarketError::InvalidInput("Batch total overflows".into()))?;
            batch_total = cost;
        }
        if attached < batch_total {
            return Err(MarketError::InsufficientDeposit(format!(
                "Attached {} is below the batch total {}",
                attached, batch_total
            )));
        }

        for order in orders {
            let entry = Bid {
                active: true,
                buyer_id: buyer.clone(),
                unit_price: order.price.0,
                quantity: order.quantity.0,
                created_at: env::block_timestamp(),
            };
            let key = order_key(&order.collection_id, &order.token_id);
            let mut entries = self.bids.remove(&key).unwrap_or_default();
            entries.push(entry.clone());
            let index = (entries.len() - 1) as u64;
            self.bids.insert(key, entries);

            self.record_known_token(&order.collection_id, &order.token_id);
            events::emit_bid_created(&order.collection_id, &order.token_id, index, &entry);
        }

        self.credit_escrow(buyer, batch_total);
        let excess = attached - batch_total;
        if excess > 0 {
            let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(excess));
        }
        Ok(())
    }

    pub(crate) fn internal_cancel_bids(
        &mut self,
        buyer: &AccountId,
        orders: Vec<OrderRef>,
    ) -> Result<(), MarketError> {
        check_batch_len(orders.len())?;
        for order in orders {
            self.cancel_one_bid(buyer, &order)?;
        }
        Ok(())
    }

    fn cancel_one_bid(&mut self, buyer: &AccountId, order: &OrderRef) -> Result<(), MarketError> {
        let key = order_key(&order.collection_id, &order.token_id);
        let entries = self
            .bids
            .get_mut(&key)
            .ok_or_else(MarketError::order_not_found)?;
        let entry = entries
            .get_mut(order.index as usize)
            .ok_or_else(|| MarketError::index_out_of_range(order.index))?;
        if !entry.active {
            return Err(MarketError::entry_inactive(order.index));
        }
        if &entry.buyer_id != buyer {
            return Err(MarketError::Unauthorized(
                "Only the recording buyer can cancel a bid".into(),
            ));
        }
        let unit_price = entry.unit_price;
        let quantity = entry.quantity;
        entry.tombstone();

        // quantity > 0 while active, so this cannot overflow past the escrow
        // credited at creation.
        let locked = unit_price * quantity;
        self.debit_escrow(buyer, locked)?;
        let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(locked));

        events::emit_bid_cancelled(
            &order.collection_id,
            &order.token_id,
            order.index,
            buyer,
            unit_price,
            quantity,
        );
        Ok(())
    }
}
