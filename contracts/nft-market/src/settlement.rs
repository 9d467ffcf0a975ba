//! Settlement engine: matching accepts against order-book entries, fee and
//! royalty splits, ledger mutation, and asset handoff.
//!
//! Money conservation holds per fill: `fee + royalty + seller_payout` equals
//! the gross `unit_price * quantity` exactly. Fee and royalty are always
//! computed on the per-fill gross, never on a running batch total, so rounding
//! never drifts across items with different unit economics.

use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::internal::check_batch_len;
use crate::*;

#[near]
impl Contract {
    /// Buyer-initiated: fill asks with newly attached value. The deposit must
    /// cover the summed gross of the batch; the excess is refunded.
    #[payable]
    #[handle_result]
    pub fn accept_ask(&mut self, fills: Vec<FillParams>) -> Result<(), MarketError> {
        self.enter()?;
        let buyer = env::predecessor_account_id();
        let attached = env::attached_deposit().as_yoctonear();
        let result = self.internal_accept_asks(&buyer, fills, attached);
        self.exit();
        result
    }

    /// Seller-initiated: fill bids out of the buyer's pre-funded escrow.
    /// Requires 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn accept_bid(&mut self, fills: Vec<FillParams>) -> Result<(), MarketError> {
        check_one_yocto()?;
        self.enter()?;
        let seller = env::predecessor_account_id();
        let result = self.internal_accept_bids(&seller, fills);
        self.exit();
        result
    }
}

impl Contract {
    pub(crate) fn internal_accept_asks(
        &mut self,
        buyer: &AccountId,
        fills: Vec<FillParams>,
        attached: u128,
    ) -> Result<(), MarketError> {
        check_batch_len(fills.len())?;

        let mut spent: u128 = 0;
        for fill in fills {
            let gross = self.accept_one_ask(buyer, &fill)?;
            spent = spent
                .checked_add(gross)
                .ok_or_else(|| MarketError::InvalidInput("Batch total overflows".into()))?;
        }

        // The whole call reverts on a shortfall, discarding the transfers
        // issued above.
        if attached < spent {
            return Err(MarketError::InsufficientDeposit(format!(
                "Attached {} is below the settled total {}",
                attached, spent
            )));
        }
        let excess = attached - spent;
        if excess > 0 {
            let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(excess));
        }
        Ok(())
    }

    /// Returns the gross value settled.
    fn accept_one_ask(&mut self, buyer: &AccountId, fill: &FillParams) -> Result<u128, MarketError> {
        let quantity = fill.quantity.0;
        let key = order_key(&fill.collection_id, &fill.token_id);
        let entries = self
            .asks
            .get_mut(&key)
            .ok_or_else(MarketError::order_not_found)?;
        let entry = entries
            .get_mut(fill.index as usize)
            .ok_or_else(|| MarketError::index_out_of_range(fill.index))?;
        if !entry.active {
            return Err(MarketError::entry_inactive(fill.index));
        }
        if &entry.seller_id == buyer {
            return Err(MarketError::Unauthorized(
                "Cannot accept your own ask".into(),
            ));
        }
        if quantity == 0 || quantity > entry.quantity {
            return Err(MarketError::InvalidInput(format!(
                "Requested quantity {} exceeds remaining {}",
                quantity, entry.quantity
            )));
        }
        let seller = entry.seller_id.clone();
        let unit_price = entry.unit_price;

        // Partial fill keeps the entry live; a full fill tombstones it.
        entry.quantity -= quantity;
        let remaining = entry.quantity;
        if remaining == 0 {
            entry.tombstone();
        }

        // Asset comes out of contract custody (placed there by `ask`).
        let market = env::current_account_id();
        let breakdown = self.settle_fill(
            &fill.collection_id,
            &fill.token_id,
            &seller,
            buyer,
            &market,
            unit_price,
            quantity,
        )?;

        events::emit_ask_accepted(
            &fill.collection_id,
            &fill.token_id,
            fill.index,
            &seller,
            buyer,
            unit_price,
            quantity,
            remaining,
            &breakdown,
        );
        Ok(breakdown.gross.0)
    }

    pub(crate) fn internal_accept_bids(
        &mut self,
        seller: &AccountId,
        fills: Vec<FillParams>,
    ) -> Result<(), MarketError> {
        check_batch_len(fills.len())?;
        for fill in fills {
            self.accept_one_bid(seller, &fill)?;
        }
        Ok(())
    }

    fn accept_one_bid(&mut self, seller: &AccountId, fill: &FillParams) -> Result<(), MarketError> {
        let quantity = fill.quantity.0;
        let collection = self.get_collection_or_err(&fill.collection_id)?;

        // Accepting a bid on a single-owner token consumes the caller's sole
        // unit of supply: any of the caller's own open asks on this token are
        // invalidated first, returning their custodied unit.
        if !collection.is_fractional {
            self.invalidate_own_asks(&fill.collection_id, &fill.token_id, seller)?;
        }

        let key = order_key(&fill.collection_id, &fill.token_id);
        let entries = self
            .bids
            .get_mut(&key)
            .ok_or_else(MarketError::order_not_found)?;
        let entry = entries
            .get_mut(fill.index as usize)
            .ok_or_else(|| MarketError::index_out_of_range(fill.index))?;
        if !entry.active {
            return Err(MarketError::entry_inactive(fill.index));
        }
        if &entry.buyer_id == seller {
            return Err(MarketError::Unauthorized(
                "Cannot accept your own bid".into(),
            ));
        }
        if quantity == 0 || quantity > entry.quantity {
            return Err(MarketError::InvalidInput(format!(
                "Requested quantity {} exceeds remaining {}",
                quantity, entry.quantity
            )));
        }
        let buyer = entry.buyer_id.clone();
        let unit_price = entry.unit_price;

        if self.owned_quantity(&fill.collection_id, seller, &fill.token_id) < quantity {
            return Err(MarketError::InsufficientFunds(
                "Caller does not hold the settled quantity".into(),
            ));
        }

        let entries = self
            .bids
            .get_mut(&key)
            .ok_or_else(MarketError::order_not_found)?;
        let entry = entries
            .get_mut(fill.index as usize)
            .ok_or_else(|| MarketError::index_out_of_range(fill.index))?;
        entry.quantity -= quantity;
        let remaining = entry.quantity;
        if remaining == 0 {
            entry.tombstone();
        }

        // Funds come out of the buyer's escrow, never newly attached value.
        let gross = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| MarketError::InvalidInput("Price times quantity overflows".into()))?;
        self.debit_escrow(&buyer, gross)?;

        let breakdown = self.settle_fill(
            &fill.collection_id,
            &fill.token_id,
            seller,
            &buyer,
            seller,
            unit_price,
            quantity,
        )?;

        events::emit_bid_accepted(
            &fill.collection_id,
            &fill.token_id,
            fill.index,
            seller,
            &buyer,
            unit_price,
            quantity,
            remaining,
            &breakdown,
        );
        Ok(())
    }

    /// Split the gross, credit the ledgers, record the fill, move the asset,
    /// and pay the seller. All state mutation completes before the outward
    /// value transfer.
    #[allow(clippy::too_many_arguments)]
    fn settle_fill(
        &mut self,
        collection_id: &AccountId,
        token_id: &str,
        seller: &AccountId,
        buyer: &AccountId,
        asset_source: &AccountId,
        unit_price: u128,
        quantity: u128,
    ) -> Result<SettlementBreakdown, MarketError> {
        let gross = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| MarketError::InvalidInput("Price times quantity overflows".into()))?;

        let royalty = self.pay_royalty(collection_id, unit_price, quantity, token_id)?;

        // The fee policy is consulted twice: once to size the deduction and
        // once when crediting the beneficiary. Both calls see the same payer
        // and gross, so the results are bit-identical.
        let fee = self.fee_policy.collect_fee(seller, gross);
        let beneficiary = self.beneficiary_id.clone();
        let credited = self.fee_policy.collect_fee(seller, gross);
        self.credit_withdrawable(&beneficiary, credited);
        events::emit_fee_credited(collection_id, token_id, &beneficiary, seller, credited);

        let seller_payout = gross
            .checked_sub(fee)
            .and_then(|v| v.checked_sub(royalty))
            .ok_or_else(|| {
                MarketError::InternalError("Fee and royalty exceed the gross total".into())
            })?;

        let log_key = order_key(collection_id, token_id);
        let mut logs = self.sale_logs.remove(&log_key).unwrap_or_default();
        logs.push(SaleLog {
            seller_id: seller.clone(),
            buyer_id: buyer.clone(),
            unit_price,
            quantity,
            timestamp: env::block_timestamp(),
        });
        self.sale_logs.insert(log_key, logs);

        if let Some(c) = self.collections.get_mut(collection_id) {
            c.volume_traded = c.volume_traded.saturating_add(gross);
            c.last_price = unit_price;
        }

        self.adapter_transfer(collection_id, token_id, asset_source, buyer, quantity)?;

        if seller_payout > 0 {
            let _ = Promise::new(seller.clone()).transfer(NearToken::from_yoctonear(seller_payout));
        }

        Ok(SettlementBreakdown {
            gross: U128(gross),
            fee: U128(fee),
            royalty: U128(royalty),
            seller_payout: U128(seller_payout),
        })
    }

    /// Tombstone the seller's own active asks on a token, returning each
    /// custodied unit to the seller.
    fn invalidate_own_asks(
        &mut self,
        collection_id: &AccountId,
        token_id: &str,
        seller: &AccountId,
    ) -> Result<(), MarketError> {
        let key = order_key(collection_id, token_id);
        let mut reclaimed: Vec<(u64, u128, u128)> = Vec::new();
        if let Some(entries) = self.asks.get_mut(&key) {
            for (index, entry) in entries.iter_mut().enumerate() {
                if entry.active && &entry.seller_id == seller {
                    reclaimed.push((index as u64, entry.unit_price, entry.quantity));
                    entry.tombstone();
                }
            }
        }
        let market = env::current_account_id();
        for (index, unit_price, quantity) in reclaimed {
            self.adapter_transfer(collection_id, token_id, &market, seller, quantity)?;
            events::emit_ask_cancelled(
                collection_id,
                token_id,
                index,
                seller,
                unit_price,
                quantity,
            );
        }
        Ok(())
    }
}
