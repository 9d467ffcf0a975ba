//! Royalty computation and crediting.

use primitive_types::U256;

use crate::*;

impl Contract {
    /// Credit every creator's withdrawable balance with its share of the
    /// royalty on `unit_price * quantity` and return the sum of shares, so
    /// the caller subtracts it once from the seller's payout.
    ///
    /// The two-stage basis-point division is load-bearing: the royalty pool
    /// is truncated first (`total * rate / 10000`), then each creator share
    /// is truncated again (`pool * share / 10000`). Merging the stages into
    /// one fraction changes results at small remainders and would break
    /// payout compatibility.
    pub(crate) fn pay_royalty(
        &mut self,
        collection_id: &AccountId,
        unit_price: u128,
        quantity: u128,
        token_id: &str,
    ) -> Result<u128, MarketError> {
        let collection = self.get_collection_or_err(collection_id)?;
        if collection.royalty_rate_bps == 0 {
            return Ok(0);
        }
        let creators = self
            .creators
            .get(collection_id)
            .cloned()
            .unwrap_or_default();
        if creators.is_empty() {
            // Dead royalty: a rate with no recipients contributes nothing.
            return Ok(0);
        }

        let total = unit_price
            .checked_mul(quantity)
            .ok_or_else(|| MarketError::InvalidInput("Price times quantity overflows".into()))?;
        let pool = bps_of(total, collection.royalty_rate_bps);

        let mut paid: u128 = 0;
        for creator in creators {
            let share = bps_of(pool, creator.share_bps);
            if share > 0 {
                self.credit_withdrawable(&creator.recipient, share);
                events::emit_royalty_paid(collection_id, token_id, &creator.recipient, share);
                paid += share;
            }
        }
        Ok(paid)
    }
}

/// `amount * bps / 10000`, truncating toward zero.
pub(crate) fn bps_of(amount: u128, bps: u16) -> u128 {
    (U256::from(amount) * U256::from(bps) / U256::from(BASIS_POINTS)).as_u128()
}
