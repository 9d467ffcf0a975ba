//! Market fee policy.
//!
//! The settlement engine consults the policy twice per settled fill: once to
//! size the deduction from the gross total, and once again when crediting the
//! beneficiary. `collect_fee` is pure, so both calls return the same value;
//! the two call sites are kept deliberately (the policy is an owned
//! collaborator and its contract is the pair of calls, not one cached result).

use near_sdk::{near, AccountId};
use primitive_types::U256;

use crate::constants::BASIS_POINTS;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct FeePolicy {
    /// Strictly below 10000.
    pub fee_bps: u16,
}

impl FeePolicy {
    pub fn new(fee_bps: u16) -> Self {
        Self { fee_bps }
    }

    /// Fee owed on `amount`, truncating toward zero. The payer is part of the
    /// interface even though the flat rate ignores it.
    pub fn collect_fee(&self, _payer: &AccountId, amount: u128) -> u128 {
        (U256::from(amount) * U256::from(self.fee_bps) / U256::from(BASIS_POINTS)).as_u128()
    }

    pub fn current_rate(&self, _payer: &AccountId) -> u16 {
        self.fee_bps
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            fee_bps: crate::constants::DEFAULT_FEE_BPS,
        }
    }
}
