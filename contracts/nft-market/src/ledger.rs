//! Escrow and withdrawable ledgers.
//!
//! Escrow holds value buyers pre-paid for open bids; it equals the sum of
//! `price * quantity` over each buyer's active bids at all times. The
//! withdrawable ledger accrues fees and royalties; it is credited only by the
//! settlement engine and debited only by `withdraw`.

use near_sdk::json_types::U128;

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Pull accrued fees/royalties. `amount = None` withdraws the full
    /// balance. Requires 1 yoctoNEAR.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self, amount: Option<U128>) -> Result<U128, MarketError> {
        check_one_yocto()?;
        self.enter()?;
        let payee = env::predecessor_account_id();
        let result = self.internal_withdraw(&payee, amount.map(|a| a.0));
        self.exit();
        result.map(U128)
    }

    pub fn get_escrow(&self, account_id: AccountId) -> U128 {
        U128(self.escrow.get(&account_id).copied().unwrap_or(0))
    }

    pub fn get_withdrawable(&self, account_id: AccountId) -> U128 {
        U128(self.withdrawable.get(&account_id).copied().unwrap_or(0))
    }
}

impl Contract {
    pub(crate) fn credit_escrow(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.escrow.get(account_id).copied().unwrap_or(0);
        self.escrow.insert(account_id.clone(), balance + amount);
    }

    /// Debited exactly once per bid, on cancel or on acceptance.
    pub(crate) fn debit_escrow(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<(), MarketError> {
        let balance = self.escrow.get(account_id).copied().unwrap_or(0);
        let remaining = balance.checked_sub(amount).ok_or_else(|| {
            MarketError::InsufficientFunds(format!(
                "Escrow balance {} is below required debit {}",
                balance, amount
            ))
        })?;
        if remaining == 0 {
            self.escrow.remove(account_id);
        } else {
            self.escrow.insert(account_id.clone(), remaining);
        }
        Ok(())
    }

    pub(crate) fn credit_withdrawable(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.withdrawable.get(account_id).copied().unwrap_or(0);
        self.withdrawable.insert(account_id.clone(), balance + amount);
    }

    pub(crate) fn internal_withdraw(
        &mut self,
        payee: &AccountId,
        amount: Option<u128>,
    ) -> Result<u128, MarketError> {
        let balance = self.withdrawable.get(payee).copied().unwrap_or(0);
        let amount = amount.unwrap_or(balance);
        if amount == 0 {
            return Err(MarketError::InsufficientFunds(
                "Nothing to withdraw".into(),
            ));
        }
        let remaining = balance.checked_sub(amount).ok_or_else(|| {
            MarketError::InsufficientFunds(format!(
                "Withdrawal of {} exceeds balance {}",
                amount, balance
            ))
        })?;

        // Ledger debit before the outward transfer.
        if remaining == 0 {
            self.withdrawable.remove(payee);
        } else {
            self.withdrawable.insert(payee.clone(), remaining);
        }
        let _ = Promise::new(payee.clone()).transfer(NearToken::from_yoctonear(amount));

        events::emit_withdrawal(payee, amount, remaining);
        Ok(amount)
    }
}
