//! Deposit checks, owner assertion, and the reentrancy latch.

use crate::*;

/// Check exactly one yoctoNEAR is attached (security measure).
pub(crate) fn check_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Check at least one yoctoNEAR is attached.
pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(MarketError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn assert_owner(&self, actor: &AccountId) -> Result<(), MarketError> {
        if actor != &self.owner_id {
            return Err(MarketError::only_owner("the contract owner"));
        }
        Ok(())
    }

    /// Set the reentrancy latch. A native-value transfer inside a settlement
    /// can trigger recipient code that calls back into the contract before the
    /// outer call finishes; any nested entry is rejected here.
    pub(crate) fn enter(&mut self) -> Result<(), MarketError> {
        if self.entered {
            return Err(MarketError::reentrant_call());
        }
        self.entered = true;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.entered = false;
    }
}
