use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{TokenError, TokenResult};
use crate::ledger::{Address, LedgerEvent};

/// Single-administrator slot. `Address::ZERO` means nobody holds the role.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessControl {
    owner: Address,
}

impl AccessControl {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Fails with `Unauthorized` unless `caller` is the current owner.
    /// After renouncement no caller passes, since the zero account never calls.
    pub fn ensure_owner(&self, caller: &Address) -> TokenResult<()> {
        if self.owner.is_zero() || *caller != self.owner {
            warn!(%caller, owner = %self.owner, "administrative call rejected");
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> TokenResult<LedgerEvent> {
        self.ensure_owner(caller)?;
        if new_owner.is_zero() {
            return Err(TokenError::ZeroAddress("new owner is"));
        }
        Ok(self.set_owner(new_owner))
    }

    pub fn renounce_ownership(&mut self, caller: &Address) -> TokenResult<LedgerEvent> {
        self.ensure_owner(caller)?;
        Ok(self.set_owner(Address::ZERO))
    }

    fn set_owner(&mut self, new: Address) -> LedgerEvent {
        let previous = std::mem::replace(&mut self.owner, new);
        info!(%previous, %new, "ownership transferred");
        LedgerEvent::OwnershipTransferred { previous, new }
    }
}
