use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::access::AccessControl;
use crate::error::{TokenError, TokenResult};
use crate::ledger::{Address, Amount, Ledger, LedgerEvent, LedgerSnapshot};

pub const TOKEN_NAME: &str = "Kenshi";
pub const TOKEN_SYMBOL: &str = "KNS";
pub const TOKEN_DECIMALS: u8 = 18;

/// The subset of a token contract that recovery needs from a foreign asset.
pub trait Erc20 {
    fn address(&self) -> Address;
    fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> TokenResult<()>;
}

/// Asset passed to [`KenshiToken::recover_erc20`].
pub enum AssetHandle<'a> {
    /// The recovering token itself, which can hold a balance of its own unit.
    Own,
    External(&'a mut dyn Erc20),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KenshiToken {
    address: Address,
    metadata: TokenMetadata,
    ledger: Ledger,
    access: AccessControl,
}

impl KenshiToken {
    /// Deploys the token at `address`. The deployer receives the whole
    /// supply and becomes the administrator.
    pub fn deploy(address: Address, deployer: Address, total_supply: Amount) -> TokenResult<Self> {
        let mut ledger = Ledger::with_supply(deployer, total_supply)?;
        ledger.record(LedgerEvent::OwnershipTransferred {
            previous: Address::ZERO,
            new: deployer,
        });
        info!(%address, %deployer, %total_supply, "token deployed");
        Ok(Self {
            address,
            metadata: TokenMetadata::default(),
            ledger,
            access: AccessControl::new(deployer),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.allowance(owner, spender)
    }

    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    pub fn only_owner(&self, caller: &Address) -> TokenResult<()> {
        self.access.ensure_owner(caller)
    }

    pub fn events(&self) -> &[LedgerEvent] {
        self.ledger.events()
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> TokenResult<()> {
        self.ledger.transfer(caller, to, amount)
    }

    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.ledger.approve(caller, spender, amount)
    }

    pub fn increase_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        delta: Amount,
    ) -> TokenResult<()> {
        self.ledger.increase_allowance(caller, spender, delta)
    }

    pub fn decrease_allowance(
        &mut self,
        caller: Address,
        spender: Address,
        delta: Amount,
    ) -> TokenResult<()> {
        self.ledger.decrease_allowance(caller, spender, delta)
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.ledger.transfer_from(caller, owner, to, amount)
    }

    pub fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> TokenResult<()> {
        let event = self.access.transfer_ownership(&caller, new_owner)?;
        self.ledger.record(event);
        Ok(())
    }

    pub fn renounce_ownership(&mut self, caller: Address) -> TokenResult<()> {
        let event = self.access.renounce_ownership(&caller)?;
        self.ledger.record(event);
        Ok(())
    }

    /// Moves `amount` of `asset` held by this contract to `to`. Owner only.
    /// Errors from the asset's own transfer come back unchanged.
    pub fn recover_erc20(
        &mut self,
        caller: Address,
        asset: AssetHandle<'_>,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        self.access.ensure_owner(&caller)?;
        let asset_address = match asset {
            AssetHandle::Own => {
                self.ledger.transfer(self.address, to, amount)?;
                self.address
            }
            AssetHandle::External(token) => {
                token.transfer(self.address, to, amount)?;
                token.address()
            }
        };
        info!(asset = %asset_address, %to, %amount, "tokens recovered");
        Ok(())
    }

    /// There is no payable fallback: native value is always refused.
    pub fn receive_native(&self, sender: Address, value: Amount) -> TokenResult<()> {
        warn!(contract = %self.address, %sender, %value, "native value rejected");
        Err(TokenError::NativeValueRejected)
    }
}

impl Erc20 for KenshiToken {
    fn address(&self) -> Address {
        self.address
    }

    fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> TokenResult<()> {
        self.ledger.transfer(caller, to, amount)
    }
}
