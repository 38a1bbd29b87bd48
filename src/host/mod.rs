//! Execution environment the token is deployed into.
//!
//! The host owns every deployed contract and the native balances of
//! externally owned accounts, and applies one call at a time. Each call
//! either commits all of its effects or returns an error with the host
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::contracts::{AssetHandle, KenshiToken};
use crate::error::TokenError;
use crate::ledger::{Address, Amount};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("no contract deployed at {0}")]
    UnknownContract(Address),
    #[error("insufficient native balance: have {have}, need {need}")]
    InsufficientNativeBalance { have: Amount, need: Amount },
    #[error("native balance of {0} would overflow")]
    NativeOverflow(Address),
}

/// Mutating entry points of a deployed token. The caller is passed
/// separately to [`Host::call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Transfer {
        to: Address,
        amount: Amount,
    },
    Approve {
        spender: Address,
        amount: Amount,
    },
    IncreaseAllowance {
        spender: Address,
        delta: Amount,
    },
    DecreaseAllowance {
        spender: Address,
        delta: Amount,
    },
    TransferFrom {
        owner: Address,
        to: Address,
        amount: Amount,
    },
    TransferOwnership {
        new_owner: Address,
    },
    RenounceOwnership,
    RecoverErc20 {
        asset: Address,
        to: Address,
        amount: Amount,
    },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Host {
    contracts: BTreeMap<Address, KenshiToken>,
    native: BTreeMap<Address, Amount>,
    nonces: BTreeMap<Address, u64>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys a new token funded to `deployer` and returns its address.
    pub fn deploy(
        &mut self,
        deployer: Address,
        total_supply: Amount,
    ) -> Result<Address, HostError> {
        let nonce = self.nonces.get(&deployer).copied().unwrap_or_default();
        let address = contract_address(&deployer, nonce);
        let token = KenshiToken::deploy(address, deployer, total_supply)?;
        self.nonces.insert(deployer, nonce + 1);
        self.contracts.insert(address, token);
        Ok(address)
    }

    pub fn token(&self, contract: &Address) -> Result<&KenshiToken, HostError> {
        self.contracts
            .get(contract)
            .ok_or(HostError::UnknownContract(*contract))
    }

    pub fn contracts(&self) -> impl Iterator<Item = &Address> {
        self.contracts.keys()
    }

    pub fn is_contract(&self, account: &Address) -> bool {
        self.contracts.contains_key(account)
    }

    pub fn call(
        &mut self,
        caller: Address,
        contract: Address,
        call: Call,
    ) -> Result<(), HostError> {
        debug!(%caller, %contract, ?call, "dispatching call");
        // The target is taken out of the map for the duration of the call so
        // that recovery can borrow a second contract as the asset.
        let mut token = self
            .contracts
            .remove(&contract)
            .ok_or(HostError::UnknownContract(contract))?;
        let result = self.dispatch(&mut token, caller, call);
        self.contracts.insert(contract, token);
        result
    }

    fn dispatch(
        &mut self,
        token: &mut KenshiToken,
        caller: Address,
        call: Call,
    ) -> Result<(), HostError> {
        match call {
            Call::Transfer { to, amount } => token.transfer(caller, to, amount)?,
            Call::Approve { spender, amount } => token.approve(caller, spender, amount)?,
            Call::IncreaseAllowance { spender, delta } => {
                token.increase_allowance(caller, spender, delta)?
            }
            Call::DecreaseAllowance { spender, delta } => {
                token.decrease_allowance(caller, spender, delta)?
            }
            Call::TransferFrom { owner, to, amount } => {
                token.transfer_from(caller, owner, to, amount)?
            }
            Call::TransferOwnership { new_owner } => token.transfer_ownership(caller, new_owner)?,
            Call::RenounceOwnership => token.renounce_ownership(caller)?,
            Call::RecoverErc20 { asset, to, amount } => {
                if asset == token.address() {
                    token.recover_erc20(caller, AssetHandle::Own, to, amount)?;
                } else {
                    match self.contracts.get_mut(&asset) {
                        Some(foreign) => token.recover_erc20(
                            caller,
                            AssetHandle::External(foreign),
                            to,
                            amount,
                        )?,
                        None => {
                            token.only_owner(&caller)?;
                            return Err(HostError::UnknownContract(asset));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn native_balance(&self, account: &Address) -> Amount {
        self.native.get(account).copied().unwrap_or_default()
    }

    /// Seeds native value for an externally owned account.
    pub fn fund_native(&mut self, account: Address, value: Amount) -> Result<(), HostError> {
        if let Some(token) = self.contracts.get(&account) {
            token.receive_native(Address::ZERO, value)?;
        }
        let (updated, overflow) = self.native_balance(&account).overflowing_add(value);
        if overflow {
            return Err(HostError::NativeOverflow(account));
        }
        self.native.insert(account, updated);
        Ok(())
    }

    /// Moves native value between accounts. Deployed tokens refuse it.
    pub fn send_native(
        &mut self,
        from: Address,
        to: Address,
        value: Amount,
    ) -> Result<(), HostError> {
        if let Some(token) = self.contracts.get(&to) {
            token.receive_native(from, value)?;
        }
        let have = self.native_balance(&from);
        if have < value {
            return Err(HostError::InsufficientNativeBalance { have, need: value });
        }
        if from != to {
            let (credited, overflow) = self.native_balance(&to).overflowing_add(value);
            if overflow {
                return Err(HostError::NativeOverflow(to));
            }
            self.native.insert(from, have - value);
            self.native.insert(to, credited);
        }
        info!(%from, %to, %value, "native value sent");
        Ok(())
    }
}

/// Last 20 bytes of `sha256("kns-contract" || deployer || nonce)`.
pub fn contract_address(deployer: &Address, nonce: u64) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(b"kns-contract");
    hasher.update(deployer.0);
    hasher.update(nonce.to_be_bytes());
    Address::from_digest(&hasher.finalize().into())
}
