//! Kenshi (KNS) fixed-supply token ledger.
//!
//! - [`ledger`]: balances, allowances, event log and state root
//! - [`access`]: single-owner administrator slot
//! - [`contracts`]: the KNS token, combining both, with owner-gated recovery
//!   of tokens sent to the contract's own address
//! - [`host`]: the environment tokens are deployed into; routes calls and
//!   native value between accounts
//! - [`identity`]: Ed25519 keys and the account addresses derived from them

pub mod access;
pub mod contracts;
pub mod error;
pub mod host;
pub mod identity;
pub mod ledger;

pub use contracts::{AssetHandle, Erc20, KenshiToken};
pub use error::{TokenError, TokenResult};
pub use host::{Call, Host, HostError};
pub use ledger::{Address, Amount, Ledger, LedgerEvent, LedgerSnapshot, LedgerStateError};
