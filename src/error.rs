use thiserror::Error;

/// Rejection reasons surfaced by the token ledger.
///
/// Every variant aborts the whole operation; ledger state is left exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The reserved zero account was used where a live account is required.
    #[error("ERC20: {0} the zero address")]
    ZeroAddress(&'static str),

    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance,

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,

    #[error("ERC20: decreased allowance below zero")]
    AllowanceUnderflow,

    /// Administrative call from an account that is not the current owner.
    #[error("Ownable: caller is not the owner")]
    Unauthorized,

    /// Native value sent to the ledger's own account (no payable fallback).
    #[error("native value transfers to the token contract are rejected")]
    NativeValueRejected,
}

pub type TokenResult<T> = Result<T, TokenError>;
