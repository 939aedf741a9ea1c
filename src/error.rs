//! Unified error type for the sumswap crate.
//!
//! Every fallible operation returns [`DexError`] through the crate-wide
//! [`Result`] alias. Rejections are synchronous and atomic: a failed
//! call never moves tokens and never mutates reserves.

use thiserror::Error;

use crate::domain::{Address, Amount};

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DexError>;

/// All failure modes of pool and ledger operations.
///
/// Argument-shaped rejections carry a `&'static str` describing the
/// violated rule; quantity-shaped rejections carry the amounts involved
/// so callers can report the shortfall.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DexError {
    /// A zero or otherwise malformed quantity was supplied.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A token identity the pool does not recognize.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// The spender's authorization does not cover the requested pull.
    #[error("insufficient allowance for {token}: have {have}, need {need}")]
    InsufficientAllowance {
        /// Token whose allowance fell short.
        token: Address,
        /// Authorization currently granted.
        have: Amount,
        /// Authorization the transfer requires.
        need: Amount,
    },

    /// The sender's balance does not cover the transfer.
    #[error("insufficient balance of {token}: have {have}, need {need}")]
    InsufficientBalance {
        /// Token whose balance fell short.
        token: Address,
        /// Balance currently held.
        have: Amount,
        /// Balance the transfer requires.
        need: Amount,
    },

    /// The computed swap output fell below the caller's floor.
    #[error("insufficient output: computed {computed}, minimum {minimum}")]
    SlippageExceeded {
        /// Output the pricing rule produced.
        computed: Amount,
        /// Caller-supplied minimum.
        minimum: Amount,
    },

    /// The output reserve cannot cover the computed payout.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A swap was priced against an empty input reserve.
    #[error("zero reserve: pool cannot price a swap without liquidity")]
    ZeroReserve,

    /// Arithmetic overflow or underflow in reserve bookkeeping.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero in a pricing computation.
    #[error("division by zero")]
    DivisionByZero,
}
