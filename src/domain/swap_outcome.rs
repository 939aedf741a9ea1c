//! Outcome of an executed swap.

use core::fmt;

use super::{Amount, Token};
use crate::error::{DexError, Result};

/// What a completed swap exchanged: the token and amount pulled in,
/// and the token and amount paid out.
///
/// # Invariants
///
/// `amount_in` is strictly positive. `amount_out` may be zero: a tiny
/// trade against a lopsided pool floors to nothing, and the pool still
/// executes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    token_in: Token,
    token_out: Token,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a validated outcome record.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if `amount_in` is zero.
    pub const fn new(
        token_in: Token,
        token_out: Token,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(DexError::InvalidQuantity("amount_in must be positive"));
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
        })
    }

    /// Returns the token the caller sold.
    #[must_use]
    pub const fn token_in(&self) -> Token {
        self.token_in
    }

    /// Returns the token the caller received.
    #[must_use]
    pub const fn token_out(&self) -> Token {
        self.token_out
    }

    /// Returns the amount pulled from the caller.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount paid to the caller.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={} of {}, out={} of {})",
            self.amount_in, self.token_in, self.amount_out, self.token_out
        )
    }
}
