//! Validated add-liquidity request.

use core::fmt;

use super::Amount;
use crate::error::{DexError, Result};

/// An add-liquidity request: how much of each pool token the caller
/// will contribute.
///
/// # Invariants
///
/// Both amounts are strictly positive. A deposit that leaves either
/// side empty is rejected at construction, before any transfer can
/// happen.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Amount, Deposit};
///
/// assert!(Deposit::new(Amount::new(100), Amount::new(200)).is_ok());
/// assert!(Deposit::new(Amount::ZERO, Amount::new(200)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deposit {
    amount_a: Amount,
    amount_b: Amount,
}

impl Deposit {
    /// Creates a deposit of `amount_a` of token A and `amount_b` of
    /// token B.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if either amount is zero.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Result<Self> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(DexError::InvalidQuantity("amounts must be positive"));
        }
        Ok(Self { amount_a, amount_b })
    }

    /// Returns the token-A contribution.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token-B contribution.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deposit(a={}, b={})", self.amount_a, self.amount_b)
    }
}
