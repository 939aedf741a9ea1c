//! Validated swap request.

use core::fmt;

use super::{Amount, Token};
use crate::error::{DexError, Result};

/// A swap request: which token the caller sells, how much of it, and
/// the smallest output they are willing to accept.
///
/// # Invariants
///
/// `amount_in` is strictly positive; `min_amount_out` may be zero
/// (no floor). Whether `token_in` belongs to the pool is the pool's
/// own check, performed at execution time against its registered pair.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Address, Amount, Decimals, SwapRequest, Token};
///
/// let dcx = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// let req = SwapRequest::new(dcx, Amount::new(100), Amount::ZERO);
/// assert!(req.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRequest {
    token_in: Token,
    amount_in: Amount,
    min_amount_out: Amount,
}

impl SwapRequest {
    /// Creates a swap request selling `amount_in` of `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if `amount_in` is zero.
    pub const fn new(token_in: Token, amount_in: Amount, min_amount_out: Amount) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(DexError::InvalidQuantity("amount must be positive"));
        }
        Ok(Self {
            token_in,
            amount_in,
            min_amount_out,
        })
    }

    /// Returns the token being sold.
    #[must_use]
    pub const fn token_in(&self) -> Token {
        self.token_in
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the caller's output floor.
    #[must_use]
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapRequest(token_in={}, in={}, min_out={})",
            self.token_in, self.amount_in, self.min_amount_out
        )
    }
}
