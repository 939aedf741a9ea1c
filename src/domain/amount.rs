//! Raw token quantity with checked arithmetic.

use core::fmt;

use super::Rounding;
use crate::error::{DexError, Result};

// Isolated so the generated impls see `core::result::Result`, not the
// crate's one-parameter alias.
mod wide {
    uint::construct_uint! {
        /// 256-bit intermediate so `mul_div` cannot overflow on the product.
        pub struct U256(4);
    }
}

use wide::U256;

/// A raw token quantity in the token's smallest unit.
///
/// `Amount` is decimal-agnostic: interpreting the value against a
/// token's decimal places is the job of [`Token`](super::Token). Every
/// `u128` is a valid amount.
///
/// All arithmetic is checked. Fallible operations return
/// [`DexError::Overflow`] (or [`DexError::DivisionByZero`]) instead of
/// panicking, and division takes an explicit [`Rounding`] direction so
/// precision loss is always a visible decision at the call site.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(250);
/// assert_eq!(a.checked_add(b), Ok(Amount::new(350)));
/// assert_eq!(b.checked_div(a, Rounding::Down), Ok(Amount::new(2)));
/// assert_eq!(b.checked_div(a, Rounding::Up), Ok(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the sum exceeds `u128::MAX`.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(DexError::Overflow("amount addition overflow"))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if `other` exceeds `self`.
    pub fn checked_sub(self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(DexError::Overflow("amount subtraction underflow"))
    }

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the product exceeds `u128::MAX`.
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or(DexError::Overflow("amount multiplication overflow"))
    }

    /// Checked division with an explicit rounding direction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(self, other: Self, rounding: Rounding) -> Result<Self> {
        if other.0 == 0 {
            return Err(DexError::DivisionByZero);
        }
        let quotient = match rounding {
            Rounding::Down => self.0 / other.0,
            Rounding::Up => self.0.div_ceil(other.0),
        };
        Ok(Self(quotient))
    }

    /// Computes `self × mul / div` in one step, widening the product
    /// to 256 bits so it cannot overflow.
    ///
    /// This is the shape of the pool's pricing rule; keeping it as a
    /// single operation keeps the overflow and rounding story in one
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::DivisionByZero`] if `div` is zero, or
    /// [`DexError::Overflow`] if the quotient does not fit `u128`.
    pub fn mul_div(self, mul: Self, div: Self, rounding: Rounding) -> Result<Self> {
        if div.0 == 0 {
            return Err(DexError::DivisionByZero);
        }
        let product = U256::from(self.0) * U256::from(mul.0);
        let divisor = U256::from(div.0);
        let mut quotient = product / divisor;
        if rounding.is_up() && !(product % divisor).is_zero() {
            quotient += U256::one();
        }
        if quotient > U256::from(u128::MAX) {
            return Err(DexError::Overflow("mul_div quotient exceeds u128"));
        }
        Ok(Self(quotient.as_u128()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn add_normal() {
        assert_eq!(
            Amount::new(1).checked_add(Amount::new(2)),
            Ok(Amount::new(3))
        );
    }

    #[test]
    fn add_overflow_rejected() {
        let result = Amount::MAX.checked_add(Amount::new(1));
        assert!(matches!(result, Err(DexError::Overflow(_))));
    }

    #[test]
    fn sub_normal() {
        assert_eq!(
            Amount::new(5).checked_sub(Amount::new(2)),
            Ok(Amount::new(3))
        );
    }

    #[test]
    fn sub_underflow_rejected() {
        let result = Amount::new(1).checked_sub(Amount::new(2));
        assert!(matches!(result, Err(DexError::Overflow(_))));
    }

    #[test]
    fn mul_overflow_rejected() {
        let result = Amount::MAX.checked_mul(Amount::new(2));
        assert!(matches!(result, Err(DexError::Overflow(_))));
    }

    #[test]
    fn div_by_zero_rejected() {
        let result = Amount::new(1).checked_div(Amount::ZERO, Rounding::Down);
        assert_eq!(result, Err(DexError::DivisionByZero));
    }

    #[test]
    fn div_rounding_directions() {
        let Ok(down) = Amount::new(7).checked_div(Amount::new(2), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = Amount::new(7).checked_div(Amount::new(2), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::new(3));
        assert_eq!(up, Amount::new(4));
    }

    #[test]
    fn mul_div_matches_pricing_shape() {
        // 100 × 2000 / 1000 = 200
        let Ok(out) = Amount::new(100).mul_div(Amount::new(2000), Amount::new(1000), Rounding::Down)
        else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(200));
    }

    #[test]
    fn mul_div_floors() {
        // 1 × 1 / 1000 = 0 under floor division
        let Ok(out) = Amount::new(1).mul_div(Amount::new(1), Amount::new(1000), Rounding::Down)
        else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::ZERO);
    }

    #[test]
    fn mul_div_widens_past_u128() {
        // 10^21 × 2·10^21 overflows u128 but the quotient fits.
        let raw = 10u128.pow(21);
        let Ok(out) = Amount::new(raw).mul_div(
            Amount::new(2 * raw),
            Amount::new(raw),
            Rounding::Down,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(2 * raw));
    }

    #[test]
    fn mul_div_oversized_quotient_rejected() {
        let result = Amount::MAX.mul_div(Amount::new(3), Amount::new(1), Rounding::Down);
        assert!(matches!(result, Err(DexError::Overflow(_))));
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(format!("{}", Amount::new(42)), "42");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::default().is_zero());
    }
}
