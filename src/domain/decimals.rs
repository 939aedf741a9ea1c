//! Token decimal places.

use crate::error::{DexError, Result};

/// Upper bound on decimal places (the EVM token convention).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places a token uses to render raw amounts.
///
/// Valid range is `0..=18`; construction rejects anything larger.
/// Most tokens use the full 18, so that is the
/// [`Decimals::STANDARD`] constant.
///
/// # Examples
///
/// ```
/// use sumswap::domain::Decimals;
///
/// let d = Decimals::STANDARD;
/// assert_eq!(d.get(), 18);
/// assert_eq!(d.scale_up(2), 2_000_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// The common 18-decimal convention.
    pub const STANDARD: Self = Self(18);

    /// Creates a `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(DexError::InvalidQuantity("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole-token amount to raw units.
    ///
    /// Cannot overflow: `u64::MAX × 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, whole: u64) -> u128 {
        (whole as u128) * self.factor()
    }

    /// Converts raw units back to whole tokens, discarding the
    /// fractional part.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result does not fit `u64`.
    pub const fn scale_down(&self, raw: u128) -> Result<u64> {
        let whole = raw / self.factor();
        if whole > u64::MAX as u128 {
            return Err(DexError::Overflow("scaled-down amount exceeds u64"));
        }
        Ok(whole as u64)
    }

    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl Default for Decimals {
    fn default() -> Self {
        Self::STANDARD
    }
}
