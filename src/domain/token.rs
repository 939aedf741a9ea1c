//! Token identity type.

use core::fmt;

use super::{Address, Decimals};

/// The identity of a fungible token: its contract address plus the
/// decimal convention it renders amounts with.
///
/// Two tokens are equal only if both fields match. Reserve accounting
/// and transfers operate on raw units; decimals exist purely for
/// display and test ergonomics.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Address, Decimals, Token};
///
/// let dcx = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// assert_eq!(dcx.decimals().get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`. Infallible: both fields carry their own
    /// validation.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token's contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token's decimal convention.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Converts whole tokens to raw units under this token's decimals.
    #[must_use]
    pub const fn units(&self, whole: u64) -> super::Amount {
        super::Amount::new(self.decimals.scale_up(whole))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
