//! The pool's pair of registered tokens.

use super::Token;
use crate::error::{DexError, Result};

/// Two distinct tokens in the order the pool registered them.
///
/// Unlike exchanges that canonicalize pair ordering, the pair here
/// preserves creation order: `token_a` and `token_b` are whatever the
/// pool was deployed with, and they never change afterwards. Reserve
/// slots are keyed off this order.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Address, Decimals, Token, TokenPair};
///
/// let a = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// let b = Token::new(Address::from_bytes([2u8; 20]), Decimals::STANDARD);
/// let pair = TokenPair::new(a, b).expect("distinct tokens");
/// assert_eq!(pair.token_a(), a);
/// assert_eq!(pair.token_b(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a pair, preserving argument order.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if both tokens share an
    /// address.
    pub fn new(token_a: Token, token_b: Token) -> Result<Self> {
        if token_a.address() == token_b.address() {
            return Err(DexError::InvalidToken(
                "pair requires two distinct token addresses",
            ));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns the first registered token.
    #[must_use]
    pub const fn token_a(&self) -> Token {
        self.token_a
    }

    /// Returns the second registered token.
    #[must_use]
    pub const fn token_b(&self) -> Token {
        self.token_b
    }

    /// Returns `true` if `token` is one of the two registered tokens.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the counterpart of `token` within the pair.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<Token> {
        if *token == self.token_a {
            Ok(self.token_b)
        } else if *token == self.token_b {
            Ok(self.token_a)
        } else {
            Err(DexError::InvalidToken("token is not part of this pair"))
        }
    }
}
