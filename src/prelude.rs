//! Convenience re-exports for common types and traits.
//!
//! A single import brings the whole working surface into scope:
//!
//! ```rust
//! use sumswap::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, Decimals, Deposit, Rounding, SwapOutcome, SwapRequest, Token, TokenPair,
};

pub use crate::error::{DexError, Result};

pub use crate::pool::ConstantSumPool;
pub use crate::token::TokenBook;
pub use crate::traits::TokenLedger;

pub use crate::dex::Dex;
