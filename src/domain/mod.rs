//! Validated domain value types.
//!
//! Everything the pool and ledger operate on is a newtype with a
//! validating constructor: amounts, addresses, token identities, and
//! the two request shapes ([`Deposit`] and [`SwapRequest`]). Invalid
//! states are rejected at construction, before any state can move.

mod address;
mod amount;
mod decimals;
mod deposit;
mod rounding;
mod swap_outcome;
mod swap_request;
mod token;
mod token_pair;

pub use address::Address;
pub use amount::Amount;
pub use decimals::Decimals;
pub use deposit::Deposit;
pub use rounding::Rounding;
pub use swap_outcome::SwapOutcome;
pub use swap_request::SwapRequest;
pub use token::Token;
pub use token_pair::TokenPair;
