//! Token-transfer collaborator trait.
//!
//! The pool never holds token balances itself; it instructs a
//! [`TokenLedger`] to move them and mirrors the result in its reserve
//! bookkeeping. In production the ledger is the chain's token
//! contracts; in this crate it is the in-memory
//! [`TokenBook`](crate::token::TokenBook).
//!
//! # Atomicity Contract
//!
//! The pool pre-validates every transfer (allowance and balance) via
//! the read methods before issuing it, so that a multi-transfer
//! operation either performs all of its transfers or none of them.
//! Implementations must therefore guarantee that a transfer which
//! passes those reads cannot fail when no other writer intervenes.

use crate::domain::{Address, Amount, Token};
use crate::error::Result;

/// Custody substrate for fungible tokens.
///
/// Mirrors the ERC-20 surface the pool consumes: balance and allowance
/// reads, direct transfers, and authorization-consuming pulls.
///
/// # Errors
///
/// Mutating methods return [`DexError`](crate::error::DexError)
/// variants:
///
/// - [`InsufficientBalance`](crate::error::DexError::InsufficientBalance)
///   when the sender cannot fund the transfer.
/// - [`InsufficientAllowance`](crate::error::DexError::InsufficientAllowance)
///   when a pull exceeds the spender's authorization.
pub trait TokenLedger {
    /// Returns `owner`'s balance of `token`. Unknown owners and unknown
    /// tokens read as zero.
    fn balance_of(&self, token: &Token, owner: Address) -> Amount;

    /// Returns how much of `owner`'s `token` the `spender` may pull.
    fn allowance(&self, token: &Token, owner: Address, spender: Address) -> Amount;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Fails with `InsufficientBalance` if `from` holds less than
    /// `amount`; no balance changes on failure.
    fn transfer(&mut self, token: &Token, from: Address, to: Address, amount: Amount)
        -> Result<()>;

    /// Pulls `amount` of `token` from `from` to `to` on behalf of
    /// `spender`, consuming that much of the spender's authorization.
    ///
    /// # Errors
    ///
    /// Fails with `InsufficientAllowance` if the authorization is
    /// short, or `InsufficientBalance` if `from` cannot fund the pull.
    /// Neither balances nor allowances change on failure.
    fn transfer_from(
        &mut self,
        token: &Token,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()>;
}
