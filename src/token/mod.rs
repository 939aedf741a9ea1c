//! In-memory fungible-token ledger.
//!
//! [`TokenBook`] plays the role the token contracts play on chain: it
//! keeps per-token balances and spending authorizations, and settles
//! the transfers the pool requests. Semantics follow the ERC-20
//! surface — a fixed supply minted to the issuer, `approve` /
//! `allowance` authorization, and pulls that consume authorization.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Address, Amount, Token};
use crate::error::{DexError, Result};
use crate::traits::TokenLedger;

/// Per-token book-keeping: supply, holdings, and authorizations.
#[derive(Debug, Clone, Default)]
struct TokenState {
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    /// Keyed by `(owner, spender)`.
    allowances: HashMap<(Address, Address), Amount>,
}

/// An in-memory ledger for any number of fungible tokens.
///
/// Balances of owners (and tokens) the book has never seen read as
/// zero. All mutations are validated up front; a failed call leaves
/// every balance and allowance untouched.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Address, Amount, Decimals, Token};
/// use sumswap::token::TokenBook;
/// use sumswap::traits::TokenLedger;
///
/// let dcx = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// let owner = Address::from_bytes([10u8; 20]);
///
/// let mut book = TokenBook::new();
/// book.issue(&dcx, owner, Amount::new(1_000_000)).expect("fresh token");
/// assert_eq!(book.balance_of(&dcx, owner), Amount::new(1_000_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenBook {
    tokens: HashMap<Address, TokenState>,
}

impl TokenBook {
    /// Creates an empty book with no tokens issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` and mints its entire `supply` to `owner`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if the address was already issued.
    /// - [`DexError::InvalidQuantity`] if `supply` is zero.
    pub fn issue(&mut self, token: &Token, owner: Address, supply: Amount) -> Result<()> {
        if supply.is_zero() {
            return Err(DexError::InvalidQuantity("supply must be positive"));
        }
        if self.tokens.contains_key(&token.address()) {
            return Err(DexError::InvalidToken("token already issued"));
        }
        let mut state = TokenState {
            total_supply: supply,
            ..TokenState::default()
        };
        state.balances.insert(owner, supply);
        self.tokens.insert(token.address(), state);
        debug!(token = %token, %owner, %supply, "token issued");
        Ok(())
    }

    /// Grants `spender` the right to pull up to `amount` of `owner`'s
    /// `token`. Overwrites any previous authorization; zero revokes.
    pub fn approve(&mut self, token: &Token, owner: Address, spender: Address, amount: Amount) {
        let state = self.tokens.entry(token.address()).or_default();
        state.allowances.insert((owner, spender), amount);
        debug!(token = %token, %owner, %spender, %amount, "allowance set");
    }

    /// Returns the issued supply of `token` (zero if never issued).
    #[must_use]
    pub fn total_supply(&self, token: &Token) -> Amount {
        self.tokens
            .get(&token.address())
            .map_or(Amount::ZERO, |s| s.total_supply)
    }

    fn apply_transfer(
        &mut self,
        token: &Token,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        let have = self.balance_of(token, from);
        if have < amount {
            return Err(DexError::InsufficientBalance {
                token: token.address(),
                have,
                need: amount,
            });
        }
        if amount.is_zero() || from == to {
            return Ok(());
        }
        let state = self.tokens.entry(token.address()).or_default();
        // Both updates are infallible after the balance check: the
        // debit cannot underflow and the credit cannot exceed supply.
        let debited = have.checked_sub(amount)?;
        state.balances.insert(from, debited);
        let credit = state.balances.entry(to).or_insert(Amount::ZERO);
        *credit = credit.checked_add(amount)?;
        Ok(())
    }
}

impl TokenLedger for TokenBook {
    fn balance_of(&self, token: &Token, owner: Address) -> Amount {
        self.tokens
            .get(&token.address())
            .and_then(|s| s.balances.get(&owner).copied())
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, token: &Token, owner: Address, spender: Address) -> Amount {
        self.tokens
            .get(&token.address())
            .and_then(|s| s.allowances.get(&(owner, spender)).copied())
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        token: &Token,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        self.apply_transfer(token, from, to, amount)?;
        debug!(token = %token, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: &Token,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        let authorized = self.allowance(token, from, spender);
        if authorized < amount {
            return Err(DexError::InsufficientAllowance {
                token: token.address(),
                have: authorized,
                need: amount,
            });
        }
        // Balance is validated inside apply_transfer before anything
        // moves, so the allowance is only consumed on success.
        self.apply_transfer(token, from, to, amount)?;
        let remaining = authorized.checked_sub(amount)?;
        if let Some(state) = self.tokens.get_mut(&token.address()) {
            state.allowances.insert((from, spender), remaining);
        }
        debug!(token = %token, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }
}
