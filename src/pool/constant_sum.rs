//! Constant-sum pool implementation.
//!
//! Pricing is a linear re-quote of the pre-trade reserve ratio:
//!
//! ```text
//! amount_out = amount_in × reserve_out / reserve_in
//! ```
//!
//! evaluated *before* the swap is applied, with floor division. There
//! is no fee and no curvature: unlike a constant-product pool, the
//! trade's own price impact is not priced into the same call. Large
//! trades therefore get a strictly worse deal than `x · y = k` would
//! charge, and a trade with `amount_in > reserve_in` asks for more
//! output than the pool holds and is rejected.
//!
//! # Swap Algorithm (token A → token B)
//!
//! 1. `amount_out = amount_in × reserve_b / reserve_a` (floor)
//! 2. reject if `amount_out < min_amount_out` or `amount_out > reserve_b`
//! 3. pull `amount_in` of A from the caller, pay `amount_out` of B
//! 4. `reserve_a += amount_in`, `reserve_b -= amount_out`
//!
//! # Invariant
//!
//! After every accepted operation the custody account's balance of each
//! pool token equals the recorded reserve; a rejected operation changes
//! neither.

use crate::domain::{Address, Amount, Deposit, Rounding, SwapOutcome, SwapRequest, Token, TokenPair};
use crate::error::{DexError, Result};
use crate::traits::TokenLedger;

/// A two-token pool with constant-sum (linear-ratio) pricing.
///
/// The pool records reserves for its fixed [`TokenPair`] and settles
/// deposits and swaps against an external [`TokenLedger`], using
/// `account` as its custody address. Reserves start at zero; the first
/// accepted [`add_liquidity`](Self::add_liquidity) makes the pool
/// swappable.
///
/// # Example
///
/// ```
/// use sumswap::domain::{Address, Amount, Decimals, Deposit, SwapRequest, Token, TokenPair};
/// use sumswap::pool::ConstantSumPool;
/// use sumswap::token::TokenBook;
/// use sumswap::traits::TokenLedger;
///
/// let tok_a = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// let tok_b = Token::new(Address::from_bytes([2u8; 20]), Decimals::STANDARD);
/// let pair = TokenPair::new(tok_a, tok_b).expect("distinct tokens");
/// let pool_acct = Address::from_bytes([0xDD; 20]);
/// let lp = Address::from_bytes([10u8; 20]);
///
/// let mut book = TokenBook::new();
/// book.issue(&tok_a, lp, Amount::new(10_000)).expect("fresh token");
/// book.issue(&tok_b, lp, Amount::new(10_000)).expect("fresh token");
/// book.approve(&tok_a, lp, pool_acct, Amount::new(1_000));
/// book.approve(&tok_b, lp, pool_acct, Amount::new(2_000));
///
/// let mut pool = ConstantSumPool::new(pair, pool_acct);
/// let deposit = Deposit::new(Amount::new(1_000), Amount::new(2_000)).expect("non-zero");
/// pool.add_liquidity(&mut book, lp, &deposit).expect("funded and approved");
/// assert_eq!(pool.reserve_a(), Amount::new(1_000));
/// assert_eq!(pool.reserve_b(), Amount::new(2_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantSumPool {
    pair: TokenPair,
    account: Address,
    reserve_a: Amount,
    reserve_b: Amount,
}

impl ConstantSumPool {
    /// Creates a pool for `pair` with custody address `account` and
    /// zero reserves.
    #[must_use]
    pub const fn new(pair: TokenPair, account: Address) -> Self {
        Self {
            pair,
            account,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        }
    }

    /// Returns the registered token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the first registered token.
    #[must_use]
    pub const fn token_a(&self) -> Token {
        self.pair.token_a()
    }

    /// Returns the second registered token.
    #[must_use]
    pub const fn token_b(&self) -> Token {
        self.pair.token_b()
    }

    /// Returns the custody address holding the pool's tokens.
    #[must_use]
    pub const fn account(&self) -> Address {
        self.account
    }

    /// Returns the current reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Prices a prospective swap against the current reserves without
    /// executing it.
    ///
    /// Uses the same rule as [`swap`](Self::swap):
    /// `amount_in × reserve_out / reserve_in`, floored, evaluated at
    /// today's reserves.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`DexError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`DexError::ZeroReserve`] if the input reserve is empty.
    /// - [`DexError::InsufficientLiquidity`] if the payout exceeds the
    ///   output reserve.
    /// - [`DexError::Overflow`] if the quotient exceeds `u128`.
    ///
    /// A payout that floors to zero is not an error: the swap still
    /// executes and the input side of the trade is still pulled.
    pub fn quote(&self, token_in: &Token, amount_in: Amount) -> Result<Amount> {
        if !self.pair.contains(token_in) {
            return Err(DexError::InvalidToken(
                "token_in is not one of the pool's tokens",
            ));
        }
        if amount_in.is_zero() {
            return Err(DexError::InvalidQuantity("amount must be positive"));
        }

        let (reserve_in, reserve_out) = self.oriented_reserves(token_in);
        if reserve_in.is_zero() {
            return Err(DexError::ZeroReserve);
        }

        let amount_out = amount_in.mul_div(reserve_out, reserve_in, Rounding::Down)?;
        if amount_out > reserve_out {
            return Err(DexError::InsufficientLiquidity);
        }
        Ok(amount_out)
    }

    /// Deposits both tokens into the pool, growing both reserves by
    /// exactly the deposited amounts.
    ///
    /// The caller must have pre-authorized the pool's custody account
    /// to pull both legs. Authorization and balance are verified for
    /// both tokens before either transfer executes, so a failure moves
    /// nothing.
    ///
    /// # Errors
    ///
    /// - [`DexError::InsufficientAllowance`] /
    ///   [`DexError::InsufficientBalance`] if either leg is unfunded.
    /// - [`DexError::Overflow`] if a reserve would exceed `u128::MAX`.
    pub fn add_liquidity<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        from: Address,
        deposit: &Deposit,
    ) -> Result<()> {
        let token_a = self.pair.token_a();
        let token_b = self.pair.token_b();

        // Validate everything before mutating anything.
        let new_reserve_a = self.reserve_a.checked_add(deposit.amount_a())?;
        let new_reserve_b = self.reserve_b.checked_add(deposit.amount_b())?;
        self.ensure_pullable(ledger, &token_a, from, deposit.amount_a())?;
        self.ensure_pullable(ledger, &token_b, from, deposit.amount_b())?;

        ledger.transfer_from(&token_a, self.account, from, self.account, deposit.amount_a())?;
        ledger.transfer_from(&token_b, self.account, from, self.account, deposit.amount_b())?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        Ok(())
    }

    /// Executes a swap: pulls `amount_in` of the request's input token
    /// from `from`, pays out the linearly priced counterpart, and
    /// updates both reserves.
    ///
    /// The whole call is one atomic transition: every rejection listed
    /// below happens before any token moves or any reserve changes.
    ///
    /// # Errors
    ///
    /// - Everything [`quote`](Self::quote) rejects.
    /// - [`DexError::SlippageExceeded`] if the computed output is below
    ///   the request's floor.
    /// - [`DexError::InsufficientAllowance`] /
    ///   [`DexError::InsufficientBalance`] if the caller cannot fund
    ///   the input leg, or custody cannot fund the payout leg.
    pub fn swap<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        from: Address,
        request: &SwapRequest,
    ) -> Result<SwapOutcome> {
        let token_in = request.token_in();
        let token_out = self.pair.other(&token_in)?;

        let amount_in = request.amount_in();
        let amount_out = self.quote(&token_in, amount_in)?;
        if amount_out < request.min_amount_out() {
            return Err(DexError::SlippageExceeded {
                computed: amount_out,
                minimum: request.min_amount_out(),
            });
        }

        let (reserve_in, reserve_out) = self.oriented_reserves(&token_in);
        let new_reserve_in = reserve_in.checked_add(amount_in)?;
        let new_reserve_out = reserve_out.checked_sub(amount_out)?;
        self.ensure_pullable(ledger, &token_in, from, amount_in)?;
        // Custody normally mirrors the reserves, but the ledger is
        // shared state: verify the payout leg too, before pulling
        // anything from the caller.
        let held = ledger.balance_of(&token_out, self.account);
        if held < amount_out {
            return Err(DexError::InsufficientBalance {
                token: token_out.address(),
                have: held,
                need: amount_out,
            });
        }

        ledger.transfer_from(&token_in, self.account, from, self.account, amount_in)?;
        ledger.transfer(&token_out, self.account, from, amount_out)?;

        if token_in == self.pair.token_a() {
            self.reserve_a = new_reserve_in;
            self.reserve_b = new_reserve_out;
        } else {
            self.reserve_b = new_reserve_in;
            self.reserve_a = new_reserve_out;
        }

        SwapOutcome::new(token_in, token_out, amount_in, amount_out)
    }

    /// Returns `(reserve_in, reserve_out)` oriented for `token_in`.
    /// Caller must have checked pair membership.
    fn oriented_reserves(&self, token_in: &Token) -> (Amount, Amount) {
        if *token_in == self.pair.token_a() {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Verifies that a `transfer_from` pulling `amount` of `token`
    /// from `from` would succeed, without performing it.
    fn ensure_pullable<L: TokenLedger>(
        &self,
        ledger: &L,
        token: &Token,
        from: Address,
        amount: Amount,
    ) -> Result<()> {
        let authorized = ledger.allowance(token, from, self.account);
        if authorized < amount {
            return Err(DexError::InsufficientAllowance {
                token: token.address(),
                have: authorized,
                need: amount,
            });
        }
        let held = ledger.balance_of(token, from);
        if held < amount {
            return Err(DexError::InsufficientBalance {
                token: token.address(),
                have: held,
                need: amount,
            });
        }
        Ok(())
    }
}
