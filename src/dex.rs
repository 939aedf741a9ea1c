//! Single-writer facade over the pool and its token ledger.
//!
//! On chain, consensus serializes every call that touches the pool. Off
//! chain that guarantee has to be rebuilt: [`Dex`] owns the
//! [`TokenBook`] and the [`ConstantSumPool`] behind one mutex and runs
//! every operation inside a single critical section, so no caller ever
//! observes a half-applied transition.
//!
//! There is no cancellation and no retry here. A caller that has not
//! submitted yet can simply not submit; anything beyond that belongs to
//! the layer driving this one.

use std::sync::Mutex;

use tracing::{debug, info};

use crate::domain::{Address, Amount, Deposit, SwapOutcome, SwapRequest, Token, TokenPair};
use crate::error::Result;
use crate::pool::ConstantSumPool;
use crate::token::TokenBook;
use crate::traits::TokenLedger;

/// Everything the mutex guards: the custody ledger and the pool whose
/// reserves must stay consistent with it.
#[derive(Debug)]
struct DexState {
    book: TokenBook,
    pool: ConstantSumPool,
}

/// A swap venue: one constant-sum pool plus the ledger it settles on.
///
/// All methods lock, operate, and unlock; each call is one atomic
/// transition in the same total order the mutex provides.
///
/// # Examples
///
/// ```
/// use sumswap::domain::{Address, Amount, Decimals, Token, TokenPair};
/// use sumswap::Dex;
///
/// let tok_a = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
/// let tok_b = Token::new(Address::from_bytes([2u8; 20]), Decimals::STANDARD);
/// let pair = TokenPair::new(tok_a, tok_b).expect("distinct tokens");
///
/// let dex = Dex::new(pair, Address::from_bytes([0xDD; 20]));
/// let lp = Address::from_bytes([10u8; 20]);
/// dex.issue(&tok_a, lp, Amount::new(1_000_000)).expect("fresh token");
/// dex.issue(&tok_b, lp, Amount::new(1_000_000)).expect("fresh token");
///
/// dex.approve(&tok_a, lp, Amount::new(1_000));
/// dex.approve(&tok_b, lp, Amount::new(2_000));
/// dex.add_liquidity(lp, Amount::new(1_000), Amount::new(2_000)).expect("funded");
/// assert_eq!(dex.reserves(), (Amount::new(1_000), Amount::new(2_000)));
/// ```
#[derive(Debug)]
pub struct Dex {
    state: Mutex<DexState>,
}

impl Dex {
    /// Creates a venue for `pair` with custody address `account`, an
    /// empty ledger, and zero reserves.
    #[must_use]
    pub fn new(pair: TokenPair, account: Address) -> Self {
        Self {
            state: Mutex::new(DexState {
                book: TokenBook::new(),
                pool: ConstantSumPool::new(pair, account),
            }),
        }
    }

    /// Issues `token` on the venue's ledger, minting `supply` to
    /// `owner`. See [`TokenBook::issue`].
    ///
    /// # Errors
    ///
    /// Propagates the ledger's rejection.
    pub fn issue(&self, token: &Token, owner: Address, supply: Amount) -> Result<()> {
        self.locked().book.issue(token, owner, supply)
    }

    /// Authorizes the pool's custody account to pull up to `amount` of
    /// `owner`'s `token`.
    pub fn approve(&self, token: &Token, owner: Address, amount: Amount) {
        let mut state = self.locked();
        let spender = state.pool.account();
        state.book.approve(token, owner, spender, amount);
    }

    /// Moves tokens between two ledger accounts, outside the pool.
    ///
    /// # Errors
    ///
    /// Propagates the ledger's rejection.
    pub fn transfer(&self, token: &Token, from: Address, to: Address, amount: Amount) -> Result<()> {
        self.locked().book.transfer(token, from, to, amount)
    }

    /// Returns `owner`'s ledger balance of `token`.
    #[must_use]
    pub fn balance_of(&self, token: &Token, owner: Address) -> Amount {
        self.locked().book.balance_of(token, owner)
    }

    /// Deposits `amount_a` of token A and `amount_b` of token B into
    /// the pool in one critical section.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidQuantity`](crate::DexError::InvalidQuantity)
    ///   if either amount is zero (rejected before the lock touches
    ///   any state).
    /// - Everything [`ConstantSumPool::add_liquidity`] rejects.
    pub fn add_liquidity(&self, from: Address, amount_a: Amount, amount_b: Amount) -> Result<()> {
        let deposit = Deposit::new(amount_a, amount_b)?;
        let mut state = self.locked();
        let DexState { book, pool } = &mut *state;
        match pool.add_liquidity(book, from, &deposit) {
            Ok(()) => {
                info!(%from, %amount_a, %amount_b, "liquidity added");
                Ok(())
            }
            Err(e) => {
                debug!(%from, error = %e, "add_liquidity rejected");
                Err(e)
            }
        }
    }

    /// Swaps `amount_in` of `token_in` for the other pool token,
    /// honoring the caller's `min_amount_out` floor.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidQuantity`](crate::DexError::InvalidQuantity)
    ///   if `amount_in` is zero.
    /// - Everything [`ConstantSumPool::swap`] rejects.
    pub fn swap(
        &self,
        from: Address,
        token_in: Token,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        let request = SwapRequest::new(token_in, amount_in, min_amount_out)?;
        let mut state = self.locked();
        let DexState { book, pool } = &mut *state;
        match pool.swap(book, from, &request) {
            Ok(outcome) => {
                info!(
                    %from,
                    token_in = %outcome.token_in(),
                    amount_in = %outcome.amount_in(),
                    amount_out = %outcome.amount_out(),
                    "swap executed"
                );
                Ok(outcome)
            }
            Err(e) => {
                debug!(%from, %request, error = %e, "swap rejected");
                Err(e)
            }
        }
    }

    /// Prices a prospective swap against current reserves without
    /// executing it.
    ///
    /// # Errors
    ///
    /// Everything [`ConstantSumPool::quote`] rejects.
    pub fn quote(&self, token_in: &Token, amount_in: Amount) -> Result<Amount> {
        self.locked().pool.quote(token_in, amount_in)
    }

    /// Returns the current `(reserve_a, reserve_b)` pair as one
    /// consistent read.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        let state = self.locked();
        (state.pool.reserve_a(), state.pool.reserve_b())
    }

    /// Returns the registered token pair.
    #[must_use]
    pub fn token_pair(&self) -> TokenPair {
        *self.locked().pool.token_pair()
    }

    /// Returns the pool's custody address.
    #[must_use]
    pub fn account(&self) -> Address {
        self.locked().pool.account()
    }

    /// Acquires the state lock, recovering from a poisoned mutex: the
    /// guarded data is only ever mutated through validated transitions,
    /// so a panicking reader cannot leave it inconsistent.
    fn locked(&self) -> std::sync::MutexGuard<'_, DexState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
