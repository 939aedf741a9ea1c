//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers five properties:
//!
//! 1. **Reserve additivity** — add-liquidity grows reserves by exactly
//!    the deposited amounts.
//! 2. **Failure atomicity** — any rejected operation leaves reserves,
//!    custody, and caller balances byte-identical.
//! 3. **Swap conservation** — an accepted swap moves `amount_in` into
//!    the input reserve and exactly `amount_out` out of the other.
//! 4. **Linear pricing** — the payout always equals
//!    `in × reserve_out / reserve_in` floored at pre-trade reserves.
//! 5. **Quote agreement** — `quote` predicts the exact payout of the
//!    swap that follows it.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::domain::{Address, Amount, Decimals, Deposit, SwapRequest, Token, TokenPair};
use crate::pool::ConstantSumPool;
use crate::token::TokenBook;
use crate::traits::TokenLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> Token {
    Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD)
}

fn tok_b() -> Token {
    Token::new(Address::from_bytes([2u8; 20]), Decimals::STANDARD)
}

fn pool_acct() -> Address {
    Address::from_bytes([0xDD; 20])
}

fn trader() -> Address {
    Address::from_bytes([10u8; 20])
}

/// Pool with reserves `(ra, rb)` and a trader holding `funds` of each
/// token with a blanket approval.
fn setup(ra: u128, rb: u128, funds: u128) -> (ConstantSumPool, TokenBook) {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    let mut book = TokenBook::new();
    let Ok(()) = book.issue(&tok_a(), trader(), Amount::new(ra + funds)) else {
        panic!("issue A");
    };
    let Ok(()) = book.issue(&tok_b(), trader(), Amount::new(rb + funds)) else {
        panic!("issue B");
    };
    book.approve(&tok_a(), trader(), pool_acct(), Amount::MAX);
    book.approve(&tok_b(), trader(), pool_acct(), Amount::MAX);

    let mut pool = ConstantSumPool::new(pair, pool_acct());
    if ra > 0 && rb > 0 {
        let Ok(deposit) = Deposit::new(Amount::new(ra), Amount::new(rb)) else {
            panic!("valid deposit");
        };
        let Ok(()) = pool.add_liquidity(&mut book, trader(), &deposit) else {
            panic!("seed liquidity");
        };
    }
    (pool, book)
}

fn snapshot(pool: &ConstantSumPool, book: &TokenBook) -> [Amount; 6] {
    [
        pool.reserve_a(),
        pool.reserve_b(),
        book.balance_of(&tok_a(), pool_acct()),
        book.balance_of(&tok_b(), pool_acct()),
        book.balance_of(&tok_a(), trader()),
        book.balance_of(&tok_b(), trader()),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Property 1: reserves grow by exactly the deposited amounts.
    #[test]
    fn reserve_additivity(
        ra in 0u128..1_000_000,
        rb in 0u128..1_000_000,
        da in 1u128..1_000_000,
        db in 1u128..1_000_000,
    ) {
        let (mut pool, mut book) = setup(ra, rb, 2_000_000);
        let ra_before = pool.reserve_a();
        let rb_before = pool.reserve_b();

        let Ok(deposit) = Deposit::new(Amount::new(da), Amount::new(db)) else {
            panic!("valid deposit");
        };
        prop_assert!(pool.add_liquidity(&mut book, trader(), &deposit).is_ok());
        prop_assert_eq!(pool.reserve_a().get(), ra_before.get() + da);
        prop_assert_eq!(pool.reserve_b().get(), rb_before.get() + db);
    }

    /// Property 2: a rejected swap changes nothing anywhere.
    #[test]
    fn failure_atomicity(
        ra in 1u128..100_000,
        rb in 1u128..100_000,
        amount in 1u128..1_000_000,
    ) {
        let (mut pool, mut book) = setup(ra, rb, 1_000_000);
        let before = snapshot(&pool, &book);

        // Force rejection with an unreachable output floor.
        let Ok(req) = SwapRequest::new(tok_a(), Amount::new(amount), Amount::MAX) else {
            panic!("valid request");
        };
        prop_assert!(pool.swap(&mut book, trader(), &req).is_err());
        prop_assert_eq!(snapshot(&pool, &book), before);
    }

    /// Properties 3 + 4: accepted swaps conserve tokens and price at
    /// the pre-trade linear ratio.
    #[test]
    fn swap_conservation_and_linear_pricing(
        ra in 1u128..1_000_000,
        rb in 1u128..1_000_000,
        amount in 1u128..1_000_000,
    ) {
        let (mut pool, mut book) = setup(ra, rb, 2_000_000);
        let expected_out = amount * rb / ra;
        let result = pool.swap(
            &mut book,
            trader(),
            &SwapRequest::new(tok_a(), Amount::new(amount), Amount::ZERO)
                .unwrap_or_else(|_| panic!("valid request")),
        );

        if expected_out > rb {
            prop_assert!(result.is_err());
        } else {
            let Ok(outcome) = result else {
                panic!("expected Ok");
            };
            prop_assert_eq!(outcome.amount_out().get(), expected_out);
            prop_assert_eq!(pool.reserve_a().get(), ra + amount);
            prop_assert_eq!(pool.reserve_b().get(), rb - expected_out);
            // Custody mirrors the new reserves.
            prop_assert_eq!(book.balance_of(&tok_a(), pool_acct()).get(), ra + amount);
            prop_assert_eq!(book.balance_of(&tok_b(), pool_acct()).get(), rb - expected_out);
        }
    }

    /// Property 5: quote and swap agree on the payout.
    #[test]
    fn quote_agrees_with_swap(
        ra in 1u128..1_000_000,
        rb in 1u128..1_000_000,
        amount in 1u128..1_000_000,
    ) {
        let (mut pool, mut book) = setup(ra, rb, 2_000_000);
        let quoted = pool.quote(&tok_a(), Amount::new(amount));
        let Ok(req) = SwapRequest::new(tok_a(), Amount::new(amount), Amount::ZERO) else {
            panic!("valid request");
        };
        let swapped = pool.swap(&mut book, trader(), &req);

        match (quoted, swapped) {
            (Ok(q), Ok(outcome)) => prop_assert_eq!(q, outcome.amount_out()),
            (Err(qe), Err(se)) => prop_assert_eq!(qe, se),
            (q, s) => panic!("quote/swap disagree: {q:?} vs {s:?}"),
        }
    }
}
