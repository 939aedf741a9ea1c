//! # sumswap
//!
//! A two-token swap pool with constant-sum (linear-ratio) pricing,
//! settled against an ERC-20 style in-memory token ledger.
//!
//! The pool tracks two reserves and exposes exactly two mutating
//! operations — `add_liquidity` and `swap` — plus read-only reserve
//! queries. Pricing is a linear re-quote of the pre-trade reserve
//! ratio (`out = in × reserve_out / reserve_in`), deliberately not the
//! constant-product `x · y = k` curve: there is no fee, no curvature,
//! and no liquidity-provider share accounting. Every call is a single
//! atomic transition; any rejection leaves reserves and balances
//! untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use sumswap::prelude::*;
//!
//! // 1. Define the two pool tokens
//! let tok_a = Token::new(Address::from_bytes([1u8; 20]), Decimals::STANDARD);
//! let tok_b = Token::new(Address::from_bytes([2u8; 20]), Decimals::STANDARD);
//! let pair = TokenPair::new(tok_a, tok_b).expect("distinct tokens");
//!
//! // 2. Create the venue and issue both tokens to a liquidity provider
//! let dex = Dex::new(pair, Address::from_bytes([0xDD; 20]));
//! let lp = Address::from_bytes([10u8; 20]);
//! dex.issue(&tok_a, lp, Amount::new(1_000_000)).expect("fresh token");
//! dex.issue(&tok_b, lp, Amount::new(1_000_000)).expect("fresh token");
//!
//! // 3. Authorize the pool and seed reserves at a 1:2 ratio
//! dex.approve(&tok_a, lp, Amount::new(1_000));
//! dex.approve(&tok_b, lp, Amount::new(2_000));
//! dex.add_liquidity(lp, Amount::new(1_000), Amount::new(2_000)).expect("funded");
//!
//! // 4. Trade: 100 A buys 100 × 2000 / 1000 = 200 B
//! dex.approve(&tok_a, lp, Amount::new(100));
//! let outcome = dex.swap(lp, tok_a, Amount::new(100), Amount::new(200)).expect("within floor");
//! assert_eq!(outcome.amount_out(), Amount::new(200));
//! assert_eq!(dex.reserves(), (Amount::new(1_100), Amount::new(1_800)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  one request at a time, no retries
//! └──────┬──────┘
//!        │ add_liquidity / swap / quote / reserves
//!        ▼
//! ┌─────────────┐
//! │     Dex      │  Mutex-owned critical section per call
//! └──────┬──────┘
//!        │ validated Deposit / SwapRequest
//!        ▼
//! ┌─────────────┐      ┌─────────────┐
//! │ ConstantSum  │─────▶│  TokenBook   │  balances, allowances,
//! │    Pool      │ pull │ (TokenLedger)│  custody settlement
//! └─────────────┘ /pay └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Token`](domain::Token), [`Deposit`](domain::Deposit), [`SwapRequest`](domain::SwapRequest), … |
//! | [`traits`] | [`TokenLedger`](traits::TokenLedger) — the token-transfer collaborator seam |
//! | [`token`] | [`TokenBook`](token::TokenBook) — in-memory fungible-token ledger |
//! | [`pool`] | [`ConstantSumPool`](pool::ConstantSumPool) — reserve bookkeeping and pricing |
//! | [`dex`] | [`Dex`] — single-writer facade tying pool and ledger together |
//! | [`error`] | [`DexError`] unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod dex;
pub mod domain;
pub mod error;
pub mod pool;
pub mod prelude;
pub mod token;
pub mod traits;

pub use dex::Dex;
pub use error::{DexError, Result};
