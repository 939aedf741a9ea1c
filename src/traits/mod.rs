//! Trait seams between the pool and its collaborators.

mod token_ledger;

pub use token_ledger::TokenLedger;
