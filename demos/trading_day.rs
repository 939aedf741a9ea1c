//! A full trading day on a two-token venue.
//!
//! Demonstrates issuing two tokens, granting spending approvals,
//! seeding the pool with reserves, quoting, swapping in both
//! directions, and watching the linear exchange rate drift as the
//! reserves change.
//!
//! # Run
//!
//! ```bash
//! cargo run --example trading_day
//! ```

use sumswap::domain::{Address, Decimals, Token, TokenPair};
use sumswap::Dex;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sumswap=info")),
        )
        .init();

    println!("=== Constant Sum Venue (linear ratio pricing) ===\n");

    // ── 1. Define tokens and deploy the venue ───────────────────────────
    let alpha = Token::new(Address::from_bytes([0xA1; 20]), Decimals::STANDARD);
    let beta = Token::new(Address::from_bytes([0xB2; 20]), Decimals::STANDARD);
    let pair = TokenPair::new(alpha, beta)?;

    let custody = Address::from_bytes([0xDD; 20]);
    let dex = Dex::new(pair, custody);

    println!("Token A (ALPHA): {alpha}");
    println!("Token B (BETA):  {beta}");
    println!("Pool custody:    {custody}");

    // ── 2. Issue supply and fund the participants ───────────────────────
    let issuer = Address::from_bytes([0x01; 20]);
    let market_maker = Address::from_bytes([0x02; 20]);
    let trader = Address::from_bytes([0x03; 20]);

    dex.issue(&alpha, issuer, alpha.units(1_000_000))?;
    dex.issue(&beta, issuer, beta.units(1_000_000))?;

    dex.transfer(&alpha, issuer, market_maker, alpha.units(10_000))?;
    dex.transfer(&beta, issuer, market_maker, beta.units(10_000))?;
    dex.transfer(&alpha, issuer, trader, alpha.units(500))?;

    println!("\nIssued 1 000 000 of each token, funded a market maker and a trader");

    // ── 3. Seed the pool: 1 000 ALPHA against 2 000 BETA ────────────────
    dex.approve(&alpha, market_maker, alpha.units(1_000));
    dex.approve(&beta, market_maker, beta.units(2_000));
    dex.add_liquidity(market_maker, alpha.units(1_000), beta.units(2_000))?;

    let (ra, rb) = dex.reserves();
    println!("\n--- Pool seeded ---");
    println!("  Reserve A: {ra}");
    println!("  Reserve B: {rb}");

    // ── 4. Quote before trading ─────────────────────────────────────────
    let probe = alpha.units(100);
    let quoted = dex.quote(&alpha, probe)?;
    println!("\nQuote: {probe} ALPHA buys {quoted} BETA at the current ratio");

    // ── 5. Swap 100 ALPHA for BETA ──────────────────────────────────────
    dex.approve(&alpha, trader, alpha.units(500));
    let outcome = dex.swap(trader, alpha, probe, quoted)?;

    println!("\n--- Swap: sell 100 ALPHA ---");
    println!("  Amount in:  {}", outcome.amount_in());
    println!("  Amount out: {}", outcome.amount_out());

    let (ra, rb) = dex.reserves();
    println!("  Reserves:   {ra} A / {rb} B");

    // ── 6. The same trade again, at the drifted ratio ───────────────────
    let requote = dex.quote(&alpha, probe)?;
    println!("\nSame 100 ALPHA now quotes {requote} BETA (ratio has moved)");

    let outcome = dex.swap(trader, alpha, probe, requote)?;
    println!("  Executed for {}", outcome.amount_out());

    // ── 7. Swap back: the trader sells some BETA ────────────────────────
    let beta_held = dex.balance_of(&beta, trader);
    dex.approve(&beta, trader, beta_held);
    let outcome = dex.swap(trader, beta, beta_held, sumswap::domain::Amount::ZERO)?;

    println!("\n--- Swap: sell {beta_held} BETA back ---");
    println!("  Amount out: {} ALPHA", outcome.amount_out());

    // ── 8. A floor that cannot be met is rejected without effect ────────
    let held_before = dex.balance_of(&alpha, trader);
    let quoted = dex.quote(&alpha, probe)?;
    let too_high = quoted.checked_add(sumswap::domain::Amount::new(1))?;
    let rejected = dex.swap(trader, alpha, probe, too_high);

    println!("\n--- Swap with an unmeetable floor ---");
    println!("  Result: {}", rejected.unwrap_err());
    assert_eq!(dex.balance_of(&alpha, trader), held_before);
    println!("  Trader balance untouched");

    // ── 9. Custody always matches the reserves ──────────────────────────
    let (ra, rb) = dex.reserves();
    println!("\n--- End of day ---");
    println!("  Reserve A: {ra}  (custody holds {})", dex.balance_of(&alpha, custody));
    println!("  Reserve B: {rb}  (custody holds {})", dex.balance_of(&beta, custody));
    assert_eq!(dex.balance_of(&alpha, custody), ra);
    assert_eq!(dex.balance_of(&beta, custody), rb);

    Ok(())
}
