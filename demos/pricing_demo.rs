// demos/pricing_demo.rs

//! Walk through one calculator action: parse form text, price the requested
//! side, and show the put-call parity cross-check.
//!
//! Usage:
//!     cargo run --example pricing_demo -- [config.toml]
//!
//! Set `RUST_LOG=debug` to see the d1/d2 trace of every evaluation.

use anyhow::Result;
use parity_lib::{default_configs, price_batch, price_with_parity, PricingConfig, RawInputs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PricingConfig::from_file(path)?,
        None => default_configs::standard(),
    };

    println!("Black-Scholes Option Pricing Calculator");
    println!("=======================================");
    println!("C = S*N(d1) - K*e^(-rT)*N(d2)");
    println!("C - P = S - K*e^(-rT)\n");

    // Step 1: the form starts from the configured defaults
    let form = RawInputs::from(&config.defaults);
    println!("Inputs:");
    println!("  Spot Price (S):         {}", form.spot);
    println!("  Strike Price (K):       {}", form.strike);
    println!("  Time to Maturity (T):   {} years", form.time_to_expiry);
    println!("  Risk-Free Rate (r):     {}", form.rate);
    println!("  Volatility (sigma):     {}", form.volatility);
    println!("  Option Type:            {}\n", form.option_type);

    // Step 2: parse, price and reconcile
    let inputs = form.parse()?;
    let report = price_with_parity(&inputs, &config)?;
    println!("{}", report);
    println!(
        "Parity discrepancy: {:.2e} (tolerance {:.0e})\n",
        report.parity.discrepancy(),
        config.parity_tolerance
    );

    // Step 3: bad form input is reported, never priced
    let typo = RawInputs {
        time_to_expiry: "0".to_string(),
        ..form.clone()
    };
    match typo.parse() {
        Ok(_) => println!("Unexpectedly accepted T=0"),
        Err(e) => println!("Rejected T=0: {}", e),
    }
    let garbage = RawInputs {
        volatility: "twenty".to_string(),
        ..form
    };
    if let Err(e) = garbage.parse() {
        println!("Rejected sigma=\"twenty\": {}\n", e);
    }

    // Step 4: a small strike ladder in one batch
    let ladder: Vec<_> = [80.0, 90.0, 100.0, 110.0, 120.0]
        .iter()
        .map(|&strike| parity_lib::PricingInputs { strike, ..inputs })
        .collect();

    println!(
        "{:<8} {:<10} {:<10} {:<10} {:<12}",
        "Strike", "Price", "Delta", "Gamma", "Parity gap"
    );
    println!("{}", "-".repeat(52));
    for result in price_batch(ladder, &config) {
        let r = result?;
        println!(
            "{:<8.0} {:<10.4} {:<10.4} {:<10.4} {:<12.2e}",
            r.inputs.strike,
            r.greeks.price,
            r.greeks.delta,
            r.greeks.gamma,
            r.parity.discrepancy()
        );
    }

    println!("\nTOML export:\n{}", report.to_toml()?);
    Ok(())
}
