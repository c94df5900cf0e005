//! Implied volatility command implementation
//!
//! Inverts the Black-Scholes call price for volatility.

use pricer_models::implied::ImpliedVolatilitySolver;
use pricer_models::instruments::OptionType;
use serde::Serialize;
use tracing::info;

use super::output::{emit, format_percent, format_price};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Contract and quote for the implied volatility command
#[derive(Debug, Clone)]
pub struct QuoteArgs {
    /// Underlying spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Option kind
    pub kind: String,
    /// Observed premium
    pub market_price: f64,
}

/// Solver output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpliedVolOutput {
    /// Observed premium
    pub market_price: f64,
    /// Volatility reproducing the premium
    pub implied_volatility: f64,
}

/// Solve for implied volatility with the configured search interval
pub fn compute(quote: &QuoteArgs, config: &CliConfig) -> Result<ImpliedVolOutput> {
    let option_type: OptionType = quote.kind.parse()?;
    let solver = ImpliedVolatilitySolver::new(config.implied_vol_config()?);
    let implied_volatility = solver.solve(
        quote.spot,
        quote.strike,
        quote.expiry,
        quote.rate,
        option_type,
        quote.market_price,
    )?;

    Ok(ImpliedVolOutput {
        market_price: quote.market_price,
        implied_volatility,
    })
}

/// Run the implied-vol command
pub fn run(quote: &QuoteArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Solving implied volatility for market price {}...", quote.market_price);
    let output = compute(quote, config)?;
    info!("  Implied volatility: {:.6}", output.implied_volatility);

    let rows = vec![
        ("Market Price".to_string(), format_price(output.market_price)),
        ("Implied Volatility".to_string(), format_percent(output.implied_volatility)),
    ];
    emit(format, &output, &rows)
}
