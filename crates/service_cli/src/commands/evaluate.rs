//! Evaluate command implementation
//!
//! Compares an observed premium against the Black-Scholes price.

use pricer_models::analytical::{evaluate, EvaluationReport};
use tracing::info;

use super::output::{emit, format_price};
use super::OptionArgs;
use crate::config::OutputFormat;
use crate::Result;

/// Build the valuation report
pub fn compute(args: &OptionArgs, market_price: f64) -> Result<EvaluationReport> {
    let spec = args.to_spec()?;
    Ok(evaluate(&spec, market_price)?)
}

fn rows(report: &EvaluationReport) -> Vec<(String, String)> {
    vec![
        ("Intrinsic Value".to_string(), format_price(report.intrinsic_value)),
        ("Extrinsic Value".to_string(), format_price(report.extrinsic_value)),
        ("Theoretical Price".to_string(), format_price(report.theoretical_price)),
        ("Market Price".to_string(), format_price(report.market_price)),
        ("Value Ratio".to_string(), format_price(report.value_ratio)),
        ("Verdict".to_string(), report.verdict.to_string()),
    ]
}

/// Run the evaluate command
pub fn run(args: &OptionArgs, market_price: f64, format: OutputFormat) -> Result<()> {
    info!("Evaluating market price {}...", market_price);
    let report = compute(args, market_price)?;
    info!("  Verdict: {}", report.verdict);
    emit(format, &report, &rows(&report))
}
