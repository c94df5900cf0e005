//! Analytic command implementation
//!
//! Prices a European option with the Black-Scholes formula.

use pricer_models::analytical::{black_scholes, AnalyticModel};
use pricer_models::instruments::{ExerciseStyle, OptionPricer};
use tracing::info;

use super::output::{emit, PriceOutput};
use super::OptionArgs;
use crate::config::OutputFormat;
use crate::Result;

/// Closed-form price
pub fn compute(args: &OptionArgs) -> Result<PriceOutput> {
    let spec = args.to_spec()?;
    let price = black_scholes::price(&spec)?;

    Ok(PriceOutput {
        model: OptionPricer::<f64>::name(&AnalyticModel),
        option_type: spec.option_type(),
        exercise: ExerciseStyle::European,
        steps: None,
        price,
    })
}

/// Run the analytic command
pub fn run(args: &OptionArgs, format: OutputFormat) -> Result<()> {
    info!("Starting Black-Scholes pricing...");
    let output = compute(args)?;
    info!("  {} price: {:.6}", output.option_type, output.price);
    emit(format, &output, &output.rows())
}
