//! Lattice command implementation
//!
//! Prices an option on a Cox-Ross-Rubinstein binomial tree.

use pricer_models::instruments::{ExerciseStyle, OptionPricer};
use pricer_models::lattice::BinomialTree;
use tracing::info;

use super::output::{emit, PriceOutput};
use super::OptionArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Price on the lattice; `steps` falls back to the configured step count
pub fn compute(
    args: &OptionArgs,
    steps: Option<usize>,
    european: bool,
    config: &CliConfig,
) -> Result<PriceOutput> {
    let spec = args.to_spec()?;
    let exercise = if european {
        ExerciseStyle::European
    } else {
        ExerciseStyle::American
    };
    let tree = BinomialTree::new(config.lattice_config(steps)?, exercise);
    let price = tree.price(&spec)?;

    Ok(PriceOutput {
        model: OptionPricer::<f64>::name(&tree),
        option_type: spec.option_type(),
        exercise,
        steps: Some(tree.config().steps()),
        price,
    })
}

/// Run the lattice command
pub fn run(
    args: &OptionArgs,
    steps: Option<usize>,
    european: bool,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting lattice pricing...");
    let output = compute(args, steps, european, config)?;
    info!(
        "  {} {} with {} steps: {:.6}",
        output.exercise,
        output.option_type,
        output.steps.unwrap_or_default(),
        output.price
    );
    emit(format, &output, &output.rows())
}
