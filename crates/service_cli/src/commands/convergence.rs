//! Convergence command implementation
//!
//! Prices a European option on lattices of increasing size, in parallel,
//! and reports the error against the Black-Scholes price.

use pricer_models::analytical::black_scholes;
use pricer_models::instruments::ExerciseStyle;
use pricer_models::lattice::{self, LatticeError};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::output::{emit, format_percent, format_price};
use super::OptionArgs;
use crate::config::OutputFormat;
use crate::Result;

/// Step counts used when none are given
pub const DEFAULT_STEPS: [usize; 6] = [25, 50, 100, 200, 500, 1000];

/// Lattice price at one step count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceRow {
    /// Lattice steps
    pub steps: usize,
    /// European lattice price
    pub lattice_price: f64,
    /// Black-Scholes price
    pub analytic_price: f64,
    /// lattice_price - analytic_price
    pub error: f64,
    /// |error| / analytic_price
    pub relative_error: f64,
}

/// Price every step count; rows are returned in the order of `steps`
pub fn compute(args: &OptionArgs, steps: &[usize]) -> Result<Vec<ConvergenceRow>> {
    let spec = args.to_spec()?;
    let analytic_price = black_scholes::price(&spec)?;

    let lattice_prices = steps
        .par_iter()
        .map(|&n| lattice::price(&spec, n, ExerciseStyle::European))
        .collect::<std::result::Result<Vec<f64>, LatticeError>>()?;

    Ok(steps
        .iter()
        .zip(lattice_prices)
        .map(|(&steps, lattice_price)| {
            let error = lattice_price - analytic_price;
            ConvergenceRow {
                steps,
                lattice_price,
                analytic_price,
                error,
                relative_error: error.abs() / analytic_price,
            }
        })
        .collect())
}

/// Run the convergence command
pub fn run(args: &OptionArgs, steps: &[usize], format: OutputFormat) -> Result<()> {
    let steps = if steps.is_empty() {
        &DEFAULT_STEPS[..]
    } else {
        steps
    };
    info!("Running convergence study over {} lattices...", steps.len());
    let table = compute(args, steps)?;

    let rows: Vec<(String, String)> = table
        .iter()
        .map(|row| {
            (
                format!("N = {}", row.steps),
                format!(
                    "{} (err {})",
                    format_price(row.lattice_price),
                    format_percent(row.relative_error)
                ),
            )
        })
        .collect();
    emit(format, &table, &rows)
}
