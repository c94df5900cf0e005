//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analytic;
pub mod check;
pub mod convergence;
pub mod evaluate;
pub mod implied_vol;
pub mod lattice;
pub mod output;

use clap::Args;
use pricer_models::instruments::{OptionSpec, OptionType};

use crate::Result;

/// Contract parameters shared by the pricing commands
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    /// Underlying spot price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Annual continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annual volatility (0.2 = 20%)
    #[arg(long = "vol")]
    pub volatility: f64,

    /// Option kind: call or put
    #[arg(long)]
    pub kind: String,
}

impl OptionArgs {
    /// Parses the option kind and validates the contract parameters
    pub fn to_spec(&self) -> Result<OptionSpec<f64>> {
        let option_type: OptionType = self.kind.parse()?;
        let spec = OptionSpec::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            option_type,
        )?;
        Ok(spec)
    }
}

#[cfg(test)]
pub(crate) fn sample_args(kind: &str) -> OptionArgs {
    OptionArgs {
        spot: 41.45,
        strike: 30.0,
        expiry: 1.4,
        rate: 0.0486,
        volatility: 0.1571,
        kind: kind.to_string(),
    }
}
