//! optionval - Command Line Option Valuation
//!
//! Prices a single option on a binomial lattice or with Black-Scholes,
//! evaluates a market quote and solves for implied volatility.
//!
//! # Commands
//!
//! - `optionval lattice` - Binomial tree price (American by default)
//! - `optionval analytic` - Black-Scholes price
//! - `optionval evaluate --market-price <P>` - Compare a quote with the model
//! - `optionval implied-vol --market-price <P>` - Implied call volatility
//! - `optionval convergence` - Lattice error against Black-Scholes by step count
//! - `optionval check` - Show the resolved configuration

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::implied_vol::QuoteArgs;
use commands::OptionArgs;
use config::{CliConfig, OutputFormat};

/// Single-option pricing CLI
#[derive(Parser)]
#[command(name = "optionval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optionval.toml")]
    config: PathBuf,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price on a Cox-Ross-Rubinstein binomial lattice
    Lattice {
        #[command(flatten)]
        option: OptionArgs,

        /// Number of time steps (defaults to lattice_steps from the config)
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Disable early exercise
        #[arg(long)]
        european: bool,
    },

    /// Price with the Black-Scholes formula (European exercise)
    Analytic {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Compare a market price with the Black-Scholes price
    Evaluate {
        #[command(flatten)]
        option: OptionArgs,

        /// Observed option premium
        #[arg(long)]
        market_price: f64,
    },

    /// Solve for the volatility implied by a call premium
    ImpliedVol {
        /// Underlying spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(long)]
        expiry: f64,

        /// Annual continuously compounded risk-free rate
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        /// Observed option premium
        #[arg(long)]
        market_price: f64,

        /// Option kind (only call is supported)
        #[arg(long, default_value = "call")]
        kind: String,
    },

    /// Lattice convergence towards the Black-Scholes price
    Convergence {
        #[command(flatten)]
        option: OptionArgs,

        /// Comma-separated step counts
        #[arg(short = 'n', long, value_delimiter = ',')]
        steps: Vec<usize>,
    },

    /// Show the resolved configuration
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    let format = cli.format.unwrap_or(config.output_format);

    let result = match cli.command {
        Commands::Lattice {
            option,
            steps,
            european,
        } => commands::lattice::run(&option, steps, european, &config, format),
        Commands::Analytic { option } => commands::analytic::run(&option, format),
        Commands::Evaluate {
            option,
            market_price,
        } => commands::evaluate::run(&option, market_price, format),
        Commands::ImpliedVol {
            spot,
            strike,
            expiry,
            rate,
            market_price,
            kind,
        } => {
            let quote = QuoteArgs {
                spot,
                strike,
                expiry,
                rate,
                kind,
                market_price,
            };
            commands::implied_vol::run(&quote, &config, format)
        }
        Commands::Convergence { option, steps } => {
            commands::convergence::run(&option, &steps, format)
        }
        Commands::Check => commands::check::run(&config, &cli.config, format),
    };

    Ok(result?)
}
