//! Check command implementation
//!
//! Prints the resolved configuration and confirms that the model settings
//! it implies are accepted.

use std::path::Path;

use tracing::info;

use super::output::emit;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Rows describing the resolved configuration
pub fn rows(config: &CliConfig, source: &str) -> Vec<(String, String)> {
    vec![
        ("Config Source".to_string(), source.to_string()),
        ("Log Level".to_string(), config.log_level.to_string()),
        ("Lattice Steps".to_string(), config.lattice_steps.to_string()),
        (
            "IV Bounds".to_string(),
            format!("[{}, {}]", config.iv_lower_bound, config.iv_upper_bound),
        ),
        ("Solver Tolerance".to_string(), format!("{:e}", config.solver_tolerance)),
        (
            "Solver Max Iterations".to_string(),
            config.solver_max_iterations.to_string(),
        ),
        ("Output Format".to_string(), config.output_format.to_string()),
    ]
}

/// Run the check command
pub fn run(config: &CliConfig, path: &Path, format: OutputFormat) -> Result<()> {
    info!("Checking configuration...");
    config.lattice_config(None)?;
    config.implied_vol_config()?;

    let source = if path.exists() {
        path.display().to_string()
    } else {
        "defaults".to_string()
    };
    info!("  Configuration OK ({})", source);
    emit(format, config, &rows(config, &source))
}
