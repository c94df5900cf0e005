//! CLI configuration management
//!
//! Loads `optionval.toml` (or the file given by `--config`), applies
//! `OPTIONVAL_*` environment overrides and validates the result. A missing
//! file yields the defaults.

use pricer_core::math::solvers::SolverConfig;
use pricer_models::implied::{ImpliedVolConfig, ImpliedVolError};
use pricer_models::lattice::{LatticeConfig, LatticeError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "OPTIONVAL_LOG_LEVEL";
/// Environment variable overriding `lattice_steps`
pub const ENV_LATTICE_STEPS: &str = "OPTIONVAL_LATTICE_STEPS";
/// Environment variable overriding `output_format`
pub const ENV_FORMAT: &str = "OPTIONVAL_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable aligned columns
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default lattice step count
    pub lattice_steps: usize,
    /// Lower volatility bound for implied volatility
    pub iv_lower_bound: f64,
    /// Upper volatility bound for implied volatility
    pub iv_upper_bound: f64,
    /// Root finder tolerance
    pub solver_tolerance: f64,
    /// Root finder iteration cap
    pub solver_max_iterations: usize,
    /// Default output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            lattice_steps: 200,
            iv_lower_bound: 1e-4,
            iv_upper_bound: 10.0,
            solver_tolerance: 1e-10,
            solver_max_iterations: 100,
            output_format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `OPTIONVAL_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(steps) = lookup(ENV_LATTICE_STEPS) {
            self.lattice_steps = steps.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_LATTICE_STEPS, steps
                ))
            })?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.lattice_steps == 0 {
            errors.push("lattice_steps must be at least 1".to_string());
        }

        let bounds_valid = self.iv_lower_bound > 0.0
            && self.iv_upper_bound.is_finite()
            && self.iv_lower_bound < self.iv_upper_bound;
        if !bounds_valid {
            errors.push(format!(
                "iv bounds must satisfy 0 < iv_lower_bound < iv_upper_bound, got [{}, {}]",
                self.iv_lower_bound, self.iv_upper_bound
            ));
        }

        if !(self.solver_tolerance > 0.0) || !self.solver_tolerance.is_finite() {
            errors.push(format!(
                "solver_tolerance must be positive, got {}",
                self.solver_tolerance
            ));
        }

        if self.solver_max_iterations == 0 {
            errors.push("solver_max_iterations must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Lattice settings, using `steps` when given and `lattice_steps` otherwise
    pub fn lattice_config(&self, steps: Option<usize>) -> Result<LatticeConfig, LatticeError> {
        LatticeConfig::new(steps.unwrap_or(self.lattice_steps))
    }

    /// Implied volatility search interval and solver settings
    pub fn implied_vol_config(&self) -> Result<ImpliedVolConfig<f64>, ImpliedVolError> {
        let solver = SolverConfig::new(self.solver_tolerance, self.solver_max_iterations)?;
        ImpliedVolConfig::new(self.iv_lower_bound, self.iv_upper_bound, solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.lattice_steps, 200);
        assert_eq!(config.iv_lower_bound, 1e-4);
        assert_eq!(config.iv_upper_bound, 10.0);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"DEBUG\"").unwrap();
        writeln!(file, "lattice_steps = 500").unwrap();
        writeln!(file, "output_format = \"json\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.lattice_steps, 500);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.solver_max_iterations, 100);
    }

    #[test]
    fn test_load_rejects_unknown_log_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"verbose\"").unwrap();

        let result = CliConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(msg)) if msg.contains("verbose")));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("optionval.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                (ENV_LOG_LEVEL, "warn"),
                (ENV_LATTICE_STEPS, "1000"),
                (ENV_FORMAT, "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.lattice_steps, 1000);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_override_bad_steps() {
        let result = CliConfig::default().with_overrides(lookup(&[(ENV_LATTICE_STEPS, "many")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_validate_collects_errors() {
        let config = CliConfig {
            lattice_steps: 0,
            iv_lower_bound: 5.0,
            iv_upper_bound: 1.0,
            solver_tolerance: 0.0,
            solver_max_iterations: 0,
            ..CliConfig::default()
        };

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.contains("lattice_steps")));
                assert!(errors.iter().any(|e| e.contains("iv bounds")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_model_configs() {
        let config = CliConfig::default();
        assert_eq!(config.lattice_config(None).unwrap().steps(), 200);
        assert_eq!(config.lattice_config(Some(50)).unwrap().steps(), 50);
        assert!(config.lattice_config(Some(0)).is_err());

        let iv = config.implied_vol_config().unwrap();
        assert_eq!(iv.lower_bound(), 1e-4);
        assert_eq!(iv.upper_bound(), 10.0);
    }

    #[test]
    fn test_log_level_parsing() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            assert!(LogLevel::from_str(level).is_ok(), "{} should parse", level);
        }
        assert!(matches!(
            LogLevel::from_str("loud"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
