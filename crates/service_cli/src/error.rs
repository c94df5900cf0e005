//! CLI error types.

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::implied::ImpliedVolError;
use pricer_models::instruments::InstrumentError;
use pricer_models::lattice::LatticeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing model failure
    #[error("{0}")]
    Pricing(#[from] PricingError),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

macro_rules! impl_from_model_error {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for CliError {
                fn from(err: $err) -> Self {
                    CliError::Pricing(err.into())
                }
            }
        )*
    };
}

impl_from_model_error!(InstrumentError, LatticeError, AnalyticalError, ImpliedVolError);

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_errors_become_pricing_errors() {
        let err: CliError = LatticeError::InvalidParameter {
            name: "steps",
            value: 0.0,
        }
        .into();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::InvalidParameter(_))
        ));
        assert_eq!(err.to_string(), "Invalid parameter: steps = 0");
    }

    #[test]
    fn test_invalid_kind_message() {
        let err: CliError = InstrumentError::InvalidOptionKind {
            kind: "straddle".to_string(),
        }
        .into();
        assert!(err.to_string().contains("straddle"));
    }
}
