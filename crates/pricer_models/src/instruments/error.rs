//! Instrument error types.
//!
//! This module provides structured error handling for option kind parsing
//! and contract parameter validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidOptionKind`: Option kind string is neither call nor put
/// - `InvalidParameter`: Contract parameter outside its valid domain
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidParameter { name: "strike", value: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter: strike = -100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Option kind outside {call, put}.
    #[error("Invalid option kind: '{kind}' (expected 'call' or 'put')")]
    InvalidOptionKind {
        /// The rejected kind as supplied
        kind: String,
    },

    /// Parameter outside its valid domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidOptionKind { .. } => {
                PricingError::InvalidOptionKind(err.to_string())
            }
            InstrumentError::InvalidParameter { name, value } => {
                PricingError::InvalidParameter(format!("{} = {}", name, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_kind_display() {
        let err = InstrumentError::InvalidOptionKind {
            kind: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid option kind: 'straddle' (expected 'call' or 'put')"
        );
    }

    #[test]
    fn test_invalid_parameter_to_pricing_error() {
        let err = InstrumentError::InvalidParameter {
            name: "expiry",
            value: 0.0,
        };
        let pricing_err: PricingError = err.into();
        assert_eq!(
            pricing_err,
            PricingError::InvalidParameter("expiry = 0".to_string())
        );
    }

    #[test]
    fn test_invalid_option_kind_to_pricing_error() {
        let err = InstrumentError::InvalidOptionKind {
            kind: "straddle".to_string(),
        };
        match PricingError::from(err) {
            PricingError::InvalidOptionKind(msg) => assert!(msg.contains("straddle")),
            other => panic!("Expected InvalidOptionKind, got {:?}", other),
        }
    }
}
