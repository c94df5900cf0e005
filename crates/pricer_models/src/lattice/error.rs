//! Error types for lattice pricing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Binomial lattice errors.
///
/// # Variants
/// - `InvalidParameter`: Lattice setting outside its domain (e.g. zero steps)
/// - `DegenerateTree`: σ = 0 collapses up and down moves (u = d)
/// - `InvalidProbability`: Risk-neutral probability outside [0, 1]
/// - `NumericalInstability`: Backward induction produced a non-finite value
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Lattice setting outside its domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Up and down factors coincide.
    #[error("Degenerate lattice: σ = {volatility} gives u = d")]
    DegenerateTree {
        /// Volatility supplied
        volatility: f64,
    },

    /// Risk-neutral up probability outside [0, 1].
    #[error("Risk-neutral probability p = {probability} outside [0, 1]; increase steps or volatility")]
    InvalidProbability {
        /// Computed probability
        probability: f64,
    },

    /// Non-finite value during backward induction.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidParameter { name, value } => {
                PricingError::InvalidParameter(format!("{} = {}", name, value))
            }
            LatticeError::DegenerateTree { .. } => PricingError::DegenerateInput(err.to_string()),
            LatticeError::InvalidProbability { .. } | LatticeError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_steps_display() {
        let err = LatticeError::InvalidParameter {
            name: "steps",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "Invalid parameter: steps = 0");
    }

    #[test]
    fn test_to_pricing_error() {
        let invalid: PricingError = LatticeError::InvalidParameter {
            name: "steps",
            value: 0.0,
        }
        .into();
        assert_eq!(invalid, PricingError::InvalidParameter("steps = 0".to_string()));

        let degenerate: PricingError = LatticeError::DegenerateTree { volatility: 0.0 }.into();
        assert!(matches!(degenerate, PricingError::DegenerateInput(_)));

        let probability: PricingError =
            LatticeError::InvalidProbability { probability: 1.2 }.into();
        assert!(matches!(probability, PricingError::NumericalInstability(_)));
    }
}
