//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `DegenerateInput`: σ = 0 or T = 0, where d₁ divides by zero
/// - `InvalidParameter`: Input outside the model's domain (negative σ or T, non-positive S or K)
/// - `NumericalInstability`: Formula produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::DegenerateInput { volatility: 0.2, expiry: 0.0 };
/// assert!(format!("{}", err).contains("T = 0"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Zero volatility or zero time to expiry.
    #[error("Degenerate analytic input: σ = {volatility}, T = {expiry} (σ√T must be positive)")]
    DegenerateInput {
        /// Volatility supplied
        volatility: f64,
        /// Time to expiry supplied
        expiry: f64,
    },

    /// Parameter outside the model's domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::DegenerateInput { .. } => PricingError::DegenerateInput(err.to_string()),
            AnalyticalError::InvalidParameter { name, value } => {
                PricingError::InvalidParameter(format!("{} = {}", name, value))
            }
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
