//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Crate-wide failure categories surfaced by every model
//! - `SolverError`: Errors from root-finding solvers

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every model-specific error converts into one of these categories, so a
/// caller can branch on the failure kind without knowing which model
/// produced it.
///
/// # Variants
/// - `InvalidOptionKind`: Option kind is neither call nor put
/// - `InvalidParameter`: Non-positive spot/strike/expiry, negative volatility, zero steps
/// - `DegenerateInput`: Closed-form formula undefined (zero volatility or expiry)
/// - `UnbracketedRoot`: Search interval has no sign change
/// - `UnsupportedOptionKind`: Option kind valid but not handled by the model
/// - `NumericalInstability`: Computation produced a non-finite or non-converged value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter("steps = 0".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: steps = 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Option kind outside {call, put}
    InvalidOptionKind(String),

    /// Parameter outside its valid domain
    InvalidParameter(String),

    /// Input for which the closed-form model is undefined
    DegenerateInput(String),

    /// Root-finding interval does not bracket a solution
    UnbracketedRoot(String),

    /// Option kind not supported by the requested model
    UnsupportedOptionKind(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidOptionKind(msg) => write!(f, "Invalid option kind: {}", msg),
            PricingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PricingError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
            PricingError::UnbracketedRoot(msg) => write!(f, "Unbracketed root: {}", msg),
            PricingError::UnsupportedOptionKind(msg) => {
                write!(f, "Unsupported option kind: {}", msg)
            }
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Solver configuration rejected.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NoBracket { .. } => PricingError::UnbracketedRoot(err.to_string()),
            SolverError::InvalidConfig(msg) => PricingError::InvalidParameter(msg),
            SolverError::MaxIterationsExceeded { .. } | SolverError::NumericalInstability(_) => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
