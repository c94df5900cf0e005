//! Error types for implied volatility inversion.

use pricer_core::types::{PricingError, SolverError};
use thiserror::Error;

use crate::analytical::AnalyticalError;
use crate::instruments::InstrumentError;

/// Implied volatility errors.
///
/// # Variants
/// - `UnbracketedRoot`: Model prices at both volatility bounds lie on the same side of the market price
/// - `UnsupportedOptionKind`: Inversion requested for a put
/// - `InvalidMarketPrice`: Market price not positive and finite
/// - `InvalidBounds`: Search interval not an increasing pair of positive volatilities
/// - `Instrument`: Spot, strike, expiry or rate rejected
/// - `Analytical`: Closed-form pricing failed
/// - `Solver`: Root finder exhausted its iteration budget or hit a non-finite value
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// No sign change across the volatility interval.
    #[error(
        "Unbracketed root: market price {market_price} not attainable for σ in [{lower}, {upper}]"
    )]
    UnbracketedRoot {
        /// Observed price being inverted
        market_price: f64,
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Option kind not handled by the solver.
    #[error("Unsupported option kind: implied volatility for {kind} options is not implemented")]
    UnsupportedOptionKind {
        /// Rejected kind
        kind: &'static str,
    },

    /// Market price not positive and finite.
    #[error("Invalid market price: {market_price}")]
    InvalidMarketPrice {
        /// Rejected price
        market_price: f64,
    },

    /// Search interval malformed.
    #[error("Invalid volatility bounds: [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower volatility bound
        lower: f64,
        /// Upper volatility bound
        upper: f64,
    },

    /// Contract parameters rejected.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Closed-form pricing failure.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Root finder failure.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl From<ImpliedVolError> for PricingError {
    fn from(err: ImpliedVolError) -> Self {
        match err {
            ImpliedVolError::UnbracketedRoot { .. } => PricingError::UnbracketedRoot(err.to_string()),
            ImpliedVolError::UnsupportedOptionKind { kind } => {
                PricingError::UnsupportedOptionKind(format!("implied volatility for {}", kind))
            }
            ImpliedVolError::InvalidMarketPrice { market_price } => {
                PricingError::InvalidParameter(format!("market_price = {}", market_price))
            }
            ImpliedVolError::InvalidBounds { .. } => PricingError::InvalidParameter(err.to_string()),
            ImpliedVolError::Instrument(inner) => inner.into(),
            ImpliedVolError::Analytical(inner) => inner.into(),
            ImpliedVolError::Solver(inner) => inner.into(),
        }
    }
}
