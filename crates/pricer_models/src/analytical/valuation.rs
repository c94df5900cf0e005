//! Intrinsic/extrinsic decomposition and market-price evaluation.
//!
//! These helpers compare an observed option premium with the closed-form
//! theoretical value and classify the quote.

use std::fmt;

use num_traits::Float;

use super::black_scholes;
use super::error::AnalyticalError;
use crate::instruments::OptionSpec;

/// Payoff if exercised now: `max(S-K, 0)` for calls, `max(K-S, 0)` for puts.
#[inline]
pub fn intrinsic_value<T: Float>(spec: &OptionSpec<T>) -> T {
    spec.intrinsic_value()
}

/// Time value embedded in a market premium.
///
/// Not clamped: a negative result means the quote trades below intrinsic
/// value.
#[inline]
pub fn extrinsic_value<T: Float>(market_price: T, intrinsic_value: T) -> T {
    market_price - intrinsic_value
}

/// Classification of a market quote against the theoretical price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Theoretical price above market price
    Undervalued,
    /// Theoretical price below market price
    Overvalued,
    /// Theoretical price equal to market price
    FairlyValued,
}

impl Verdict {
    /// Classifies a theoretical/market ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.0 {
            Verdict::Undervalued
        } else if ratio < 1.0 {
            Verdict::Overvalued
        } else {
            Verdict::FairlyValued
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Undervalued => write!(f, "Undervalued"),
            Verdict::Overvalued => write!(f, "Overvalued"),
            Verdict::FairlyValued => write!(f, "Fairly Valued"),
        }
    }
}

/// Market quote evaluated against the Black-Scholes price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationReport {
    /// Immediate-exercise payoff
    pub intrinsic_value: f64,
    /// Market premium above intrinsic value (may be negative)
    pub extrinsic_value: f64,
    /// Black-Scholes price
    pub theoretical_price: f64,
    /// Observed premium
    pub market_price: f64,
    /// theoretical_price / market_price
    pub value_ratio: f64,
    /// Classification of `value_ratio`
    pub verdict: Verdict,
}

/// Evaluates an observed premium for the option described by `spec`.
///
/// # Errors
/// - `AnalyticalError::InvalidParameter` if `market_price` is not positive
/// - any error from [`black_scholes::price`]
///
/// # Examples
/// ```
/// use pricer_models::analytical::{evaluate, Verdict};
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(41.45, 30.0, 1.4, 0.04866, 0.1591, OptionType::Call).unwrap();
/// let report = evaluate(&spec, 12.0).unwrap();
/// assert_eq!(report.verdict, Verdict::Undervalued);
/// ```
pub fn evaluate(
    spec: &OptionSpec<f64>,
    market_price: f64,
) -> Result<EvaluationReport, AnalyticalError> {
    if !(market_price > 0.0) || !market_price.is_finite() {
        return Err(AnalyticalError::InvalidParameter {
            name: "market_price",
            value: market_price,
        });
    }

    let intrinsic = intrinsic_value(spec);
    let theoretical_price = black_scholes::price(spec)?;
    let value_ratio = theoretical_price / market_price;

    Ok(EvaluationReport {
        intrinsic_value: intrinsic,
        extrinsic_value: extrinsic_value(market_price, intrinsic),
        theoretical_price,
        market_price,
        value_ratio,
        verdict: Verdict::from_ratio(value_ratio),
    })
}
