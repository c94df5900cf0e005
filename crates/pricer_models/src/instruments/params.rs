//! Option contract parameters.
//!
//! [`OptionSpec`] bundles the market and contract inputs every model needs
//! and validates them once at construction, so the pricing routines can
//! assume a well-formed contract.

use num_traits::Float;

use super::error::InstrumentError;
use super::option_type::OptionType;

/// Validated single-option pricing inputs.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`, `expiry > 0`
/// - `volatility >= 0` and finite
/// - `rate` finite (negative rates are allowed)
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(41.45_f64, 30.0, 1.4, 0.0486, 0.1571, OptionType::Call).unwrap();
/// assert_eq!(spec.strike(), 30.0);
///
/// assert!(OptionSpec::new(41.45_f64, 30.0, 0.0, 0.0486, 0.1571, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> OptionSpec<T> {
    /// Creates validated option parameters.
    ///
    /// # Arguments
    /// * `spot` - Underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `rate` - Annual continuously compounded risk-free rate
    /// * `volatility` - Annual volatility (must be non-negative)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `InstrumentError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        ensure_positive("spot", spot)?;
        ensure_positive("strike", strike)?;
        ensure_positive("expiry", expiry)?;
        if !rate.is_finite() {
            return Err(invalid("rate", rate));
        }
        ensure_volatility(volatility)?;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns a copy with a different volatility.
    ///
    /// # Errors
    /// `InstrumentError::InvalidParameter` if `volatility` is negative or not finite.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, InstrumentError> {
        ensure_volatility(volatility)?;
        Ok(Self {
            volatility,
            ..*self
        })
    }

    /// Returns a copy with a different option kind.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Underlying price (S).
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Volatility (σ).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Payoff if exercised immediately at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.option_type.payoff(self.spot, self.strike)
    }
}

fn ensure_positive<T: Float>(name: &'static str, value: T) -> Result<(), InstrumentError> {
    if value > T::zero() && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

fn ensure_volatility<T: Float>(volatility: T) -> Result<(), InstrumentError> {
    if volatility >= T::zero() && volatility.is_finite() {
        Ok(())
    } else {
        Err(invalid("volatility", volatility))
    }
}

fn invalid<T: Float>(name: &'static str, value: T) -> InstrumentError {
    InstrumentError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}
