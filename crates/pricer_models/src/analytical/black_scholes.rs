//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The formula is undefined when σ√T = 0; such inputs are rejected with
//! [`AnalyticalError::DegenerateInput`] instead of yielding NaN or ±∞.

use num_traits::Float;
use pricer_core::types::PricingError;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionPricer, OptionSpec, OptionType};

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); contract terms
/// (strike, expiry) are passed per call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0).unwrap();
/// let put = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// Zero volatility is accepted here and rejected when pricing, where
    /// the offending expiry is also known.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameter` if `spot <= 0`, `volatility < 0`,
    /// or any input is not finite.
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !(spot > T::zero()) || !spot.is_finite() {
            return Err(invalid("spot", spot));
        }
        if !rate.is_finite() {
            return Err(invalid("rate", rate));
        }
        if !(volatility >= T::zero()) || !volatility.is_finite() {
            return Err(invalid("volatility", volatility));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from the market fields of an option spec.
    pub fn from_spec(spec: &OptionSpec<T>) -> Result<Self, AnalyticalError> {
        Self::new(spec.spot(), spec.rate(), spec.volatility())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Total standard deviation σ√T, validated to be strictly positive.
    fn total_vol(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        if !(strike > T::zero()) || !strike.is_finite() {
            return Err(invalid("strike", strike));
        }
        if !(expiry >= T::zero()) || !expiry.is_finite() {
            return Err(invalid("expiry", expiry));
        }

        let total = self.volatility * expiry.sqrt();
        if total <= T::zero() {
            return Err(AnalyticalError::DegenerateInput {
                volatility: to_f64(self.volatility),
                expiry: to_f64(expiry),
            });
        }
        Ok(total)
    }

    fn d1_d2(&self, strike: T, expiry: T) -> Result<(T, T), AnalyticalError> {
        let total = self.total_vol(strike, expiry)?;
        let half = T::from(0.5).unwrap();

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / total;

        Ok((d1, d1 - total))
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub fn d1(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.d1_d2(strike, expiry).map(|(d1, _)| d1)
    }

    /// d₂ = d₁ - σ√T
    pub fn d2(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.d1_d2(strike, expiry).map(|(_, d2)| d2)
    }

    /// European call price C = S·N(d₁) - K·e^(-rT)·N(d₂).
    ///
    /// # Errors
    /// `AnalyticalError::DegenerateInput` if σ = 0 or T = 0.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(strike, expiry, OptionType::Call)
    }

    /// European put price P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
    ///
    /// # Errors
    /// `AnalyticalError::DegenerateInput` if σ = 0 or T = 0.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(strike, expiry, OptionType::Put)
    }

    /// European price for either option kind.
    pub fn price(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<T, AnalyticalError> {
        let (d1, d2) = self.d1_d2(strike, expiry)?;
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let value = match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        };

        if !value.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "non-finite {} price for K = {}, T = {}",
                    option_type,
                    to_f64(strike),
                    to_f64(expiry)
                ),
            });
        }

        // Cancellation in the difference can leave a tiny negative residue.
        Ok(value.max(T::zero()))
    }

    /// Vega ∂V/∂σ = S·√T·φ(d₁), identical for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        Ok(self.spot * expiry.sqrt() * norm_pdf(d1))
    }
}

/// Prices the European option described by `spec`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes;
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let price = black_scholes::price(&spec).unwrap();
/// assert!((price - 10.4506).abs() < 1e-4);
/// ```
pub fn price<T: Float>(spec: &OptionSpec<T>) -> Result<T, AnalyticalError> {
    BlackScholes::from_spec(spec)?.price(spec.strike(), spec.expiry(), spec.option_type())
}

/// European call price from raw inputs.
pub fn call_price<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
) -> Result<T, AnalyticalError> {
    BlackScholes::new(spot, rate, volatility)?.price_call(strike, expiry)
}

/// Closed-form European pricer.
///
/// Stateless adaptor exposing [`price`] through [`OptionPricer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticModel;

impl<T: Float> OptionPricer<T> for AnalyticModel {
    fn price_option(&self, spec: &OptionSpec<T>) -> Result<T, PricingError> {
        price(spec).map_err(PricingError::from)
    }

    fn name(&self) -> &'static str {
        "black-scholes"
    }
}

fn invalid<T: Float>(name: &'static str, value: T) -> AnalyticalError {
    AnalyticalError::InvalidParameter {
        name,
        value: to_f64(value),
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN] {
            match BlackScholes::new(spot, 0.05, 0.2) {
                Err(AnalyticalError::InvalidParameter { name, .. }) => assert_eq!(name, "spot"),
                other => panic!("Expected InvalidParameter, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_new_negative_volatility() {
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, -0.2),
            Err(AnalyticalError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    #[test]
    fn test_d1_d2_atm() {
        // ATM with r=0: d1 = σ√T / 2, d2 = -σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0).unwrap(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_call_price_reference_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(
            bs.price_call(100.0, 1.0).unwrap(),
            10.450_583_572_185_565,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_put_price_reference_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(
            bs.price_put(100.0, 1.0).unwrap(),
            5.573_526_022_256_971,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(41.45_f64, 0.0486, 0.1571).unwrap();
        for strike in [20.0, 30.0, 41.45, 55.0] {
            let call = bs.price_call(strike, 1.4).unwrap();
            let put = bs.price_put(strike, 1.4).unwrap();
            let forward_gap = 41.45 - strike * (-0.0486_f64 * 1.4).exp();
            assert_relative_eq!(call - put, forward_gap, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_volatility_is_degenerate() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap();
        match bs.price_call(100.0, 1.0) {
            Err(AnalyticalError::DegenerateInput { volatility, expiry }) => {
                assert_eq!(volatility, 0.0);
                assert_eq!(expiry, 1.0);
            }
            other => panic!("Expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_expiry_is_degenerate() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert!(matches!(
            bs.price_put(100.0, 0.0),
            Err(AnalyticalError::DegenerateInput { .. })
        ));
        assert!(matches!(
            bs.d1(100.0, 0.0),
            Err(AnalyticalError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_negative_expiry_is_invalid() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert!(matches!(
            bs.price_call(100.0, -1.0),
            Err(AnalyticalError::InvalidParameter { name: "expiry", .. })
        ));
    }

    #[test]
    fn test_deep_otm_call_is_non_negative() {
        let bs = BlackScholes::new(1.0_f64, 0.05, 0.05).unwrap();
        let price = bs.price_call(1000.0, 0.1).unwrap();
        assert!(price >= 0.0);
        assert!(price < 1e-12);
    }

    #[test]
    fn test_deep_itm_call_near_forward_intrinsic() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        let lower_bound = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= lower_bound - 1e-10);
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let h = 1e-6;
        let up = BlackScholes::new(100.0_f64, 0.03, 0.25 + h).unwrap();
        let down = BlackScholes::new(100.0_f64, 0.03, 0.25 - h).unwrap();
        let mid = BlackScholes::new(100.0_f64, 0.03, 0.25).unwrap();
        let numeric =
            (up.price_call(90.0, 0.75).unwrap() - down.price_call(90.0, 0.75).unwrap()) / (2.0 * h);
        assert_relative_eq!(mid.vega(90.0, 0.75).unwrap(), numeric, epsilon = 1e-5);
    }

    #[test]
    fn test_price_from_spec_and_pricer_trait() {
        let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        let direct = price(&spec).unwrap();
        let via_trait = AnalyticModel.price_option(&spec).unwrap();
        assert_eq!(direct, via_trait);
        assert_eq!(OptionPricer::<f64>::name(&AnalyticModel), "black-scholes");
    }

    #[test]
    fn test_spec_with_zero_volatility_maps_to_pricing_error() {
        let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionType::Call).unwrap();
        assert!(matches!(
            AnalyticModel.price_option(&spec),
            Err(PricingError::DegenerateInput(_))
        ));
    }
}
