//! Cox-Ross-Rubinstein binomial tree.
//!
//! The tree has `N + 1` terminal nodes. Node `i` at layer `j` carries the
//! spot `S · u^(j-i) · d^i`, so index 0 is always the top of the layer.
//! Values live in a single buffer of length `N + 1`, overwritten in place
//! while rolling back from expiry, and node spots are produced by repeated
//! multiplication with `d / u` rather than powers per node.
//!
//! ## Parameters
//!
//! ```text
//! Δt = T / N
//! u  = exp(σ√Δt),  d = 1/u
//! p  = (exp(rΔt) - d) / (u - d)
//! V(j, i) = exp(-rΔt) · [p · V(j+1, i) + (1 - p) · V(j+1, i+1)]
//! ```
//!
//! American exercise replaces each rolled-back value with
//! `max(V(j, i), payoff(S(j, i)))`.

use num_traits::Float;
use pricer_core::types::PricingError;
use tracing::{debug, trace};

use super::config::LatticeConfig;
use super::error::LatticeError;
use crate::instruments::{ExerciseStyle, OptionPricer, OptionSpec};

/// Binomial lattice pricer with a fixed step count and exercise style.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionSpec, OptionType};
/// use pricer_models::lattice::{BinomialTree, LatticeConfig};
///
/// let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// let tree = BinomialTree::new(LatticeConfig::new(200).unwrap(), ExerciseStyle::American);
///
/// let american = tree.price(&spec).unwrap();
/// let european = tree.with_exercise(ExerciseStyle::European).price(&spec).unwrap();
/// assert!(american >= european);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    config: LatticeConfig,
    exercise: ExerciseStyle,
}

impl BinomialTree {
    /// Creates a tree pricer.
    pub fn new(config: LatticeConfig, exercise: ExerciseStyle) -> Self {
        Self { config, exercise }
    }

    /// American-exercise tree with `steps` time steps.
    ///
    /// # Errors
    /// `LatticeError::InvalidParameter` when `steps == 0`.
    pub fn american(steps: usize) -> Result<Self, LatticeError> {
        Ok(Self::new(LatticeConfig::new(steps)?, ExerciseStyle::American))
    }

    /// European-exercise tree with `steps` time steps.
    ///
    /// # Errors
    /// `LatticeError::InvalidParameter` when `steps == 0`.
    pub fn european(steps: usize) -> Result<Self, LatticeError> {
        Ok(Self::new(LatticeConfig::new(steps)?, ExerciseStyle::European))
    }

    /// Same step count with a different exercise style.
    pub fn with_exercise(&self, exercise: ExerciseStyle) -> Self {
        Self {
            config: self.config,
            exercise,
        }
    }

    /// Step configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Value of `spec` by backward induction.
    ///
    /// # Errors
    /// - `LatticeError::DegenerateTree` when σ = 0
    /// - `LatticeError::InvalidProbability` when `p` leaves [0, 1]
    ///   (large `rΔt` relative to `σ√Δt`)
    /// - `LatticeError::NumericalInstability` when the result is not finite
    pub fn price<T: Float>(&self, spec: &OptionSpec<T>) -> Result<T, LatticeError> {
        let steps = self.config.steps();
        let n = T::from(steps).unwrap();
        let dt = spec.expiry() / n;
        let sigma_sqrt_dt = spec.volatility() * dt.sqrt();

        let u = sigma_sqrt_dt.exp();
        let d = (-sigma_sqrt_dt).exp();
        if u - d <= T::zero() {
            return Err(LatticeError::DegenerateTree {
                volatility: to_f64(spec.volatility()),
            });
        }

        let p = ((spec.rate() * dt).exp() - d) / (u - d);
        if !p.is_finite() || p < T::zero() || p > T::one() {
            return Err(LatticeError::InvalidProbability {
                probability: to_f64(p),
            });
        }

        let discount = (-spec.rate() * dt).exp();
        let disc_up = discount * p;
        let disc_down = discount * (T::one() - p);
        let ratio = d / u;

        debug!(
            steps,
            exercise = %self.exercise,
            option_type = %spec.option_type(),
            u = to_f64(u),
            p = to_f64(p),
            "binomial backward induction"
        );

        let option_type = spec.option_type();
        let strike = spec.strike();

        // Terminal layer, top node first.
        let mut top = spec.spot() * (n * sigma_sqrt_dt).exp();
        let mut spot = top;
        let mut values = Vec::with_capacity(steps + 1);
        for _ in 0..=steps {
            values.push(option_type.payoff(spot, strike));
            spot = spot * ratio;
        }

        let early_exercise = self.exercise.allows_early_exercise();
        for layer in (0..steps).rev() {
            top = top * d;
            if early_exercise {
                let mut spot = top;
                for i in 0..=layer {
                    let hold = disc_up * values[i] + disc_down * values[i + 1];
                    values[i] = hold.max(option_type.payoff(spot, strike));
                    spot = spot * ratio;
                }
            } else {
                for i in 0..=layer {
                    values[i] = disc_up * values[i] + disc_down * values[i + 1];
                }
            }
        }

        let value = values[0];
        if !value.is_finite() {
            return Err(LatticeError::NumericalInstability {
                message: format!("non-finite lattice value with {} steps", steps),
            });
        }
        trace!(value = to_f64(value), "binomial price");
        Ok(value)
    }
}

impl<T: Float> OptionPricer<T> for BinomialTree {
    fn price_option(&self, spec: &OptionSpec<T>) -> Result<T, PricingError> {
        Ok(self.price(spec)?)
    }

    fn name(&self) -> &'static str {
        match self.exercise {
            ExerciseStyle::American => "binomial-american",
            ExerciseStyle::European => "binomial-european",
        }
    }
}

/// Prices `spec` on a `steps`-step lattice.
///
/// Coarse trees are refused rather than priced: when `rΔt` exceeds `σ√Δt`
/// the up-probability exceeds one and the call fails with
/// `LatticeError::InvalidProbability`. Increasing `steps` shrinks `Δt`
/// until `p` is back in [0, 1].
///
/// # Errors
/// - `LatticeError::InvalidParameter` when `steps == 0`
/// - `LatticeError::InvalidProbability` when `rΔt > σ√Δt`
/// - otherwise as [`BinomialTree::price`]
pub fn price<T: Float>(
    spec: &OptionSpec<T>,
    steps: usize,
    exercise: ExerciseStyle,
) -> Result<T, LatticeError> {
    BinomialTree::new(LatticeConfig::new(steps)?, exercise).price(spec)
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use crate::instruments::OptionType;
    use approx::assert_relative_eq;

    fn atm(option_type: OptionType) -> OptionSpec<f64> {
        OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap()
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = price(&atm(OptionType::Call), 0, ExerciseStyle::American);
        assert!(matches!(
            result,
            Err(LatticeError::InvalidParameter { name: "steps", .. })
        ));
    }

    #[test]
    fn test_zero_volatility_degenerate() {
        let spec = atm(OptionType::Call).with_volatility(0.0).unwrap();
        let result = price(&spec, 10, ExerciseStyle::American);
        assert_eq!(result, Err(LatticeError::DegenerateTree { volatility: 0.0 }));
    }

    #[test]
    fn test_probability_above_one_rejected() {
        // exp(rΔt) > u when the rate dwarfs σ√Δt
        let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.5, 0.01, OptionType::Call).unwrap();
        let result = price(&spec, 1, ExerciseStyle::European);
        match result {
            Err(LatticeError::InvalidProbability { probability }) => assert!(probability > 1.0),
            other => panic!("expected InvalidProbability, got {:?}", other),
        }
    }

    #[test]
    fn test_coarse_tree_refused_until_refined() {
        // σ/r = 0.8 so a single step of Δt = 1 has rΔt > σ√Δt
        let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.04, OptionType::Call).unwrap();
        match price(&spec, 1, ExerciseStyle::American) {
            Err(LatticeError::InvalidProbability { probability }) => assert!(probability > 1.0),
            other => panic!("expected InvalidProbability, got {:?}", other),
        }

        let refined = price(&spec, 50, ExerciseStyle::American).unwrap();
        assert!(refined.is_finite());
        assert!(refined > 0.0);
    }

    #[test]
    fn test_single_step_call() {
        let value = price(&atm(OptionType::Call), 1, ExerciseStyle::European).unwrap();
        assert_relative_eq!(value, 12.162284964623943, epsilon = 1e-12);
    }

    #[test]
    fn test_single_step_put_same_both_styles() {
        let spec = atm(OptionType::Put);
        let american = price(&spec, 1, ExerciseStyle::American).unwrap();
        let european = price(&spec, 1, ExerciseStyle::European).unwrap();
        assert_relative_eq!(american, 7.285227414695341, epsilon = 1e-12);
        assert_relative_eq!(european, american, epsilon = 1e-12);
    }

    #[test]
    fn test_american_put_reference() {
        let spec = atm(OptionType::Put);
        let american = price(&spec, 500, ExerciseStyle::American).unwrap();
        let european = price(&spec, 500, ExerciseStyle::European).unwrap();
        assert_relative_eq!(american, 6.088810110702495, epsilon = 1e-9);
        assert_relative_eq!(european, 5.569527586515597, epsilon = 1e-9);
    }

    #[test]
    fn test_american_call_has_no_premium() {
        let spec = atm(OptionType::Call);
        let american = price(&spec, 200, ExerciseStyle::American).unwrap();
        let european = price(&spec, 200, ExerciseStyle::European).unwrap();
        assert_relative_eq!(american, european, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_american_put_exercised() {
        let spec = OptionSpec::new(80.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        let value = price(&spec, 500, ExerciseStyle::American).unwrap();
        assert_relative_eq!(value, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_european_converges_to_black_scholes() {
        let spec = atm(OptionType::Call);
        let lattice = price(&spec, 500, ExerciseStyle::European).unwrap();
        let analytic = BlackScholes::from_spec(&spec)
            .unwrap()
            .price(100.0, 1.0, OptionType::Call)
            .unwrap();
        assert!((lattice - analytic).abs() / analytic < 0.01);
    }

    #[test]
    fn test_convergence_improves_with_steps() {
        let spec = atm(OptionType::Call);
        let analytic = 10.450583572185565;
        let coarse = price(&spec, 50, ExerciseStyle::European).unwrap();
        let fine = price(&spec, 500, ExerciseStyle::European).unwrap();
        assert!((fine - analytic).abs() < (coarse - analytic).abs());
    }

    #[test]
    fn test_negative_rate_allowed() {
        let spec = OptionSpec::new(100.0, 100.0, 1.0, -0.01, 0.2, OptionType::Put).unwrap();
        let value = price(&spec, 100, ExerciseStyle::American).unwrap();
        assert!(value > 0.0);
    }

    #[test]
    fn test_option_pricer_trait() {
        let tree = BinomialTree::american(100).unwrap();
        let pricer: &dyn OptionPricer<f64> = &tree;
        assert_eq!(pricer.name(), "binomial-american");
        let value = pricer.price_option(&atm(OptionType::Put)).unwrap();
        assert!(value > 0.0);
    }

    #[test]
    fn test_trait_maps_error() {
        let spec = atm(OptionType::Call).with_volatility(0.0).unwrap();
        let tree = BinomialTree::european(10).unwrap();
        let result = OptionPricer::<f64>::price_option(&tree, &spec);
        assert!(matches!(result, Err(PricingError::DegenerateInput(_))));
    }

    #[test]
    fn test_with_exercise() {
        let tree = BinomialTree::american(50).unwrap();
        let european = tree.with_exercise(ExerciseStyle::European);
        assert_eq!(european.exercise(), ExerciseStyle::European);
        assert_eq!(european.config().steps(), 50);
    }
}
