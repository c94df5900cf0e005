//! Implied volatility by bracketed inversion of the Black-Scholes call price.
//!
//! The call price is strictly increasing in σ (vega > 0), so the objective
//! `C(σ) - market_price` has at most one root on `[lower, upper]`. Brent's
//! method locates it when the endpoint values change sign.

use num_traits::Float;
use pricer_core::math::solvers::{BrentSolver, SolverConfig};
use pricer_core::types::SolverError;
use tracing::debug;

use super::error::ImpliedVolError;
use crate::analytical::black_scholes::call_price;
use crate::instruments::{OptionSpec, OptionType};

/// Volatility search interval and root finder settings.
///
/// Defaults to `[1e-4, 10.0]` with [`SolverConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig<T: Float> {
    lower_bound: T,
    upper_bound: T,
    solver: SolverConfig<T>,
}

impl<T: Float> Default for ImpliedVolConfig<T> {
    fn default() -> Self {
        Self {
            lower_bound: T::from(1e-4).unwrap(),
            upper_bound: T::from(10.0).unwrap(),
            solver: SolverConfig::default(),
        }
    }
}

impl<T: Float> ImpliedVolConfig<T> {
    /// Creates a configuration with a custom search interval.
    ///
    /// # Errors
    /// `ImpliedVolError::InvalidBounds` unless `0 < lower < upper` and both are finite.
    pub fn new(
        lower_bound: T,
        upper_bound: T,
        solver: SolverConfig<T>,
    ) -> Result<Self, ImpliedVolError> {
        let valid = lower_bound > T::zero() && upper_bound.is_finite() && lower_bound < upper_bound;
        if !valid {
            return Err(ImpliedVolError::InvalidBounds {
                lower: lower_bound.to_f64().unwrap_or(f64::NAN),
                upper: upper_bound.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            lower_bound,
            upper_bound,
            solver,
        })
    }

    /// Lower volatility bound.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower_bound
    }

    /// Upper volatility bound.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.upper_bound
    }

    /// Root finder settings.
    #[inline]
    pub fn solver(&self) -> &SolverConfig<T> {
        &self.solver
    }
}

/// Implied volatility solver for European calls.
///
/// # Examples
/// ```
/// use pricer_models::implied::ImpliedVolatilitySolver;
/// use pricer_models::instruments::OptionType;
///
/// let solver = ImpliedVolatilitySolver::<f64>::default();
/// let sigma = solver
///     .solve(100.0, 100.0, 1.0, 0.05, OptionType::Call, 10.450583572185565)
///     .unwrap();
/// assert!((sigma - 0.2).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolatilitySolver<T: Float> {
    config: ImpliedVolConfig<T>,
}

impl<T: Float> Default for ImpliedVolatilitySolver<T> {
    fn default() -> Self {
        Self::new(ImpliedVolConfig::default())
    }
}

impl<T: Float> ImpliedVolatilitySolver<T> {
    /// Creates a solver with the given configuration.
    pub fn new(config: ImpliedVolConfig<T>) -> Self {
        Self { config }
    }

    /// Search interval and solver settings.
    pub fn config(&self) -> &ImpliedVolConfig<T> {
        &self.config
    }

    /// Volatility at which the Black-Scholes call price equals `market_price`.
    ///
    /// # Errors
    /// - `UnsupportedOptionKind` for puts
    /// - `InvalidMarketPrice` when `market_price` is not positive and finite
    /// - `Instrument` when spot, strike or expiry is not positive
    /// - `UnbracketedRoot` when the price is unreachable on the search interval
    /// - `Solver` when the iteration budget runs out
    pub fn solve(
        &self,
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        option_type: OptionType,
        market_price: T,
    ) -> Result<T, ImpliedVolError> {
        if option_type.is_put() {
            return Err(ImpliedVolError::UnsupportedOptionKind {
                kind: option_type.as_str(),
            });
        }
        if !(market_price > T::zero()) || !market_price.is_finite() {
            return Err(ImpliedVolError::InvalidMarketPrice {
                market_price: market_price.to_f64().unwrap_or(f64::NAN),
            });
        }
        // Validates the contract fields; volatility is the unknown.
        OptionSpec::new(spot, strike, expiry, rate, self.config.lower_bound, option_type)?;

        let objective = |sigma: T| -> T {
            call_price(spot, strike, expiry, rate, sigma)
                .map(|price| price - market_price)
                .unwrap_or_else(|_| T::nan())
        };

        let lower = self.config.lower_bound;
        let upper = self.config.upper_bound;
        let solver = BrentSolver::new(self.config.solver);
        match solver.solve(objective, lower, upper) {
            Ok(result) => {
                debug!(
                    sigma = result.root.to_f64(),
                    iterations = result.iterations,
                    residual = result.residual.to_f64(),
                    "implied volatility converged"
                );
                Ok(result.root)
            }
            Err(SolverError::NoBracket { a, b }) => Err(ImpliedVolError::UnbracketedRoot {
                market_price: market_price.to_f64().unwrap_or(f64::NAN),
                lower: a,
                upper: b,
            }),
            Err(err) => Err(err.into()),
        }
    }

    /// Inverts the call price for the contract in `spec`, ignoring its volatility.
    ///
    /// # Errors
    /// As [`solve`](Self::solve).
    pub fn solve_for(&self, spec: &OptionSpec<T>, market_price: T) -> Result<T, ImpliedVolError> {
        self.solve(
            spec.spot(),
            spec.strike(),
            spec.expiry(),
            spec.rate(),
            spec.option_type(),
            market_price,
        )
    }
}

/// Implied call volatility with the default `[1e-4, 10]` interval.
///
/// # Errors
/// As [`ImpliedVolatilitySolver::solve`].
pub fn implied_volatility<T: Float>(
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    option_type: OptionType,
    market_price: T,
) -> Result<T, ImpliedVolError> {
    ImpliedVolatilitySolver::default().solve(spot, strike, expiry, rate, option_type, market_price)
}
