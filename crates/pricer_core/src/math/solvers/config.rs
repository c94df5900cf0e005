//! Solver configuration types.

use num_traits::Float;

use crate::types::SolverError;

/// Stopping rules shared by the root-finding solvers.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let tight = SolverConfig::new(1e-12, 200).unwrap();
/// assert_eq!(tight.max_iterations, 200);
///
/// assert!(SolverConfig::new(0.0_f64, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Absolute tolerance on both the residual `|f(x)|` and the bracket half-width.
    pub tolerance: T,

    /// Iteration cap; exceeding it yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if `tolerance` is not a positive finite
    /// number or `max_iterations` is zero.
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }
}
