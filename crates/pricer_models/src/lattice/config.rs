//! Lattice discretisation settings.

use super::error::LatticeError;

/// Number of time steps in the binomial tree.
///
/// More steps move the lattice price closer to the continuous-time value
/// at O(N²) cost.
///
/// # Examples
/// ```
/// use pricer_models::lattice::LatticeConfig;
///
/// let config = LatticeConfig::new(200).unwrap();
/// assert_eq!(config.steps(), 200);
/// assert!(LatticeConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeConfig {
    steps: usize,
}

impl LatticeConfig {
    /// Creates a configuration with `steps >= 1`.
    ///
    /// # Errors
    /// `LatticeError::InvalidParameter` when `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 {
            return Err(LatticeError::InvalidParameter {
                name: "steps",
                value: 0.0,
            });
        }
        Ok(Self { steps })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}
