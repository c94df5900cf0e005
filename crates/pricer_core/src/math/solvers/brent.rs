//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T: Float> {
    /// Abscissa where the search stopped
    pub root: T,
    /// Number of iterations consumed
    pub iterations: usize,
    /// Function value at `root`
    pub residual: T,
}

/// Brent's method root finder.
///
/// Keeps a bracket `[b, c]` with a sign change at all times and, on each
/// iteration, tries inverse quadratic interpolation (or a secant step when
/// only two distinct points are known). The interpolated step is accepted
/// only if it lands well inside the bracket and shrinks faster than the
/// step before last; otherwise the solver bisects. Convergence is
/// therefore never slower than bisection for a continuous function.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
/// let root = solver.find_root(|x: f64| x.cos() - x, 0.0, 1.0).unwrap();
/// assert!((root.cos() - root).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `f(a)` and `f(b)` have the same sign
    /// * `SolverError::NumericalInstability` - `f` is not finite at an endpoint
    /// * `SolverError::MaxIterationsExceeded` - iteration cap reached
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.solve(f, a, b).map(|result| result.root)
    }

    /// Same as [`find_root`](Self::find_root) but also reports the iteration
    /// count and final residual.
    pub fn solve<F>(&self, f: F, a: T, b: T) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let tol = self.config.tolerance;

        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if !fa.is_finite() || !fb.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "non-finite function value at bracket endpoint: f({}) = {}, f({}) = {}",
                to_f64(a),
                to_f64(fa),
                to_f64(b),
                to_f64(fb)
            )));
        }

        if fa == zero {
            return Ok(RootResult {
                root: a,
                iterations: 0,
                residual: fa,
            });
        }
        if fb == zero {
            return Ok(RootResult {
                root: b,
                iterations: 0,
                residual: fb,
            });
        }
        if fa.signum() == fb.signum() {
            return Err(SolverError::NoBracket {
                a: to_f64(a),
                b: to_f64(b),
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for iteration in 1..=self.config.max_iterations {
            // Root must lie between b and c.
            if fb.signum() == fc.signum() {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // b is always the best estimate so far.
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tol;
            let xm = half * (c - b);

            if xm.abs() <= tol1 || fb.abs() < tol {
                return Ok(RootResult {
                    root: b,
                    iterations: iteration,
                    residual: fb,
                });
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // secant
                    (two * xm * s, T::one() - s)
                } else {
                    // inverse quadratic interpolation
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * xm * q * (q - r) - (b - a) * (r - T::one())),
                        (q - T::one()) * (r - T::one()) * (s - T::one()),
                    )
                };
                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * xm * q - (tol1 * q).abs();
                let min2 = (e * q).abs();
                if two * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol1 {
                b + d
            } else if xm > zero {
                b + tol1
            } else {
                b - tol1
            };
            fb = f(b);

            if !fb.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "non-finite function value at x = {}",
                    to_f64(b)
                )));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
