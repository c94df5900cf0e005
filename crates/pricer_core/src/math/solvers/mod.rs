//! Root-finding solvers for numerical computation.
//!
//! Financial inversions such as implied volatility reduce to finding the
//! zero of a monotone scalar function on a known interval. This module
//! provides a derivative-free bracketing solver for that task.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Bisection safeguarded by secant and inverse quadratic steps
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x³ - x - 2 = 0 on [1, 2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - x - 2.0;
//!
//! let root = solver.find_root(f, 1.0, 2.0).unwrap();
//! assert!(f(root).abs() < 1e-10);
//! ```

mod brent;
mod config;

pub use brent::{BrentSolver, RootResult};
pub use config::SolverConfig;
