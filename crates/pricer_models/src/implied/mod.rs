//! Implied volatility from an observed call price.
//!
//! - [`ImpliedVolatilitySolver`]: Brent inversion of the Black-Scholes call price
//! - [`ImpliedVolConfig`]: Search interval and root finder settings
//! - [`ImpliedVolError`]: Solver failures

pub mod error;
pub mod solver;

pub use error::ImpliedVolError;
pub use solver::{implied_volatility, ImpliedVolConfig, ImpliedVolatilitySolver};
