//! Core error types.
//!
//! # Re-exports
//!
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;

pub use error::{PricingError, SolverError};
