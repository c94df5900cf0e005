//! Recombining binomial lattice (Cox-Ross-Rubinstein) pricing.
//!
//! - [`BinomialTree`]: Backward induction with optional early exercise
//! - [`LatticeConfig`]: Step count
//! - [`LatticeError`]: Lattice-specific failures

pub mod binomial;
pub mod config;
pub mod error;

pub use binomial::{price, BinomialTree};
pub use config::LatticeConfig;
pub use error::LatticeError;
