//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes closed-form call/put prices and vega
//! - Standard normal CDF/PDF
//! - Intrinsic/extrinsic value helpers and market-quote evaluation
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports `f64` and `f32`
//! - **Explicit failure**: σ√T = 0 is an error, never NaN or ±∞

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod valuation;

pub use black_scholes::{AnalyticModel, BlackScholes};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use valuation::{evaluate, extrinsic_value, intrinsic_value, EvaluationReport, Verdict};
