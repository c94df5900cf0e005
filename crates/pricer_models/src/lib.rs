//! # Pricer Models (L2: Business Logic)
//!
//! Single-option valuation under two models plus implied volatility.
//!
//! This crate provides:
//! - Option contract definitions (call/put, exercise style, validated parameters)
//! - Cox-Ross-Rubinstein binomial lattice with American early exercise
//! - Black-Scholes closed-form pricing for European options
//! - Implied volatility by Brent inversion of the closed-form call price
//! - Intrinsic/extrinsic value decomposition and a market valuation report
//!
//! ## Design Principles
//!
//! - **Generic over `Float`** so the same formulas serve `f64` and `f32`
//! - **Validated inputs**: `OptionSpec` rejects out-of-domain parameters once,
//!   at construction
//! - **Per-module errors** converting into `pricer_core::types::PricingError`
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::black_scholes;
//! use pricer_models::implied::implied_volatility;
//! use pricer_models::instruments::{ExerciseStyle, OptionSpec, OptionType};
//! use pricer_models::lattice;
//!
//! let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//!
//! let analytic = black_scholes::price(&spec).unwrap();
//! let tree = lattice::price(&spec, 500, ExerciseStyle::European).unwrap();
//! assert!((tree - analytic).abs() / analytic < 0.01);
//!
//! let sigma = implied_volatility(100.0, 100.0, 1.0, 0.05, OptionType::Call, analytic).unwrap();
//! assert!((sigma - 0.2).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied;
pub mod instruments;
pub mod lattice;
