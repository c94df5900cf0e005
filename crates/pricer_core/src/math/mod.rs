//! Numerical methods shared by the pricing models.
//!
//! - `solvers`: Bracketed root finding (Brent) with configurable tolerance

pub mod solvers;
