//! Pricing seam shared by the lattice and closed-form models.

use num_traits::Float;
use pricer_core::types::PricingError;

use super::params::OptionSpec;

/// A model that values a single option contract.
///
/// Implementors keep their own numerical settings (step count, exercise
/// style) and expose a uniform entry point so callers can swap models or
/// compare them on identical inputs.
pub trait OptionPricer<T: Float> {
    /// Fair value of `spec` at time zero.
    fn price_option(&self, spec: &OptionSpec<T>) -> Result<T, PricingError>;

    /// Short model name for logs and reports.
    fn name(&self) -> &'static str;
}
