//! Option contract definitions.
//!
//! - [`OptionType`]: Closed call/put choice with payoff evaluation
//! - [`ExerciseStyle`]: European or American exercise
//! - [`OptionSpec`]: Validated spot/strike/expiry/rate/volatility bundle
//! - [`OptionPricer`]: Trait implemented by every pricing model
//! - [`InstrumentError`]: Construction and parsing failures

pub mod error;
pub mod exercise;
pub mod option_type;
pub mod params;
pub mod traits;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use option_type::OptionType;
pub use params::OptionSpec;
pub use traits::OptionPricer;
