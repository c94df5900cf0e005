//! Implied volatility integration tests.
//!
//! Verifies the solver inverts the closed-form call price and reports
//! unreachable prices instead of clamping to a bound.

use approx::assert_relative_eq;
use pricer_models::analytical::black_scholes::{self, call_price};
use pricer_models::implied::{implied_volatility, ImpliedVolError, ImpliedVolatilitySolver};
use pricer_models::instruments::{OptionSpec, OptionType};
use proptest::prelude::*;

#[test]
fn test_round_trip_boundary_scenario() {
    let spec = OptionSpec::new(41.45, 30.0, 1.4, 0.0486, 0.1571, OptionType::Call).unwrap();
    let market_price = black_scholes::price(&spec).unwrap();

    let sigma = ImpliedVolatilitySolver::default()
        .solve_for(&spec, market_price)
        .unwrap();
    assert_relative_eq!(sigma, 0.1571, epsilon = 1e-6);
}

#[test]
fn test_market_price_above_spot_is_unbracketed() {
    let result = implied_volatility(41.45, 30.0, 1.4, 0.0486, OptionType::Call, 50.0);
    assert!(matches!(result, Err(ImpliedVolError::UnbracketedRoot { .. })));
}

#[test]
fn test_put_rejected_before_solving() {
    let result = implied_volatility(41.45, 30.0, 1.4, 0.0486, OptionType::Put, 1.0);
    assert!(matches!(
        result,
        Err(ImpliedVolError::UnsupportedOptionKind { kind: "put" })
    ));
}

proptest! {
    #[test]
    fn prop_round_trip(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        expiry in 0.25_f64..3.0,
        rate in -0.01_f64..0.08,
        vol in 0.05_f64..1.5,
    ) {
        let price = call_price(spot, strike, expiry, rate, vol).unwrap();
        // Skip prices with negligible vega where σ is poorly determined.
        let vega = black_scholes::BlackScholes::new(spot, rate, vol)
            .unwrap()
            .vega(strike, expiry)
            .unwrap();
        prop_assume!(vega > 1e-2);

        let sigma = implied_volatility(spot, strike, expiry, rate, OptionType::Call, price).unwrap();
        prop_assert!((sigma - vol).abs() < 1e-6, "vol={}, recovered={}", vol, sigma);
    }

    #[test]
    fn prop_call_price_increasing_in_volatility(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        expiry in 0.1_f64..3.0,
        rate in 0.0_f64..0.08,
        vol in 0.05_f64..1.0,
    ) {
        let low = call_price(spot, strike, expiry, rate, vol).unwrap();
        let high = call_price(spot, strike, expiry, rate, vol + 0.05).unwrap();
        prop_assert!(high > low);
    }
}
