//! Integration tests for module exports.
//!
//! Verifies that public modules and types are reachable via absolute paths.

#[test]
fn test_solver_module_exports() {
    use pricer_core::math::solvers::{BrentSolver, RootResult, SolverConfig};

    let solver = BrentSolver::new(SolverConfig::<f64>::default());
    let result: RootResult<f64> = solver.solve(|x| x - 0.25, 0.0, 1.0).unwrap();
    assert!((result.root - 0.25).abs() < 1e-10);
}

#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::{PricingError, SolverError};
    use pricer_core::types::{PricingError as ReexportedPricingError, SolverError as Reexported};

    let solver_err: Reexported = SolverError::NoBracket { a: 0.0, b: 1.0 };
    let pricing_err: ReexportedPricingError = solver_err.into();
    assert!(matches!(pricing_err, PricingError::UnbracketedRoot(_)));
}
