//! Helper functions for integration tests

use thermal_decay::physics::Parameters;
use thermal_decay::solver::{CoolingCurve, Sample};

/// Parameters(90, 20, 0.05, 60, 4): t = 0, 20, 40, 60
pub fn concrete_parameters() -> Parameters {
    Parameters::new(90.0, 20.0, 0.05, 60.0, 4).unwrap()
}

/// Assert that samples match a curve pairwise, within tolerance
pub fn assert_curves_close(
    actual: &[Sample],
    expected: &CoolingCurve,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{}: Length mismatch", message);

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let dt = (a.time - e.time).abs();
        let dy = (a.temperature - e.temperature).abs();
        assert!(
            dt <= tolerance && dy <= tolerance,
            "{}: Sample {} differs by ({}, {}) (tolerance {})",
            message, i, dt, dy, tolerance
        );
    }
}

/// Assert that every sample moves toward T_env and never crosses it
pub fn assert_monotonic_toward_ambient(curve: &CoolingCurve) {
    let ambient = curve.parameters().ambient_temperature();
    let initial = curve.parameters().initial_temperature();
    let sign = (initial - ambient).signum();

    for window in curve.samples().windows(2) {
        let (before, after) = (window[0], window[1]);
        let gap_before = (before.temperature - ambient) * sign;
        let gap_after = (after.temperature - ambient) * sign;

        assert!(gap_after >= 0.0, "overshoot at t = {}", after.time);
        assert!(
            gap_after <= gap_before,
            "moved away from ambient between t = {} and t = {}",
            before.time, after.time
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
