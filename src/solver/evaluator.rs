//! Model evaluator
//!
//! Samples a [`CoolingLaw`] at `n_points` evenly spaced times over `[0, t_max]`.
//!
//! # Sampling grid
//!
//! ```text
//! spacing = t_max / (n_points - 1)
//! t_i     = i · spacing          for i < n_points - 1
//! t_last  = t_max                (exactly, both endpoints included)
//! ```
//!
//! # Characteristics
//!
//! - **Pure**: no hidden state, no randomness; identical inputs give
//!   bit-for-bit identical outputs
//! - **Complexity**: O(n_points) time, O(1) extra memory for the lazy form
//! - **Fail fast**: parameters are validated before the first sample exists
//!
//! # Example
//!
//! ```rust
//! use thermal_decay::solver::evaluate_raw;
//!
//! let curve = evaluate_raw(90.0, 20.0, 0.05, 60.0, 4).unwrap();
//! let times: Vec<f64> = curve.iter().map(|s| s.time).collect();
//! assert_eq!(times, vec![0.0, 20.0, 40.0, 60.0]);
//!
//! assert!(evaluate_raw(90.0, 20.0, 0.0, 60.0, 4).is_err());
//! ```

use crate::error::Result;
use crate::physics::{CoolingLaw, NewtonCooling, Parameters};
use crate::solver::curve::{CoolingCurve, Sample};
use crate::solver::scenario::ScenarioTable;

// =================================================================================================
// Sampling grid
// =================================================================================================

/// Time of sample `index` on the grid described by `parameters`
///
/// The last index maps to `t_max` exactly rather than `(n-1)·spacing`,
/// which can differ from `t_max` by one rounding step.
pub fn sample_time(parameters: &Parameters, index: usize) -> f64 {
    if index + 1 >= parameters.points() {
        parameters.time_horizon()
    } else {
        index as f64 * parameters.spacing()
    }
}

// =================================================================================================
// Lazy sampling
// =================================================================================================

/// Lazy sample sequence
///
/// Produced by [`samples`]. Yields exactly `n_points` samples, in time order.
#[derive(Debug, Clone)]
pub struct Samples<'a, L: CoolingLaw> {
    law: &'a L,
    parameters: Parameters,
    next: usize,
}

impl<L: CoolingLaw> Iterator for Samples<'_, L> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.parameters.points() {
            return None;
        }
        let time = sample_time(&self.parameters, self.next);
        self.next += 1;
        Some(Sample::new(time, self.law.temperature_at(time)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parameters.points() - self.next;
        (remaining, Some(remaining))
    }
}

impl<L: CoolingLaw> ExactSizeIterator for Samples<'_, L> {}

/// Sample any law on the grid of `parameters`, lazily
///
/// # Example
///
/// ```rust
/// use thermal_decay::physics::Parameters;
/// use thermal_decay::solver::samples;
///
/// let parameters = Parameters::new(37.0, 15.0, 0.03, 180.0, 200).unwrap();
/// let law = parameters.law();
///
/// let below_30 = samples(&law, &parameters).find(|s| s.temperature < 30.0);
/// assert!(below_30.is_some());
/// ```
pub fn samples<'a, L: CoolingLaw>(law: &'a L, parameters: &Parameters) -> Samples<'a, L> {
    Samples {
        law,
        parameters: *parameters,
        next: 0,
    }
}

// =================================================================================================
// Eager evaluation
// =================================================================================================

/// Evaluate Newton cooling for validated parameters
pub fn evaluate(parameters: &Parameters) -> CoolingCurve {
    let law = parameters.law();
    evaluate_law(&law, parameters)
}

/// Validate raw values, then evaluate
///
/// # Errors
///
/// `InvalidParameter` for the first violated constraint; no samples are
/// computed in that case.
pub fn evaluate_raw(
    initial_temperature: f64,
    ambient_temperature: f64,
    cooling_constant: f64,
    time_horizon: f64,
    points: usize,
) -> Result<CoolingCurve> {
    let parameters = Parameters::new(
        initial_temperature,
        ambient_temperature,
        cooling_constant,
        time_horizon,
        points,
    )?;
    Ok(evaluate(&parameters))
}

fn evaluate_law(law: &NewtonCooling, parameters: &Parameters) -> CoolingCurve {
    let samples: Vec<Sample> = samples(law, parameters).collect();

    log::debug!(
        "Evaluated {} over [0, {}] with {} samples",
        law.formula(),
        parameters.time_horizon(),
        samples.len()
    );

    CoolingCurve::new(*parameters, samples)
}

// =================================================================================================
// Evaluator bound to a scenario table
// =================================================================================================

/// Evaluator holding a read-only scenario table
///
/// The table is borrowed, never mutated; any number of evaluators can share it.
///
/// # Example
///
/// ```rust
/// use thermal_decay::solver::{Evaluator, ScenarioTable};
///
/// let evaluator = Evaluator::new(ScenarioTable::builtin());
/// let curve = evaluator.evaluate_scenario("hot-coffee", Some(50)).unwrap();
/// assert_eq!(curve.len(), 50);
///
/// assert!(evaluator.evaluate_scenario("volcano", None).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    table: &'a ScenarioTable,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over `table`
    pub fn new(table: &'a ScenarioTable) -> Self {
        Self { table }
    }

    /// Scenario table in use
    pub fn table(&self) -> &'a ScenarioTable {
        self.table
    }

    /// Evaluate validated parameters
    pub fn evaluate(&self, parameters: &Parameters) -> CoolingCurve {
        evaluate(parameters)
    }

    /// Look up a scenario and evaluate it
    ///
    /// `points` overrides the scenario's suggested resolution.
    ///
    /// # Errors
    ///
    /// - `UnknownScenario` if `name` is not in the table
    /// - `InvalidParameter` if `points` is out of range
    pub fn evaluate_scenario(&self, name: &str, points: Option<usize>) -> Result<CoolingCurve> {
        let scenario = self.table.lookup(name)?;
        let parameters = scenario.parameters(points.unwrap_or(scenario.suggested_points))?;
        Ok(evaluate(&parameters))
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(ScenarioTable::builtin())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
