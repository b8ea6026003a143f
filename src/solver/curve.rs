//! Evaluation results
//!
//! A [`CoolingCurve`] is what the evaluator hands back: the validated
//! parameters plus the ordered samples. It is owned by the caller and never
//! mutated afterwards.

use nalgebra::DVector;

use crate::physics::{NewtonCooling, Parameters};

/// One `(time, temperature)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time since the start, in the same unit as `t_max`
    pub time: f64,

    /// Temperature at `time`
    pub temperature: f64,
}

impl Sample {
    /// Create a sample
    pub fn new(time: f64, temperature: f64) -> Self {
        Self { time, temperature }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, temperature): (f64, f64)) -> Self {
        Self { time, temperature }
    }
}

/// Sampled cooling curve
///
/// # Invariants
///
/// - `samples.len() == parameters.points()`
/// - sample times are strictly increasing, from `0` to `t_max` inclusive
///
/// # Example
///
/// ```rust
/// use thermal_decay::physics::Parameters;
/// use thermal_decay::solver::evaluate;
///
/// let curve = evaluate(&Parameters::new(90.0, 20.0, 0.05, 60.0, 4).unwrap());
///
/// assert_eq!(curve.len(), 4);
/// assert_eq!(curve.times().as_slice(), &[0.0, 20.0, 40.0, 60.0]);
/// assert_eq!(curve.first().unwrap().temperature, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingCurve {
    parameters: Parameters,
    samples: Vec<Sample>,
}

impl CoolingCurve {
    pub(crate) fn new(parameters: Parameters, samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), parameters.points());
        Self { parameters, samples }
    }

    /// Parameters the curve was evaluated with
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Law the curve samples
    pub fn law(&self) -> NewtonCooling {
        self.parameters.law()
    }

    /// All samples, ordered by time
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `t = 0`
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Sample at `t = t_max`
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Time column
    pub fn times(&self) -> DVector<f64> {
        DVector::from_iterator(self.samples.len(), self.samples.iter().map(|s| s.time))
    }

    /// Temperature column
    pub fn temperatures(&self) -> DVector<f64> {
        DVector::from_iterator(self.samples.len(), self.samples.iter().map(|s| s.temperature))
    }

    /// `(min, max)` temperature over the samples, `None` when empty
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        let temperatures = self.temperatures();
        Some((temperatures.min(), temperatures.max()))
    }

    /// Formula of the underlying law
    pub fn formula(&self) -> String {
        self.law().formula()
    }

    /// Consume the curve, keeping only the samples
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a CoolingCurve {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
