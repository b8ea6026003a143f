//! thermal-decay: Newton's Law of Cooling evaluator
//!
//! Samples the closed-form solution of Newton's law of cooling,
//!
//! ```text
//! T(t) = T_env + (T0 - T_env) · e^(-k·t)
//! ```
//!
//! at evenly spaced times, and hands the curve to a CSV exporter or a plot
//! renderer. Four preset scenarios (coffee, iced tea, forensic body cooling,
//! metal quenching) pre-fill the parameters.
//!
//! # Architecture
//!
//! The crate keeps the law and the sampling apart:
//!
//! 1. **Physics**: the law itself ([`physics::NewtonCooling`]) and the validated
//!    inputs ([`physics::Parameters`])
//! 2. **Solver**: evenly spaced sampling ([`solver::evaluate`]) and the read-only
//!    scenario table ([`solver::ScenarioTable`])
//! 3. **Output**: CSV export/import and PNG/SVG rendering
//!
//! # Quick Start
//!
//! ```rust
//! use thermal_decay::prelude::*;
//!
//! # fn main() -> Result<(), CoolingError> {
//! // 1. Pick a scenario, or build parameters by hand
//! let evaluator = Evaluator::new(ScenarioTable::builtin());
//! let coffee = evaluator.evaluate_scenario("hot-coffee", Some(61))?;
//!
//! let parameters = Parameters::new(90.0, 20.0, 0.05, 60.0, 4)?;
//! let curve = evaluate(&parameters);
//!
//! // 2. Access results
//! assert_eq!(curve.len(), 4);
//! assert_eq!(curve.first().map(|s| s.temperature), Some(90.0));
//! println!("{}", coffee.formula());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type shared by every fallible operation
//! - [`physics`]: The cooling law and its parameters
//! - [`solver`]: Sampling and scenarios
//! - [`output`]: Export and visualization

pub mod error;
pub mod output;
pub mod physics;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use thermal_decay::prelude::*;
    //! ```
    pub use crate::error::CoolingError;
    pub use crate::physics::{
        CoolingLaw, NewtonCooling, ParameterField, ParameterInput, Parameters,
    };
    pub use crate::solver::{
        CoolingCurve, Evaluator, Sample, Scenario, ScenarioTable, evaluate, evaluate_raw,
    };
}
