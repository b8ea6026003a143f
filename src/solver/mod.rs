//! Sampling the cooling law
//!
//! This module turns validated [`Parameters`](crate::physics::Parameters)
//! into an ordered sequence of samples, and provides the preset scenarios
//! that supply those parameters.
//!
//! # Core Concepts
//!
//! The pipeline is a single synchronous call chain:
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐
//! │ Scenario Table   │      │ Parameter Input  │  (free text)
//! │ (static presets) │      └────────┬─────────┘
//! └────────┬─────────┘               │ parse + validate
//!          │ lookup                  │
//!          └──────────┬──────────────┘
//!                     ▼
//!            ┌──────────────────┐
//!            │ Parameters       │  (validated)
//!            └────────┬─────────┘
//!                     ▼
//!            ┌──────────────────┐
//!            │ Evaluator        │  T(t) = T_env + (T0 - T_env)·e^(-k·t)
//!            └────────┬─────────┘
//!                     ▼
//!            ┌──────────────────┐
//!            │ CoolingCurve     │  → export / rendering
//!            └──────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`evaluator`**: [`evaluate`], [`evaluate_raw`], lazy [`samples`], [`Evaluator`]
//! - **`curve`**: [`Sample`] and [`CoolingCurve`]
//! - **`scenario`**: [`Scenario`] and [`ScenarioTable`]
//!
//! # Example
//!
//! ```rust
//! use thermal_decay::solver::{Evaluator, ScenarioTable};
//!
//! let table = ScenarioTable::builtin();
//! let evaluator = Evaluator::new(table);
//!
//! for scenario in table.iter() {
//!     let curve = evaluator.evaluate_scenario(scenario.name, None).unwrap();
//!     println!("{}: {}", scenario.title, curve.formula());
//! }
//! ```
//!
//! # Error Handling
//!
//! Lookup and validation return [`CoolingError`](crate::error::CoolingError):
//!
//! ```rust
//! use thermal_decay::solver::evaluate_raw;
//!
//! match evaluate_raw(90.0, 20.0, 0.0, 60.0, 4) {
//!     Ok(curve) => println!("{} samples", curve.len()),
//!     Err(e) => eprintln!("{}", e),  // Invalid parameter: k must be > 0
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod curve;
mod evaluator;
mod scenario;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use curve::{CoolingCurve, Sample};
pub use evaluator::{Evaluator, Samples, evaluate, evaluate_raw, sample_time, samples};
pub use scenario::{Scenario, ScenarioTable};
