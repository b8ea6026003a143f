//! Physical model of Newton cooling
//!
//! This module holds the physics: what the parameters mean, which values are
//! admissible, and the closed-form temperature law. Sampling the law over time
//! is the job of [`crate::solver`].
//!
//! # Core Concepts
//!
//! - **Parameters**: validated `(T0, T_env, k, t_max, n_points)`
//! - **ParameterInput**: raw text fields, parsed then validated
//! - **CoolingLaw**: trait for anything that gives a temperature at a time
//! - **NewtonCooling**: `T(t) = T_env + (T0 - T_env)·e^(-k·t)`
//!
//! # Example
//!
//! ```rust
//! use thermal_decay::physics::{CoolingLaw, ParameterInput};
//!
//! let input = ParameterInput::new("90", "25", "0.07", "60", "100");
//! let parameters = input.parse().unwrap();
//!
//! let law = parameters.law();
//! assert_eq!(law.temperature_at(0.0), 90.0);
//! println!("{}", law.formula());
//! ```

pub mod law;
pub mod parameters;

pub use law::{CoolingLaw, NewtonCooling};
pub use parameters::{
    ABSOLUTE_ZERO_CELSIUS, MAX_POINTS, MAX_TEMPERATURE_CELSIUS, ParameterField, ParameterInput,
    Parameters,
};
