//! Model parameters and their validation
//!
//! Two types live here:
//!
//! - [`ParameterInput`]: the five free-text fields as a user typed them
//! - [`Parameters`]: a validated, constraint-checked parameter set
//!
//! The only way to obtain a [`Parameters`] value is through validation
//! ([`Parameters::new`] or [`ParameterInput::parse`]), so anything holding one
//! can evaluate without re-checking.
//!
//! # Constraints
//!
//! | Field | Constraint |
//! |-------|------------|
//! | `T0`, `T_env` | finite, not below absolute zero (−273.15 °C) |
//! | `k` | finite, `> 0` |
//! | `t_max` | finite, `> 0` |
//! | `n_points` | `>= 2`, `<= MAX_POINTS` |
//!
//! Fields are checked in that order and the first violation is reported.

use std::fmt;

use crate::error::{CoolingError, Result};
use crate::physics::law::NewtonCooling;

/// Upper bound on the sample resolution.
pub const MAX_POINTS: usize = 100_000;

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Highest accepted temperature in degrees Celsius.
pub const MAX_TEMPERATURE_CELSIUS: f64 = 1.0e6;

// =================================================================================================
// Parameter fields (type-safe identifiers)
// =================================================================================================

/// Identifies one of the five input fields
///
/// Used by [`CoolingError::InvalidParameter`] to say which field is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    /// Initial temperature `T0`
    InitialTemperature,

    /// Ambient temperature `T_env`
    AmbientTemperature,

    /// Cooling constant `k`
    CoolingConstant,

    /// Time horizon `t_max`
    TimeHorizon,

    /// Sample resolution `n_points`
    Points,
}

impl ParameterField {
    /// All fields, in validation order.
    pub const ALL: [ParameterField; 5] = [
        ParameterField::InitialTemperature,
        ParameterField::AmbientTemperature,
        ParameterField::CoolingConstant,
        ParameterField::TimeHorizon,
        ParameterField::Points,
    ];

    /// Short symbol used in error messages
    pub fn symbol(&self) -> &'static str {
        match self {
            ParameterField::InitialTemperature => "T0",
            ParameterField::AmbientTemperature => "T_env",
            ParameterField::CoolingConstant => "k",
            ParameterField::TimeHorizon => "t_max",
            ParameterField::Points => "n_points",
        }
    }

    /// Human-readable label for input forms
    pub fn label(&self) -> &'static str {
        match self {
            ParameterField::InitialTemperature => "Initial Temp (T0)",
            ParameterField::AmbientTemperature => "Ambient Temp (T_env)",
            ParameterField::CoolingConstant => "Cooling Constant (k)",
            ParameterField::TimeHorizon => "Max Time (t_max)",
            ParameterField::Points => "Resolution (Points)",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =================================================================================================
// Validated parameters
// =================================================================================================

/// Validated parameter set for one evaluation
///
/// # Example
///
/// ```rust
/// use thermal_decay::physics::Parameters;
///
/// let parameters = Parameters::new(90.0, 20.0, 0.05, 60.0, 4).unwrap();
/// assert_eq!(parameters.points(), 4);
/// assert_eq!(parameters.spacing(), 20.0);
///
/// let error = Parameters::new(90.0, 20.0, 0.0, 60.0, 4).unwrap_err();
/// assert_eq!(error.message(), "k must be > 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    initial_temperature: f64,
    ambient_temperature: f64,
    cooling_constant: f64,
    time_horizon: f64,
    points: usize,
}

impl Parameters {
    /// Validate and build a parameter set
    ///
    /// # Errors
    ///
    /// `InvalidParameter` naming the first field that violates its constraint.
    pub fn new(
        initial_temperature: f64,
        ambient_temperature: f64,
        cooling_constant: f64,
        time_horizon: f64,
        points: usize,
    ) -> Result<Self> {
        check_temperature(ParameterField::InitialTemperature, initial_temperature)?;
        check_temperature(ParameterField::AmbientTemperature, ambient_temperature)?;
        check_positive(ParameterField::CoolingConstant, cooling_constant)?;
        check_positive(ParameterField::TimeHorizon, time_horizon)?;
        check_points(points)?;
        check_spacing(time_horizon, points)?;

        Ok(Self {
            initial_temperature,
            ambient_temperature,
            cooling_constant,
            time_horizon,
            points,
        })
    }

    /// Same physical setup with a different resolution
    pub fn with_points(self, points: usize) -> Result<Self> {
        check_points(points)?;
        check_spacing(self.time_horizon, points)?;
        Ok(Self { points, ..self })
    }

    /// Initial temperature `T0`
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Ambient temperature `T_env`
    pub fn ambient_temperature(&self) -> f64 {
        self.ambient_temperature
    }

    /// Cooling constant `k`
    pub fn cooling_constant(&self) -> f64 {
        self.cooling_constant
    }

    /// Time horizon `t_max`
    pub fn time_horizon(&self) -> f64 {
        self.time_horizon
    }

    /// Number of samples `n_points`
    pub fn points(&self) -> usize {
        self.points
    }

    /// Distance between consecutive sample times: `t_max / (n_points - 1)`
    pub fn spacing(&self) -> f64 {
        self.time_horizon / (self.points - 1) as f64
    }

    /// The cooling law these parameters describe
    pub fn law(&self) -> NewtonCooling {
        NewtonCooling::new(
            self.initial_temperature,
            self.ambient_temperature,
            self.cooling_constant,
        )
    }
}

fn check_temperature(field: ParameterField, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CoolingError::invalid(field, "must be a finite number"));
    }
    if value < ABSOLUTE_ZERO_CELSIUS {
        return Err(CoolingError::invalid(
            field,
            format!("must be >= {ABSOLUTE_ZERO_CELSIUS} (absolute zero)"),
        ));
    }
    if value > MAX_TEMPERATURE_CELSIUS {
        return Err(CoolingError::invalid(
            field,
            format!("must be <= {MAX_TEMPERATURE_CELSIUS}"),
        ));
    }
    Ok(())
}

fn check_positive(field: ParameterField, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CoolingError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CoolingError::invalid(field, "must be > 0"));
    }
    Ok(())
}

fn check_points(points: usize) -> Result<()> {
    if points < 2 {
        return Err(CoolingError::invalid(ParameterField::Points, "must be >= 2"));
    }
    if points > MAX_POINTS {
        return Err(CoolingError::invalid(
            ParameterField::Points,
            format!("must be <= {MAX_POINTS}"),
        ));
    }
    Ok(())
}

/// Sample times must stay strictly increasing: `t_max / (n_points - 1)` has
/// to be a normal float.
fn check_spacing(time_horizon: f64, points: usize) -> Result<()> {
    if !(time_horizon / (points - 1) as f64).is_normal() {
        return Err(CoolingError::invalid(
            ParameterField::TimeHorizon,
            format!("is too small to space {points} samples"),
        ));
    }
    Ok(())
}

// =================================================================================================
// Free-text input
// =================================================================================================

/// The five input fields as raw text
///
/// Mirrors an input form: each field holds whatever the user typed.
/// [`ParameterInput::parse`] converts to numbers and then validates,
/// reporting the offending field on failure.
///
/// # Example
///
/// ```rust
/// use thermal_decay::physics::{ParameterField, ParameterInput};
///
/// let mut input = ParameterInput::new("90", "20", "0.05", "60", "4");
/// assert!(input.parse().is_ok());
///
/// input.set(ParameterField::CoolingConstant, "fast");
/// let error = input.parse().unwrap_err();
/// assert_eq!(error.field(), Some(ParameterField::CoolingConstant));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterInput {
    pub initial_temperature: String,
    pub ambient_temperature: String,
    pub cooling_constant: String,
    pub time_horizon: String,
    pub points: String,
}

impl ParameterInput {
    /// Build from five text values
    pub fn new(
        initial_temperature: impl Into<String>,
        ambient_temperature: impl Into<String>,
        cooling_constant: impl Into<String>,
        time_horizon: impl Into<String>,
        points: impl Into<String>,
    ) -> Self {
        Self {
            initial_temperature: initial_temperature.into(),
            ambient_temperature: ambient_temperature.into(),
            cooling_constant: cooling_constant.into(),
            time_horizon: time_horizon.into(),
            points: points.into(),
        }
    }

    /// Text currently held by `field`
    pub fn get(&self, field: ParameterField) -> &str {
        match field {
            ParameterField::InitialTemperature => &self.initial_temperature,
            ParameterField::AmbientTemperature => &self.ambient_temperature,
            ParameterField::CoolingConstant => &self.cooling_constant,
            ParameterField::TimeHorizon => &self.time_horizon,
            ParameterField::Points => &self.points,
        }
    }

    /// Replace the text of `field`
    pub fn set(&mut self, field: ParameterField, value: impl Into<String>) {
        let slot = match field {
            ParameterField::InitialTemperature => &mut self.initial_temperature,
            ParameterField::AmbientTemperature => &mut self.ambient_temperature,
            ParameterField::CoolingConstant => &mut self.cooling_constant,
            ParameterField::TimeHorizon => &mut self.time_horizon,
            ParameterField::Points => &mut self.points,
        };
        *slot = value.into();
    }

    /// Parse every field, then validate the whole set
    ///
    /// Parsing stops at the first field that is not a number; validation
    /// then follows [`Parameters::new`].
    pub fn parse(&self) -> Result<Parameters> {
        let initial = parse_real(ParameterField::InitialTemperature, &self.initial_temperature)?;
        let ambient = parse_real(ParameterField::AmbientTemperature, &self.ambient_temperature)?;
        let k = parse_real(ParameterField::CoolingConstant, &self.cooling_constant)?;
        let horizon = parse_real(ParameterField::TimeHorizon, &self.time_horizon)?;
        let points = parse_count(&self.points)?;

        Parameters::new(initial, ambient, k, horizon, points)
    }
}

impl From<&Parameters> for ParameterInput {
    fn from(parameters: &Parameters) -> Self {
        Self::new(
            parameters.initial_temperature.to_string(),
            parameters.ambient_temperature.to_string(),
            parameters.cooling_constant.to_string(),
            parameters.time_horizon.to_string(),
            parameters.points.to_string(),
        )
    }
}

fn parse_real(field: ParameterField, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CoolingError::invalid(field, format!("must be a number, got {trimmed:?}")))
}

/// Resolution accepts integral decimals ("200.0") as form fields often hold them.
fn parse_count(text: &str) -> Result<usize> {
    let value = parse_real(ParameterField::Points, text)?;

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(CoolingError::invalid(
            ParameterField::Points,
            format!("must be a whole number, got {:?}", text.trim()),
        ));
    }

    // Saturating cast: negatives become 0 and huge values usize::MAX,
    // both rejected by the range check in Parameters::new.
    Ok(value as usize)
}

// =================================================================================================
// Tests
// =================================================================================================
