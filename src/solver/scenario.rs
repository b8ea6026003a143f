//! Preset scenarios
//!
//! A scenario is a named physical situation: the parameters of the law
//! without a resolution. The built-in table holds four presets and lives in a
//! `static`, so it is immutable for the whole process and can be borrowed
//! from anywhere.
//!
//! | Name | T0 | T_env | k | t_max |
//! |------|----|-------|---|-------|
//! | `hot-coffee` | 90 | 25 | 0.07 | 60 |
//! | `iced-tea` | 4 | 30 | 0.05 | 120 |
//! | `forensic-body` | 37 | 15 | 0.03 | 180 |
//! | `metal-quenching` | 800 | 20 | 0.2 | 30 |
//!
//! Values are illustrative classroom presets, not measured constants.

use crate::error::{CoolingError, Result};
use crate::physics::{ParameterInput, Parameters};

/// Named preset `(T0, T_env, k, t_max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    /// Lookup key (case-sensitive)
    pub name: &'static str,

    /// Display title
    pub title: &'static str,

    /// One-line description of the situation
    pub description: &'static str,

    /// Initial temperature `T0` (°C)
    pub initial_temperature: f64,

    /// Ambient temperature `T_env` (°C)
    pub ambient_temperature: f64,

    /// Cooling constant `k` (1/min)
    pub cooling_constant: f64,

    /// Time horizon `t_max` (min)
    pub time_horizon: f64,

    /// Resolution the preset is usually shown with
    pub suggested_points: usize,
}

impl Scenario {
    /// Parameters for this scenario at the given resolution
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `points` is out of range.
    pub fn parameters(&self, points: usize) -> Result<Parameters> {
        Parameters::new(
            self.initial_temperature,
            self.ambient_temperature,
            self.cooling_constant,
            self.time_horizon,
            points,
        )
    }

    /// Parameters at the suggested resolution
    pub fn default_parameters(&self) -> Result<Parameters> {
        self.parameters(self.suggested_points)
    }

    /// Text fields pre-filled with this scenario's values
    pub fn to_input(&self) -> ParameterInput {
        ParameterInput::new(
            self.initial_temperature.to_string(),
            self.ambient_temperature.to_string(),
            self.cooling_constant.to_string(),
            self.time_horizon.to_string(),
            self.suggested_points.to_string(),
        )
    }
}

static BUILTIN_SCENARIOS: [Scenario; 4] = [
    Scenario {
        name: "hot-coffee",
        title: "Hot Coffee in Room",
        description: "A fresh cup cooling on a desk",
        initial_temperature: 90.0,
        ambient_temperature: 25.0,
        cooling_constant: 0.07,
        time_horizon: 60.0,
        suggested_points: 100,
    },
    Scenario {
        name: "iced-tea",
        title: "Iced Tea Warming Up",
        description: "A glass from the fridge left out on a hot day",
        initial_temperature: 4.0,
        ambient_temperature: 30.0,
        cooling_constant: 0.05,
        time_horizon: 120.0,
        suggested_points: 100,
    },
    Scenario {
        name: "forensic-body",
        title: "Forensic: Body Cooling",
        description: "Body temperature falling in a cold basement",
        initial_temperature: 37.0,
        ambient_temperature: 15.0,
        cooling_constant: 0.03,
        time_horizon: 180.0,
        suggested_points: 200,
    },
    Scenario {
        name: "metal-quenching",
        title: "Metal Quenching",
        description: "Red-hot steel plunged into a water bath",
        initial_temperature: 800.0,
        ambient_temperature: 20.0,
        cooling_constant: 0.2,
        time_horizon: 30.0,
        suggested_points: 200,
    },
];

static BUILTIN_TABLE: ScenarioTable = ScenarioTable::new(&BUILTIN_SCENARIOS);

/// Read-only scenario table
///
/// # Example
///
/// ```rust
/// use thermal_decay::solver::ScenarioTable;
///
/// let table = ScenarioTable::builtin();
/// let coffee = table.lookup("hot-coffee").unwrap();
/// assert_eq!(coffee.initial_temperature, 90.0);
///
/// assert!(table.lookup("Hot-Coffee").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioTable {
    scenarios: &'static [Scenario],
}

impl ScenarioTable {
    /// Wrap a static list of scenarios
    pub const fn new(scenarios: &'static [Scenario]) -> Self {
        Self { scenarios }
    }

    /// The four built-in presets
    pub fn builtin() -> &'static ScenarioTable {
        &BUILTIN_TABLE
    }

    /// Exact, case-sensitive lookup
    ///
    /// # Errors
    ///
    /// `UnknownScenario(name)` if no scenario has that name.
    pub fn lookup(&self, name: &str) -> Result<&'static Scenario> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.name == name)
            .ok_or_else(|| CoolingError::UnknownScenario(name.to_string()))
    }

    /// Scenario names, in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.scenarios.iter().map(|scenario| scenario.name)
    }

    /// Scenarios, in table order
    pub fn iter(&self) -> std::slice::Iter<'static, Scenario> {
        self.scenarios.iter()
    }

    /// Number of scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True if the table is empty
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Endless round-robin over the scenarios
    ///
    /// Each call to `next()` yields the following preset and wraps to the
    /// first after the last. Yields nothing for an empty table.
    pub fn rotation(&self) -> impl Iterator<Item = &'static Scenario> {
        self.scenarios.iter().cycle()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
