//! Cooling laws
//!
//! The [`CoolingLaw`] trait is the seam between the physics (the formula) and
//! the sampler in [`crate::solver`]: the sampler only asks for a temperature
//! at a given time.
//!
//! [`NewtonCooling`] is the closed-form solution of Newton's Law of Cooling,
//! `dT/dt = -k (T - T_env)`:
//!
//! ```text
//! T(t) = T_env + (T0 - T_env) · e^(-k·t)
//! ```

/// A temperature-versus-time law
pub trait CoolingLaw {
    /// Temperature at time `time`
    fn temperature_at(&self, time: f64) -> f64;

    /// Name of the law
    fn name(&self) -> &str;
}

/// Closed-form Newton cooling (or warming, when `T0 < T_env`)
///
/// Built from validated [`Parameters`](crate::physics::Parameters) through
/// [`Parameters::law`](crate::physics::Parameters::law), so `k > 0` holds.
///
/// # Example
///
/// ```rust
/// use thermal_decay::physics::{CoolingLaw, NewtonCooling};
///
/// let law = NewtonCooling::new(90.0, 20.0, 0.05);
/// assert_eq!(law.temperature_at(0.0), 90.0);
/// assert!((law.temperature_at(60.0) - 23.485).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCooling {
    initial_temperature: f64,
    ambient_temperature: f64,
    cooling_constant: f64,
}

impl NewtonCooling {
    /// Create the law from `T0`, `T_env` and `k`
    pub fn new(initial_temperature: f64, ambient_temperature: f64, cooling_constant: f64) -> Self {
        Self {
            initial_temperature,
            ambient_temperature,
            cooling_constant,
        }
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

    /// Initial difference to ambient, `T0 - T_env`
    pub fn temperature_difference(&self) -> f64 {
        self.initial_temperature - self.ambient_temperature
    }

    /// True when the body starts colder than its surroundings
    pub fn is_warming(&self) -> bool {
        self.initial_temperature < self.ambient_temperature
    }

    /// Time constant `τ = 1/k`: the difference to ambient shrinks by `e` every `τ`
    pub fn time_constant(&self) -> f64 {
        1.0 / self.cooling_constant
    }

    /// Time for the difference to ambient to halve: `ln 2 / k`
    pub fn half_life(&self) -> f64 {
        std::f64::consts::LN_2 / self.cooling_constant
    }

    /// Instantaneous rate `dT/dt = -k (T(t) - T_env)`
    pub fn rate_at(&self, time: f64) -> f64 {
        -self.cooling_constant * (self.temperature_at(time) - self.ambient_temperature)
    }

    /// Time at which the temperature reaches `target`
    ///
    /// Inverts the closed form: `t = -ln((target - T_env) / (T0 - T_env)) / k`.
    ///
    /// Returns `None` when the target lies outside `(T_env, T0]` (or `[T0, T_env)`
    /// when warming): ambient itself is only approached asymptotically.
    pub fn time_to_reach(&self, target: f64) -> Option<f64> {
        let difference = self.temperature_difference();
        if difference == 0.0 {
            return (target == self.ambient_temperature).then_some(0.0);
        }

        let ratio = (target - self.ambient_temperature) / difference;
        if ratio <= 0.0 || ratio > 1.0 || !ratio.is_finite() {
            return None;
        }
        if ratio == 1.0 {
            return Some(0.0);
        }

        Some(-ratio.ln() / self.cooling_constant)
    }

    /// Formula with the numbers filled in, e.g. `T(t) = 25 + (65.00)e^(-0.07t)`
    pub fn formula(&self) -> String {
        format!(
            "T(t) = {} + ({:.2})e^(-{}t)",
            self.ambient_temperature,
            self.temperature_difference(),
            self.cooling_constant
        )
    }
}

impl CoolingLaw for NewtonCooling {
    fn temperature_at(&self, time: f64) -> f64 {
        let decay = (-self.cooling_constant * time).exp();
        self.ambient_temperature + (self.initial_temperature - self.ambient_temperature) * decay
    }

    fn name(&self) -> &str {
        "Newton's Law of Cooling"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_value() {
        let law = NewtonCooling::new(90.0, 20.0, 0.05);
        assert_eq!(law.temperature_at(0.0), 90.0);
    }

    #[test]
    fn test_closed_form_value() {
        let law = NewtonCooling::new(90.0, 20.0, 0.05);
        let expected = 20.0 + 70.0 * (-3.0f64).exp();
        assert_relative_eq!(law.temperature_at(60.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_temperatures_stay_constant() {
        let law = NewtonCooling::new(22.0, 22.0, 0.3);
        for t in [0.0, 1.0, 10.0, 1000.0] {
            assert_eq!(law.temperature_at(t), 22.0);
        }
        assert_eq!(law.rate_at(5.0), 0.0);
    }

    #[test]
    fn test_warming() {
        let law = NewtonCooling::new(4.0, 30.0, 0.05);
        assert!(law.is_warming());
        assert!(law.temperature_at(10.0) > 4.0);
        assert!(law.temperature_at(10.0) < 30.0);
        assert!(law.rate_at(10.0) > 0.0);
    }

    #[test]
    fn test_rate_matches_differential_equation() {
        let law = NewtonCooling::new(90.0, 25.0, 0.07);
        let t = 12.0;
        let h = 1e-6;
        let numerical = (law.temperature_at(t + h) - law.temperature_at(t - h)) / (2.0 * h);
        assert_relative_eq!(law.rate_at(t), numerical, max_relative = 1e-5);
    }

    #[test]
    fn test_time_constant_and_half_life() {
        let law = NewtonCooling::new(90.0, 20.0, 0.05);
        assert_relative_eq!(law.time_constant(), 20.0, epsilon = 1e-12);
        let half = law.temperature_at(law.half_life());
        assert_relative_eq!(half - 20.0, 35.0, epsilon = 1e-9);
    }

    #[test]
    fn test_time_to_reach() {
        let law = NewtonCooling::new(90.0, 20.0, 0.05);
        let t = law.time_to_reach(55.0).unwrap();
        assert_relative_eq!(law.temperature_at(t), 55.0, epsilon = 1e-9);
        assert_eq!(law.time_to_reach(90.0), Some(0.0));
        assert!(law.time_to_reach(90.0).unwrap().is_sign_positive());

        // Ambient is never reached, nor anything beyond it or above T0.
        assert_eq!(law.time_to_reach(20.0), None);
        assert_eq!(law.time_to_reach(10.0), None);
        assert_eq!(law.time_to_reach(95.0), None);
    }

    #[test]
    fn test_time_to_reach_when_warming() {
        let law = NewtonCooling::new(4.0, 30.0, 0.05);
        let t = law.time_to_reach(17.0).unwrap();
        assert_relative_eq!(t, law.half_life(), epsilon = 1e-9);
    }

    #[test]
    fn test_time_to_reach_without_difference() {
        let law = NewtonCooling::new(22.0, 22.0, 0.1);
        assert_eq!(law.time_to_reach(22.0), Some(0.0));
        assert_eq!(law.time_to_reach(21.0), None);
    }

    #[test]
    fn test_formula() {
        let law = NewtonCooling::new(90.0, 25.0, 0.07);
        assert_eq!(law.formula(), "T(t) = 25 + (65.00)e^(-0.07t)");
        assert_eq!(law.name(), "Newton's Law of Cooling");
    }
}
