use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flight_physics::GlideFactor;

/// Tunable parameters for one vehicle class.
///
/// Gains are in force units per unit input per second; boost rates are amounts
/// per tick. The three glide reductions are per-tick multiplicative decay
/// factors and must lie strictly inside (0, 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSpec {
    pub roll_torque: f32,
    pub thrust: f32,
    pub up_thrust: f32,
    pub strafe_thrust: f32,
    pub boost_max: f32,
    pub boost_drain_rate: f32,
    pub boost_recharge_rate: f32,
    pub boost_multiplier: f32,
    pub thrust_glide_reduction: f32,
    pub vertical_glide_reduction: f32,
    pub lateral_glide_reduction: f32,
    /// Inputs with `|v| <= deadzone` are neutral and let the axis coast.
    pub deadzone: f32,
}

impl Default for FlightSpec {
    fn default() -> Self {
        flightspecs::interceptor_spec()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("{axis} glide reduction must be in (0, 1), got {value}")]
    GlideFactorOutOfRange { axis: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    NegativeParameter { name: &'static str, value: f32 },
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },
    #[error("deadzone must be in [0, 1), got {0}")]
    DeadzoneOutOfRange(f32),
}

impl FlightSpec {
    /// Reject configurations that would make glide diverge or the boost
    /// resource run backwards.
    pub fn validate(&self) -> Result<(), SpecError> {
        let scalars = [
            ("roll_torque", self.roll_torque),
            ("thrust", self.thrust),
            ("up_thrust", self.up_thrust),
            ("strafe_thrust", self.strafe_thrust),
            ("boost_max", self.boost_max),
            ("boost_drain_rate", self.boost_drain_rate),
            ("boost_recharge_rate", self.boost_recharge_rate),
            ("boost_multiplier", self.boost_multiplier),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(SpecError::NonFinite { name });
            }
        }
        // Gains may be negative (inverted axes); boost quantities may not.
        for &(name, value) in &scalars[4..] {
            if value < 0.0 {
                return Err(SpecError::NegativeParameter { name, value });
            }
        }

        GlideFactor::new("thrust", self.thrust_glide_reduction)?;
        GlideFactor::new("vertical", self.vertical_glide_reduction)?;
        GlideFactor::new("lateral", self.lateral_glide_reduction)?;

        if !(0.0..1.0).contains(&self.deadzone) {
            return Err(SpecError::DeadzoneOutOfRange(self.deadzone));
        }
        Ok(())
    }
}

pub mod flightspecs {
    use super::*;

    // Light single-seat craft; the reference tuning.
    pub fn interceptor_spec() -> FlightSpec {
        FlightSpec {
            roll_torque: 1000.0,
            thrust: 100.0,
            up_thrust: 50.0,
            strafe_thrust: 50.0,
            // Eight ticks of boost from full
            boost_max: 2.0,
            boost_drain_rate: 0.25,
            boost_recharge_rate: 0.5,
            boost_multiplier: 5.0,
            // Forward momentum lingers; translation on the other axes snaps back
            thrust_glide_reduction: 0.999,
            vertical_glide_reduction: 0.111,
            lateral_glide_reduction: 0.111,
            deadzone: 0.1,
        }
    }

    /// Heavier cargo hull: more thrust, weaker boost, longer lateral drift.
    pub fn hauler_spec() -> FlightSpec {
        FlightSpec {
            roll_torque: 400.0,
            thrust: 250.0,
            up_thrust: 120.0,
            strafe_thrust: 90.0,
            boost_max: 4.0,
            boost_drain_rate: 0.2,
            boost_recharge_rate: 0.1,
            boost_multiplier: 2.0,
            thrust_glide_reduction: 0.995,
            vertical_glide_reduction: 0.5,
            lateral_glide_reduction: 0.6,
            deadzone: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        flightspecs::interceptor_spec().validate().unwrap();
        flightspecs::hauler_spec().validate().unwrap();
    }

    #[test]
    fn glide_reduction_of_one_is_rejected() {
        let spec = FlightSpec { vertical_glide_reduction: 1.0, ..FlightSpec::default() };
        assert_eq!(
            spec.validate(),
            Err(SpecError::GlideFactorOutOfRange { axis: "vertical", value: 1.0 })
        );
    }

    #[test]
    fn glide_reduction_of_zero_is_rejected() {
        let spec = FlightSpec { thrust_glide_reduction: 0.0, ..FlightSpec::default() };
        assert!(matches!(
            spec.validate(),
            Err(SpecError::GlideFactorOutOfRange { axis: "thrust", .. })
        ));
    }

    #[test]
    fn negative_boost_rate_is_rejected() {
        let spec = FlightSpec { boost_drain_rate: -0.1, ..FlightSpec::default() };
        assert!(matches!(
            spec.validate(),
            Err(SpecError::NegativeParameter { name: "boost_drain_rate", .. })
        ));
    }

    #[test]
    fn negative_gain_is_allowed() {
        let spec = FlightSpec { roll_torque: -1000.0, ..FlightSpec::default() };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn non_finite_gain_is_rejected() {
        let spec = FlightSpec { thrust: f32::INFINITY, ..FlightSpec::default() };
        assert_eq!(spec.validate(), Err(SpecError::NonFinite { name: "thrust" }));
    }

    #[test]
    fn deadzone_must_stay_below_full_deflection() {
        let spec = FlightSpec { deadzone: 1.0, ..FlightSpec::default() };
        assert_eq!(spec.validate(), Err(SpecError::DeadzoneOutOfRange(1.0)));
    }
}
