use serde::{Deserialize, Serialize};

use super::axis::AxisRegime;
use crate::{ControlInputs, Vec3f, BODY_FWD, BODY_RIGHT, BODY_UP, Quatf};

/// World-space directions the controller pushes along.
///
/// `forward` and `right` come from the view (camera); `up` is the body's own
/// up axis, since vertical thrust is applied relative to the hull. None of
/// them are normalized here; a zero vector yields a zero force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub forward: Vec3f,
    pub right: Vec3f,
    pub up: Vec3f,
}

impl Default for Basis {
    fn default() -> Self {
        Self { forward: BODY_FWD, right: BODY_RIGHT, up: BODY_UP }
    }
}

impl Basis {
    /// Basis of a body→world rotation, with the view locked to the hull.
    pub fn from_orientation(orientation: Quatf) -> Self {
        Self {
            forward: orientation * BODY_FWD,
            right: orientation * BODY_RIGHT,
            up: orientation * BODY_UP,
        }
    }
}

/// Step lengths for one tick. Forward thrust and roll scale by `dt`; vertical
/// and strafe scale by `fixed_dt`. Inside a fixed-step loop both are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickTiming {
    pub dt: f32,
    pub fixed_dt: f32,
}

impl TickTiming {
    pub fn fixed(dt: f32) -> Self {
        Self { dt, fixed_dt: dt }
    }
}

/// Additive world-space force and torque for the rigid-body integrator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightOutput {
    pub force: Vec3f,
    pub torque: Vec3f,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightStepDebug {
    pub timing: Option<TickTiming>,
    pub inputs: ControlInputs,
    // Basis used this tick
    pub forward: Vec3f,
    pub right: Vec3f,
    pub up: Vec3f,
    // Boost
    pub boost_current: f32,
    pub boost_multiplier: f32,
    pub boosting: bool,
    pub boost_exhausted: bool,
    // Per-axis contributions
    pub roll_torque: Vec3f,
    pub thrust_force: Vec3f,
    pub vertical_force: Vec3f,
    pub lateral_force: Vec3f,
    pub thrust_regime: AxisRegime,
    pub vertical_regime: AxisRegime,
    pub lateral_regime: AxisRegime,
    // Glide after the tick
    pub thrust_glide: f32,
    pub vertical_glide: f32,
    pub lateral_glide: f32,
    pub output: FlightOutput,
}
