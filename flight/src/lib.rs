//! Fixed-timestep flight control for a free-flying vehicle.
//!
//! This crate intentionally avoids any ECS types. It turns normalized control
//! axes into an additive world-space force and torque once per tick; a host
//! owns input delivery, the orientation source and rigid-body integration.

mod math;
pub use math::{Quatf, Vec3f, BODY_FWD, BODY_RIGHT, BODY_UP};

mod boost;
pub use boost::BoostResource;

mod input;
pub use input::{ControlInputs, InputBuffer};

pub mod flight_physics;
pub use flight_physics::{
    AxisModel, AxisRegime, Basis, FlightController, FlightOutput, FlightStepDebug, GlideCapture,
    GlideFactor, TickTiming,
};

mod flight_specs;
pub use flight_specs::{FlightSpec, SpecError};
pub use flight_specs::flightspecs;
