mod axis;
mod controller;
mod terms;
mod types;

pub use axis::{AxisModel, AxisRegime, GlideCapture, GlideFactor};
pub use controller::FlightController;
pub use types::{Basis, FlightOutput, FlightStepDebug, TickTiming};
