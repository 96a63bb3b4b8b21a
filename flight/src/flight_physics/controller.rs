use super::axis::{AxisModel, GlideCapture, GlideFactor};
use super::terms::{sum_forces, torque_roll};
use super::types::{Basis, FlightOutput, FlightStepDebug, TickTiming};
use crate::{BoostResource, ControlInputs, FlightSpec, SpecError};

/// Per-vehicle flight state: boost reserve plus one glide model per
/// translational axis. Roll carries no state.
#[derive(Debug, Clone)]
pub struct FlightController {
    spec: FlightSpec,
    boost: BoostResource,
    thrust: AxisModel,
    vertical: AxisModel,
    lateral: AxisModel,
}

impl FlightController {
    pub fn new(spec: FlightSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let thrust = AxisModel::new(
            spec.thrust,
            GlideFactor::new("thrust", spec.thrust_glide_reduction)?,
            GlideCapture::BaseGain,
            spec.deadzone,
        );
        let vertical = AxisModel::new(
            spec.up_thrust,
            GlideFactor::new("vertical", spec.vertical_glide_reduction)?,
            GlideCapture::Compound,
            spec.deadzone,
        );
        let lateral = AxisModel::new(
            spec.strafe_thrust,
            GlideFactor::new("lateral", spec.lateral_glide_reduction)?,
            GlideCapture::SignedInput,
            spec.deadzone,
        );
        Ok(Self {
            boost: BoostResource::from_spec(&spec),
            spec,
            thrust,
            vertical,
            lateral,
        })
    }

    /// Run one fixed tick. See `tick_dbg` for telemetry.
    pub fn tick(&mut self, inputs: ControlInputs, basis: Basis, timing: TickTiming) -> FlightOutput {
        self.tick_dbg(inputs, basis, timing, None)
    }

    /// Variant of `tick` that fills out an optional debug telemetry struct.
    pub fn tick_dbg(
        &mut self,
        inputs: ControlInputs,
        basis: Basis,
        timing: TickTiming,
        mut dbg: Option<&mut FlightStepDebug>,
    ) -> FlightOutput {
        // Boost first so thrust sees this tick's multiplier
        self.boost.set_requested(inputs.boost);
        self.boost.advance();
        let multiplier = self.boost.current_multiplier();

        let torque = torque_roll(basis.forward, inputs.roll, self.spec.roll_torque, timing.dt);

        let (f_thrust, thrust_regime) =
            self.thrust.step(inputs.thrust, basis.forward, multiplier, timing.dt);
        let (f_vertical, vertical_regime) =
            self.vertical.step(inputs.vertical, basis.up, 1.0, timing.fixed_dt);
        let (f_lateral, lateral_regime) =
            self.lateral.step(inputs.strafe, basis.right, 1.0, timing.fixed_dt);

        let output = FlightOutput {
            force: sum_forces([f_thrust, f_vertical, f_lateral]),
            torque,
        };

        if let Some(d) = dbg.as_mut() {
            d.timing = Some(timing);
            d.inputs = inputs;
            d.forward = basis.forward;
            d.right = basis.right;
            d.up = basis.up;
            d.boost_current = self.boost.current();
            d.boost_multiplier = multiplier;
            d.boosting = self.boost.is_boosting();
            d.boost_exhausted = self.boost.is_exhausted();
            d.roll_torque = torque;
            d.thrust_force = f_thrust;
            d.vertical_force = f_vertical;
            d.lateral_force = f_lateral;
            d.thrust_regime = thrust_regime;
            d.vertical_regime = vertical_regime;
            d.lateral_regime = lateral_regime;
            d.thrust_glide = self.thrust.glide();
            d.vertical_glide = self.vertical.glide();
            d.lateral_glide = self.lateral.glide();
            d.output = output;
        }

        output
    }

    /// Back to spawn: full boost, no glide on any axis.
    pub fn reset(&mut self) {
        self.boost.reset();
        self.thrust.reset();
        self.vertical.reset();
        self.lateral.reset();
    }

    pub fn spec(&self) -> &FlightSpec {
        &self.spec
    }

    pub fn boost(&self) -> &BoostResource {
        &self.boost
    }

    pub fn thrust_axis(&self) -> &AxisModel {
        &self.thrust
    }

    pub fn vertical_axis(&self) -> &AxisModel {
        &self.vertical
    }

    pub fn lateral_axis(&self) -> &AxisModel {
        &self.lateral
    }
}
