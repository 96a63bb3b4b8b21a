use serde::{Deserialize, Serialize};

use crate::{SpecError, Vec3f};

/// Per-tick multiplicative glide decay, guaranteed to lie strictly in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlideFactor(f32);

impl GlideFactor {
    pub fn new(axis: &'static str, value: f32) -> Result<Self, SpecError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(SpecError::GlideFactorOutOfRange { axis, value })
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

/// What an axis keeps as glide after a tick of active input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlideCapture {
    /// Glide becomes the axis gain: unsigned and unaffected by boost.
    BaseGain,
    /// Glide becomes `input * gain`.
    SignedInput,
    /// Glide is multiplied by `input * gain`. A zero glide stays zero, so an
    /// axis using this from spawn never coasts.
    Compound,
}

/// Which regime an axis ran in on its last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisRegime {
    #[default]
    Coasting,
    Driven,
}

/// One translational axis: a gain, a glide decay, and the capture policy that
/// decides how driven ticks feed the glide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisModel {
    gain: f32,
    decay: GlideFactor,
    capture: GlideCapture,
    deadzone: f32,
    glide: f32,
}

impl AxisModel {
    pub fn new(gain: f32, decay: GlideFactor, capture: GlideCapture, deadzone: f32) -> Self {
        Self { gain, decay, capture, deadzone, glide: 0.0 }
    }

    /// Inputs at or inside the deadzone coast; `±deadzone` itself is neutral.
    pub fn is_driven(&self, input: f32) -> bool {
        input > self.deadzone || input < -self.deadzone
    }

    /// Force along `direction` for this tick; mutates glide.
    ///
    /// `boost` scales the driven force only and never reaches the glide.
    pub fn step(&mut self, input: f32, direction: Vec3f, boost: f32, dt: f32) -> (Vec3f, AxisRegime) {
        if self.is_driven(input) {
            let force = direction * input * self.gain * boost * dt;
            self.glide = match self.capture {
                GlideCapture::BaseGain => self.gain,
                GlideCapture::SignedInput => input * self.gain,
                GlideCapture::Compound => self.glide * input * self.gain,
            };
            (force, AxisRegime::Driven)
        } else {
            let force = direction * self.glide * dt;
            self.glide *= self.decay.get();
            (force, AxisRegime::Coasting)
        }
    }

    pub fn glide(&self) -> f32 {
        self.glide
    }

    pub fn reset(&mut self) {
        self.glide = 0.0;
    }
}
