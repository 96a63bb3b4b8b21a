use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One tick's worth of control input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlInputs {
    pub thrust: f32, // -1..1 (forward/back)
    pub strafe: f32, // -1..1 (right positive)
    pub vertical: f32, // -1..1 (up positive)
    pub roll: f32,   // -1..1
    pub boost: bool,
}

#[derive(Debug, Default)]
struct Slots {
    enabled: bool,
    latest: ControlInputs,
}

/// Latest-value store written by input callbacks and read once per tick.
///
/// Clones share the same slots. Writers never wait on the tick beyond the
/// short critical section; concurrent writes to one axis resolve as
/// last-write-wins. The buffer starts disabled; while disabled every write is
/// dropped and `snapshot` reports neutral input.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    slots: Arc<Mutex<Slots>>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting input.
    pub fn enable(&self) {
        self.slots.lock().enabled = true;
    }

    /// Stop accepting input and return every axis to neutral.
    pub fn disable(&self) {
        let mut slots = self.slots.lock();
        slots.enabled = false;
        slots.latest = ControlInputs::default();
    }

    pub fn is_enabled(&self) -> bool {
        self.slots.lock().enabled
    }

    fn write(&self, f: impl FnOnce(&mut ControlInputs)) {
        let mut slots = self.slots.lock();
        if slots.enabled {
            f(&mut slots.latest);
        } else {
            tracing::trace!("input dropped while disabled");
        }
    }

    pub fn set_thrust(&self, value: f32) {
        self.write(|i| i.thrust = value);
    }

    pub fn set_strafe(&self, value: f32) {
        self.write(|i| i.strafe = value);
    }

    pub fn set_vertical(&self, value: f32) {
        self.write(|i| i.vertical = value);
    }

    pub fn set_roll(&self, value: f32) {
        self.write(|i| i.roll = value);
    }

    pub fn set_boost(&self, active: bool) {
        self.write(|i| i.boost = active);
    }

    /// Values as of the last write before this call.
    pub fn snapshot(&self) -> ControlInputs {
        self.slots.lock().latest
    }
}
