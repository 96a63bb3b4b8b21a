use bevy_ecs::prelude::*;
use flight::{FlightController, FlightStepDebug, InputBuffer, TickTiming};
use tracing::debug;

use crate::body::{AppliedLoads, RigidBody};
use crate::config::ScriptEvent;

/// Fixed-step clock. `tick` counts completed ticks.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimClock {
    pub tick: u64,
    pub dt: f32,
}

/// Scripted input timeline, sorted by tick.
#[derive(Resource, Debug, Default)]
pub struct InputScript {
    pub events: Vec<ScriptEvent>,
    pub cursor: usize,
}

/// Flight state plus the input store its callbacks write into.
#[derive(Component, Debug)]
pub struct Pilot {
    pub controller: FlightController,
    pub input: InputBuffer,
    pub telemetry: FlightStepDebug,
}

/// Deliver every script event due at or before the current tick.
pub fn feed_script(clock: Res<SimClock>, mut script: ResMut<InputScript>, pilots: Query<&Pilot>) {
    while let Some(ev) = script.events.get(script.cursor).copied() {
        if ev.tick > clock.tick {
            break;
        }
        for pilot in &pilots {
            ev.apply(&pilot.input);
        }
        debug!(tick = clock.tick, input = ?ev.input, value = ev.value, "script input");
        script.cursor += 1;
    }
}

/// Snapshot inputs, read the orientation and compute this tick's loads.
pub fn flight_tick(
    clock: Res<SimClock>,
    mut crafts: Query<(&mut Pilot, &RigidBody, &mut AppliedLoads)>,
) {
    let timing = TickTiming::fixed(clock.dt);
    for (mut pilot, body, mut loads) in &mut crafts {
        let pilot = &mut *pilot;
        let was_boosting = pilot.telemetry.boosting;
        let inputs = pilot.input.snapshot();
        loads.0 = pilot
            .controller
            .tick_dbg(inputs, body.basis(), timing, Some(&mut pilot.telemetry));

        if pilot.telemetry.boosting != was_boosting {
            debug!(
                tick = clock.tick,
                boosting = pilot.telemetry.boosting,
                reserve = pilot.telemetry.boost_current,
                "boost state changed"
            );
        }
    }
}

pub fn integrate_bodies(clock: Res<SimClock>, mut bodies: Query<(&mut RigidBody, &AppliedLoads)>) {
    for (mut body, loads) in &mut bodies {
        body.integrate(loads.0, clock.dt);
    }
}

pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.tick += 1;
}
