//! Headless host for the flight controller.
//!
//! Stands in for the engine side: a scripted input source writing into the
//! controller's input buffer, a hull-locked orientation source and a simple
//! rigid-body integrator, all driven once per fixed tick by a `bevy_ecs`
//! schedule.

use anyhow::{Context, Result};
use bevy_ecs::prelude::*;
use flight::{FlightController, FlightStepDebug, InputBuffer, Vec3f};
use tracing::info;

pub mod args;
pub mod body;
pub mod config;
pub mod systems;

pub use args::Args;
pub use body::{AppliedLoads, RigidBody};
pub use config::{load_config, BodyConfig, Config, ScriptEvent, ScriptInput};
use systems::{advance_clock, feed_script, flight_tick, integrate_bodies, InputScript, Pilot, SimClock};

/// Summary of a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightReport {
    pub ticks: u64,
    pub position: Vec3f,
    pub velocity: Vec3f,
    pub peak_speed: f32,
    pub boost_ticks: u64,
    pub min_boost: f32,
}

pub struct Sim {
    world: World,
    schedule: Schedule,
    craft: Entity,
}

pub fn build_sim(cfg: Config) -> Result<Sim> {
    cfg.validate()?;
    let controller =
        FlightController::new(cfg.flight.clone()).context("building flight controller")?;
    let input = InputBuffer::new();
    input.enable();

    let mut world = World::new();
    world.insert_resource(SimClock { tick: 0, dt: cfg.dt() });
    world.insert_resource(InputScript { events: cfg.script.clone(), cursor: 0 });
    let craft = world
        .spawn((
            Pilot { controller, input, telemetry: FlightStepDebug::default() },
            RigidBody::at_rest(cfg.body),
            AppliedLoads::default(),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((feed_script, flight_tick, integrate_bodies, advance_clock).chain());

    Ok(Sim { world, schedule, craft })
}

impl Sim {
    /// Run exactly one fixed tick.
    pub fn step(&mut self) {
        self.schedule.run(&mut self.world);
    }

    pub fn run(&mut self, ticks: u64, log_every: u64) -> FlightReport {
        let mut report = FlightReport {
            min_boost: self.controller().boost().current(),
            ..Default::default()
        };
        for _ in 0..ticks {
            self.step();

            let body = self.body();
            let (position, velocity) = (body.position, body.velocity);
            let telemetry = self.telemetry();
            report.ticks += 1;
            report.peak_speed = report.peak_speed.max(velocity.length());
            report.min_boost = report.min_boost.min(telemetry.boost_current);
            if telemetry.boosting {
                report.boost_ticks += 1;
            }
            if log_every > 0 && self.tick() % log_every == 0 {
                info!(
                    tick = self.tick(),
                    pos = ?position,
                    speed = velocity.length(),
                    boost = telemetry.boost_current,
                    thrust_glide = telemetry.thrust_glide,
                    "flight"
                );
            }
        }
        let body = self.body();
        report.position = body.position;
        report.velocity = body.velocity;
        report
    }

    /// Input store for writing controls from outside the script.
    pub fn input(&self) -> InputBuffer {
        self.pilot().input.clone()
    }

    pub fn tick(&self) -> u64 {
        self.world.resource::<SimClock>().tick
    }

    pub fn body(&self) -> &RigidBody {
        self.world.get::<RigidBody>(self.craft).expect("craft has a body")
    }

    pub fn telemetry(&self) -> FlightStepDebug {
        self.pilot().telemetry
    }

    pub fn controller(&self) -> &FlightController {
        &self.pilot().controller
    }

    fn pilot(&self) -> &Pilot {
        self.world.get::<Pilot>(self.craft).expect("craft has a pilot")
    }
}
