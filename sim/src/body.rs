use bevy_ecs::prelude::*;
use flight::{Basis, FlightOutput, Quatf, Vec3f};

use crate::config::BodyConfig;

/// Point-mass rigid body with uniform inertia and no gravity.
///
/// Frame conventions: world axes +Z forward, +Y up, +X right; `orientation`
/// is body→world. Angular velocity is kept in world frame.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub mass: f32,
    pub inertia: f32,
    pub position: Vec3f,
    pub velocity: Vec3f,
    pub orientation: Quatf,
    pub angular_velocity: Vec3f,
}

impl RigidBody {
    pub fn at_rest(cfg: BodyConfig) -> Self {
        Self {
            mass: cfg.mass,
            inertia: cfg.inertia,
            position: Vec3f::ZERO,
            velocity: Vec3f::ZERO,
            orientation: Quatf::IDENTITY,
            angular_velocity: Vec3f::ZERO,
        }
    }

    /// Orientation source for the controller. The view is locked to the hull.
    pub fn basis(&self) -> Basis {
        Basis::from_orientation(self.orientation)
    }

    /// Semi-implicit Euler step under one tick's additive loads.
    pub fn integrate(&mut self, loads: FlightOutput, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.velocity += loads.force * (dt / self.mass);
        self.position += self.velocity * dt;

        self.angular_velocity += loads.torque * (dt / self.inertia);
        let delta = Quatf::from_scaled_axis(self.angular_velocity * dt);
        self.orientation = (delta * self.orientation).normalize();
    }
}

/// Loads produced by the controller this tick, consumed by the integrator.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AppliedLoads(pub FlightOutput);

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> RigidBody {
        RigidBody::at_rest(BodyConfig { mass: 2.0, inertia: 4.0 })
    }

    #[test]
    fn force_accelerates_by_inverse_mass() {
        let mut b = body();
        let loads = FlightOutput { force: Vec3f::new(0.0, 0.0, 4.0), torque: Vec3f::ZERO };
        b.integrate(loads, 0.5);
        assert!((b.velocity.z - 1.0).abs() < 1e-6);
        assert!((b.position.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn velocity_persists_without_load() {
        let mut b = body();
        b.velocity = Vec3f::X;
        b.integrate(FlightOutput::default(), 1.0);
        b.integrate(FlightOutput::default(), 1.0);
        assert!((b.position.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn torque_about_forward_rolls_the_basis() {
        let mut b = body();
        let loads = FlightOutput { force: Vec3f::ZERO, torque: Vec3f::new(0.0, 0.0, 40.0) };
        b.integrate(loads, 0.1);
        // omega = 1 rad/s about +Z, rotated 0.1 rad
        let basis = b.basis();
        assert!((basis.forward - Vec3f::Z).length() < 1e-5, "roll keeps forward");
        assert!(basis.up.x < 0.0, "positive Z rotation tips up toward -X");
        assert!((basis.up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut b = body();
        let loads = FlightOutput { force: Vec3f::ONE, torque: Vec3f::ONE };
        b.integrate(loads, 0.0);
        assert_eq!(b, body());
    }
}
