use crate::Vec3f;

// Positive roll input rolls counter to the view axis.
pub(super) fn torque_roll(forward: Vec3f, roll_in: f32, roll_torque: f32, dt: f32) -> Vec3f {
    -forward * roll_in * roll_torque * dt
}

pub(super) fn sum_forces(forces: [Vec3f; 3]) -> Vec3f {
    forces.into_iter().fold(Vec3f::ZERO, |acc, f| acc + f)
}
