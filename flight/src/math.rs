pub use bevy_math::{Quat as Quatf, Vec3 as Vec3f};

// Body basis: standard RHS with +Z forward, +Y up, +X right
pub const BODY_FWD: Vec3f = Vec3f::new(0.0, 0.0, 1.0);
pub const BODY_RIGHT: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
pub const BODY_UP: Vec3f = Vec3f::new(0.0, 1.0, 0.0);
