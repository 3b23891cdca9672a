//! Camera follower: dead-zone soft follow with world clamping.
//!
//! # Invariants
//! - The camera moves only when the target leaves the dead-zone rectangle.
//! - The viewport never shows past the world edges; inverted bounds pin the
//!   camera to the world centre instead of producing an unordered clamp.

mod dead_zone;

pub use dead_zone::{
    CameraConfig, CameraState, DeadZone, clamp_to_world, follow, follow_unclamped,
};

pub fn crate_info() -> &'static str {
    "sidescroll-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
