use glam::Vec2;
use serde::{Deserialize, Serialize};
use sidescroll_common::{Aabb, Facing};

/// The player's kinematic state.
///
/// Plain data: the controller writes velocity intent, facing and the sprint
/// flag; the physics oracle integrates position and owns vertical velocity.
/// Renderers hold a reference to it rather than wrapping it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Collision half size. Zero makes the body a point.
    pub half_extents: Vec2,
    pub facing: Facing,
    pub sprinting: bool,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            half_extents: Vec2::ZERO,
            facing: Facing::Right,
            sprinting: false,
        }
    }
}

impl KinematicBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_half_extents(mut self, half_extents: Vec2) -> Self {
        self.half_extents = half_extents;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest_facing_right() {
        let b = KinematicBody::at(Vec2::new(100.0, 100.0));
        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(b.facing, Facing::Right);
        assert!(!b.sprinting);
    }

    #[test]
    fn aabb_follows_position() {
        let b =
            KinematicBody::at(Vec2::new(10.0, 40.0)).with_half_extents(Vec2::new(16.0, 32.0));
        let bb = b.aabb();
        assert_eq!(bb.left(), -6.0);
        assert_eq!(bb.top(), 72.0);
    }
}
