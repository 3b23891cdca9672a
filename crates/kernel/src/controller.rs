use serde::{Deserialize, Serialize};
use sidescroll_common::{
    ConfigError, Facing, MoveDirection, WorldBounds, check_non_negative,
};

use crate::body::KinematicBody;
use crate::oracle::PhysicsOracle;

/// Player speeds, in world units per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub base_speed: f32,
    pub sprint_speed: f32,
    pub jump_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            sprint_speed: 10.0,
            jump_speed: 10.0,
        }
    }
}

impl PlayerTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("player.base_speed", self.base_speed)?;
        check_non_negative("player.sprint_speed", self.sprint_speed)?;
        check_non_negative("player.jump_speed", self.jump_speed)?;
        Ok(())
    }

    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.base_speed
        }
    }
}

/// Drives a [`KinematicBody`] from movement intent.
///
/// Holds the grounded flag cached from the physics oracle on the last tick,
/// so a jump is decided against the same answer the previous frame saw.
#[derive(Debug, Clone)]
pub struct PlayerController {
    body: KinematicBody,
    tuning: PlayerTuning,
    grounded: bool,
}

impl PlayerController {
    pub fn new(body: KinematicBody, tuning: PlayerTuning) -> Self {
        Self {
            body,
            tuning,
            grounded: false,
        }
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    /// Mutable body access for the physics oracle.
    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Set vx from the direction and the current sprint state.
    pub fn set_movement(&mut self, direction: MoveDirection) {
        let speed = self.tuning.speed(self.body.sprinting);
        self.body.velocity.x = match direction {
            MoveDirection::Left => -speed,
            MoveDirection::Right => speed,
            MoveDirection::None => 0.0,
        };
    }

    /// Update the sprint flag and rescale a non-zero vx to the new speed.
    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.body.sprinting = sprinting;
        let vx = self.body.velocity.x;
        // The sign is only defined for a moving body; a stopped body stays at 0.
        if vx != 0.0 {
            let sign = if vx > 0.0 { 1.0 } else { -1.0 };
            self.body.velocity.x = sign * self.tuning.speed(sprinting);
        }
    }

    /// Jump if grounded. The grounded flag is cleared at once so a second
    /// press before the oracle re-evaluates is a no-op.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.body.velocity.y = self.tuning.jump_speed;
        self.grounded = false;
        tracing::debug!(vy = self.body.velocity.y, "jump");
        true
    }

    /// Post-physics bookkeeping for one step. Returns true when the body was
    /// clamped back inside the world horizontally.
    pub fn tick(&mut self, oracle: &dyn PhysicsOracle, bounds: &WorldBounds) -> bool {
        self.grounded = oracle.can_jump();

        let vx = self.body.velocity.x;
        if vx > 0.0 {
            self.body.facing = Facing::Right;
        } else if vx < 0.0 {
            self.body.facing = Facing::Left;
        }

        self.clamp_horizontal(bounds)
    }

    fn clamp_horizontal(&mut self, bounds: &WorldBounds) -> bool {
        let half = self.body.half_extents.x;
        let min = half;
        let max = bounds.width - half;
        let x = self.body.position.x;

        let target = if min > max {
            // Body wider than the world: pin it to the middle.
            Some(bounds.width * 0.5)
        } else if x < min {
            Some(min)
        } else if x > max {
            Some(max)
        } else {
            None
        };

        match target {
            Some(clamped) => {
                tracing::debug!(from = x, to = clamped, "clamped to world bounds");
                self.body.position.x = clamped;
                self.body.velocity.x = 0.0;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Oracle that reports a fixed grounded state and moves nothing.
    struct FixedOracle(bool);

    impl PhysicsOracle for FixedOracle {
        fn step(&mut self, _body: &mut KinematicBody) {}

        fn can_jump(&self) -> bool {
            self.0
        }
    }

    fn bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    fn controller() -> PlayerController {
        let body = KinematicBody::at(Vec2::new(100.0, 100.0));
        PlayerController::new(body, PlayerTuning::default())
    }

    fn grounded_controller() -> PlayerController {
        let mut c = controller();
        c.tick(&FixedOracle(true), &bounds());
        c
    }

    #[test]
    fn movement_then_sprint_matches_direction_and_speed() {
        let tuning = PlayerTuning::default();
        for (dir, sign) in [(MoveDirection::Left, -1.0), (MoveDirection::Right, 1.0)] {
            for sprint in [false, true] {
                let mut c = controller();
                c.set_movement(dir);
                c.set_sprinting(sprint);
                assert_eq!(c.body().velocity.x, sign * tuning.speed(sprint));
            }
        }
    }

    #[test]
    fn movement_uses_current_sprint_state() {
        let mut c = controller();
        c.set_sprinting(true);
        c.set_movement(MoveDirection::Left);
        assert_eq!(c.body().velocity.x, -10.0);
        c.set_movement(MoveDirection::None);
        assert_eq!(c.body().velocity.x, 0.0);
    }

    #[test]
    fn sprint_is_idempotent() {
        let mut once = controller();
        once.set_movement(MoveDirection::Left);
        once.set_sprinting(true);

        let mut twice = controller();
        twice.set_movement(MoveDirection::Left);
        twice.set_sprinting(true);
        twice.set_sprinting(true);

        assert_eq!(once.body().velocity.x, twice.body().velocity.x);
    }

    #[test]
    fn sprint_toggle_on_stopped_body_keeps_zero() {
        let mut c = controller();
        c.set_sprinting(true);
        assert_eq!(c.body().velocity.x, 0.0);
        assert!(!c.body().velocity.x.is_nan());
        assert!(c.body().sprinting);
    }

    #[test]
    fn sprint_rescale_survives_zero_base_speed() {
        let tuning = PlayerTuning {
            base_speed: 0.0,
            sprint_speed: 8.0,
            jump_speed: 10.0,
        };
        let mut c = PlayerController::new(KinematicBody::default(), tuning);
        c.set_sprinting(true);
        c.set_movement(MoveDirection::Left);
        c.set_sprinting(false);
        assert_eq!(c.body().velocity.x, 0.0);
        // Back to sprint: vx is zero, so there is no direction to recover.
        c.set_sprinting(true);
        assert_eq!(c.body().velocity.x, 0.0);
    }

    #[test]
    fn jump_is_edge_triggered() {
        let mut c = grounded_controller();
        assert!(c.jump());
        assert_eq!(c.body().velocity.y, 10.0);

        c.body_mut().velocity.y = 7.5;
        assert!(!c.jump());
        assert_eq!(c.body().velocity.y, 7.5);
    }

    #[test]
    fn jump_without_ground_is_noop() {
        let mut c = controller();
        assert!(!c.jump());
        assert_eq!(c.body().velocity.y, 0.0);
    }

    #[test]
    fn tick_refreshes_grounded_flag() {
        let mut c = grounded_controller();
        assert!(c.grounded());
        c.tick(&FixedOracle(false), &bounds());
        assert!(!c.grounded());
    }

    #[test]
    fn facing_follows_velocity_sign() {
        let mut c = controller();
        c.set_movement(MoveDirection::Left);
        c.tick(&FixedOracle(true), &bounds());
        assert_eq!(c.body().facing, Facing::Left);

        c.set_movement(MoveDirection::None);
        c.tick(&FixedOracle(true), &bounds());
        assert_eq!(c.body().facing, Facing::Left);

        c.set_movement(MoveDirection::Right);
        c.tick(&FixedOracle(true), &bounds());
        assert_eq!(c.body().facing, Facing::Right);
    }

    #[test]
    fn clamp_invariant_holds_for_any_position() {
        let w = bounds();
        for x in [-500.0, -0.1, 0.0, 0.1, 400.0, 799.9, 800.0, 800.1, 5000.0] {
            for vx in [-10.0, -5.0, 0.0, 5.0, 10.0] {
                let mut c = controller();
                c.body_mut().position.x = x;
                c.body_mut().velocity.x = vx;
                let clamped = c.tick(&FixedOracle(false), &w);

                let after = c.body().position.x;
                assert!((0.0..=w.width).contains(&after));
                let outside = !(0.0..=w.width).contains(&x);
                assert_eq!(clamped, outside);
                if outside {
                    assert_eq!(c.body().velocity.x, 0.0);
                } else {
                    assert_eq!(c.body().velocity.x, vx);
                }
            }
        }
    }

    #[test]
    fn clamp_respects_body_width() {
        let body =
            KinematicBody::at(Vec2::new(5.0, 100.0)).with_half_extents(Vec2::new(16.0, 32.0));
        let mut c = PlayerController::new(body, PlayerTuning::default());
        c.set_movement(MoveDirection::Left);
        assert!(c.tick(&FixedOracle(true), &bounds()));
        assert_eq!(c.body().position.x, 16.0);
        assert_eq!(c.body().velocity.x, 0.0);
    }

    #[test]
    fn body_wider_than_world_is_pinned_to_center() {
        let body =
            KinematicBody::at(Vec2::new(3.0, 0.0)).with_half_extents(Vec2::new(500.0, 10.0));
        let mut c = PlayerController::new(body, PlayerTuning::default());
        assert!(c.tick(&FixedOracle(true), &bounds()));
        assert_eq!(c.body().position.x, 400.0);
    }

    #[test]
    fn tuning_validation() {
        assert!(PlayerTuning::default().validate().is_ok());
        let bad = PlayerTuning {
            jump_speed: f32::INFINITY,
            ..PlayerTuning::default()
        };
        assert!(bad.validate().is_err());
    }
}
