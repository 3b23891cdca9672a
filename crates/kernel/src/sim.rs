use sidescroll_camera::{CameraState, DeadZone};
use sidescroll_common::{Facing, WorldBounds};
use sidescroll_input::Action;

use crate::body::KinematicBody;
use crate::config::SimConfig;
use crate::controller::PlayerController;
use crate::oracle::PhysicsOracle;

/// What happened during one [`Simulation::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub tick: u64,
    /// A jump action was accepted.
    pub jumped: bool,
    /// The body went from airborne to grounded.
    pub landed: bool,
    /// The body was pushed back inside the world horizontally.
    pub clamped: bool,
    pub camera_moved: bool,
}

/// One level's session state, passed explicitly to whoever drives the frame
/// loop. There is no global game object.
///
/// The simulation owns the player, the camera and the physics oracle. Render
/// hosts read it through the accessors and never mutate it.
pub struct Simulation {
    player: PlayerController,
    camera: CameraState,
    dead_zone: DeadZone,
    bounds: WorldBounds,
    oracle: Box<dyn PhysicsOracle>,
    tick: u64,
}

impl Simulation {
    /// Start a session with the camera centred on the body, clamped to the world.
    pub fn new(
        config: &SimConfig,
        bounds: WorldBounds,
        body: KinematicBody,
        oracle: Box<dyn PhysicsOracle>,
    ) -> Self {
        let camera =
            CameraState::centered_on(body.position, config.camera.half_extents(), &bounds);
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            x = body.position.x,
            y = body.position.y,
            "simulation created"
        );
        Self {
            player: PlayerController::new(body, config.player),
            camera,
            dead_zone: config.camera.dead_zone,
            bounds,
            oracle,
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn body(&self) -> &KinematicBody {
        self.player.body()
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn dead_zone(&self) -> &DeadZone {
        &self.dead_zone
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn grounded(&self) -> bool {
        self.player.grounded()
    }

    /// Advance one frame.
    ///
    /// Order: jumps (against last tick's grounded flag), physics, movement
    /// and sprint in the order given, controller bookkeeping, camera follow.
    pub fn step(&mut self, actions: &[Action]) -> StepReport {
        let _span = tracing::info_span!("sim_step", tick = self.tick + 1).entered();
        let mut report = StepReport::default();

        for action in actions {
            if matches!(action, Action::Jump) {
                report.jumped |= self.player.jump();
            }
        }
        let airborne = !self.player.grounded();

        self.oracle.step(self.player.body_mut());

        for action in actions {
            match *action {
                Action::Move(direction) => self.player.set_movement(direction),
                Action::Sprint(sprinting) => self.player.set_sprinting(sprinting),
                Action::Jump => {}
            }
        }

        report.clamped = self.player.tick(self.oracle.as_ref(), &self.bounds);
        report.landed = airborne && self.player.grounded();
        if report.landed {
            tracing::debug!(y = self.body().position.y, "landed");
        }

        report.camera_moved =
            self.camera
                .update(self.player.body().position, &self.dead_zone, &self.bounds);

        self.tick += 1;
        report.tick = self.tick;

        let body = self.player.body();
        tracing::trace!(
            x = body.position.x,
            y = body.position.y,
            vx = body.velocity.x,
            vy = body.velocity.y,
            cam_x = self.camera.position.x,
            cam_y = self.camera.position.y,
            "step complete"
        );
        report
    }

    /// Deterministic hash of the session state, for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let body = self.player.body();
        mix(&mut h, &self.tick.to_le_bytes());
        for v in [
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            self.camera.position.x,
            self.camera.position.y,
        ] {
            mix(&mut h, &v.to_le_bytes());
        }
        mix(
            &mut h,
            &[
                (body.facing == Facing::Right) as u8,
                body.sprinting as u8,
                self.player.grounded() as u8,
            ],
        );
        h
    }
}
