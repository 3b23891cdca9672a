use sidescroll_common::Facing;
use sidescroll_kernel::Simulation;

/// Read-only queries against a running simulation for debugging and logs.
pub struct SimInspector;

impl SimInspector {
    pub fn summary(sim: &Simulation) -> SimSummary {
        let body = sim.body();
        SimSummary {
            tick: sim.tick(),
            position: body.position.to_array(),
            velocity: body.velocity.to_array(),
            facing: body.facing,
            sprinting: body.sprinting,
            grounded: sim.grounded(),
            camera: sim.camera().position.to_array(),
            state_hash: sim.state_hash(),
        }
    }

    /// Distance from the player to each dead-zone edge as (left, right,
    /// bottom, top). A negative value means the player is past that edge.
    pub fn dead_zone_margins(sim: &Simulation) -> [f32; 4] {
        let cam = sim.camera();
        let dz = sim.dead_zone();
        let p = sim.body().position;
        let left = cam.position.x - cam.half_extents.x + dz.x;
        let right = cam.position.x + cam.half_extents.x - dz.x;
        let bottom = cam.position.y - cam.half_extents.y + dz.y;
        let top = cam.position.y + cam.half_extents.y - dz.y;
        [p.x - left, right - p.x, p.y - bottom, top - p.y]
    }
}

/// Snapshot of simulation state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct SimSummary {
    pub tick: u64,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub facing: Facing,
    pub sprinting: bool,
    pub grounded: bool,
    pub camera: [f32; 2],
    pub state_hash: u64,
}

impl std::fmt::Display for SimSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sim: tick={} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) facing={:?} sprint={} grounded={} camera=({:.2}, {:.2}) hash={:#018x}",
            self.tick,
            self.position[0],
            self.position[1],
            self.velocity[0],
            self.velocity[1],
            self.facing,
            self.sprinting,
            self.grounded,
            self.camera[0],
            self.camera[1],
            self.state_hash,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use sidescroll_common::{MoveDirection, WorldBounds};
    use sidescroll_input::Action;
    use sidescroll_kernel::{KinematicBody, PhysicsOracle, SimConfig};

    struct Flat;

    impl PhysicsOracle for Flat {
        fn step(&mut self, body: &mut KinematicBody) {
            body.position.x += body.velocity.x;
        }

        fn can_jump(&self) -> bool {
            true
        }
    }

    fn sim() -> Simulation {
        Simulation::new(
            &SimConfig::default(),
            WorldBounds::new(8000.0, 1200.0),
            KinematicBody::at(Vec2::new(1000.0, 300.0)),
            Box::new(Flat),
        )
    }

    #[test]
    fn summary_fresh_sim() {
        let s = sim();
        let summary = SimInspector::summary(&s);
        assert_eq!(summary.tick, 0);
        assert_eq!(summary.position, [1000.0, 300.0]);
        assert_eq!(summary.facing, Facing::Right);
        assert!(!summary.grounded);
    }

    #[test]
    fn summary_after_steps() {
        let mut s = sim();
        let left = [Action::Move(MoveDirection::Left)];
        s.step(&left);
        s.step(&left);
        let summary = SimInspector::summary(&s);
        assert_eq!(summary.tick, 2);
        assert_eq!(summary.facing, Facing::Left);
        assert_eq!(summary.position[0], 995.0);
        assert!(summary.grounded);
        assert_eq!(summary.state_hash, s.state_hash());
    }

    #[test]
    fn margins_centered_player() {
        let s = sim();
        // Camera centred on the player: 200 from each side, 180 from top/bottom.
        assert_eq!(
            SimInspector::dead_zone_margins(&s),
            [200.0, 200.0, 180.0, 180.0]
        );
    }

    #[test]
    fn summary_display() {
        let s = sim();
        let text = format!("{}", SimInspector::summary(&s));
        assert!(text.contains("tick=0"));
        assert!(text.contains("hash=0x"));
    }
}
