use glam::Vec2;
use sidescroll_common::{Aabb, WorldBounds};
use sidescroll_kernel::{KinematicBody, SimConfig, Simulation};

use crate::platformer::PlatformerPhysics;

/// Edge length of a ground tile in world units.
pub const TILE_SIZE: f32 = 64.0;

const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(16.0, 32.0);

/// Which built-in level to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelKind {
    #[default]
    SingleScreen,
    Scrolling,
}

impl LevelKind {
    pub fn layout(self) -> LevelLayout {
        match self {
            LevelKind::SingleScreen => LevelLayout::single_screen(),
            LevelKind::Scrolling => LevelLayout::scrolling(),
        }
    }
}

/// Static geometry and spawn point for one level.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub name: &'static str,
    pub bounds: WorldBounds,
    pub spawn: Vec2,
    pub platforms: Vec<Aabb>,
}

fn tile(x: f32, y: f32) -> Aabb {
    Aabb::new(Vec2::new(x, y), Vec2::splat(TILE_SIZE * 0.5))
}

/// A row of tiles whose centres start at `from` and stop before `to`.
fn tile_row(from: f32, to: f32, y: f32) -> impl Iterator<Item = Aabb> {
    let count = ((to - from) / TILE_SIZE).ceil().max(0.0) as usize;
    (0..count).map(move |i| tile(from + i as f32 * TILE_SIZE, y))
}

impl LevelLayout {
    /// One screen: a ground strip and a short two-tile pillar to hop over.
    pub fn single_screen() -> Self {
        let mut platforms: Vec<Aabb> = tile_row(0.0, 900.0, 32.0).collect();
        platforms.push(tile(600.0, 100.0));
        platforms.push(tile(600.0, 160.0));
        Self {
            name: "single-screen",
            bounds: WorldBounds::new(800.0, 600.0),
            spawn: Vec2::new(100.0, 100.0),
            platforms,
        }
    }

    /// A long level with continuous ground and a repeating staircase of
    /// three-tile ledges, wide and tall enough for the camera to scroll.
    pub fn scrolling() -> Self {
        let bounds = WorldBounds::new(8000.0, 1200.0);
        let mut platforms: Vec<Aabb> =
            tile_row(0.0, bounds.width + TILE_SIZE, 32.0).collect();

        let mut x = 600.0;
        let mut step = 0;
        while x + 2.0 * TILE_SIZE < bounds.width {
            let y = 180.0 + (step % 4) as f32 * 90.0;
            platforms.extend(tile_row(x, x + 3.0 * TILE_SIZE, y));
            x += 400.0;
            step += 1;
        }

        Self {
            name: "scrolling",
            bounds,
            spawn: Vec2::new(100.0, 100.0),
            platforms,
        }
    }

    pub fn spawn_body(&self) -> KinematicBody {
        KinematicBody::at(self.spawn).with_half_extents(PLAYER_HALF_EXTENTS)
    }

    pub fn physics(&self, gravity: f32) -> PlatformerPhysics {
        PlatformerPhysics::new(gravity, self.platforms.clone())
    }

    /// Assemble a ready-to-step simulation for this level.
    pub fn build(&self, config: &SimConfig) -> Simulation {
        tracing::info!(
            level = self.name,
            platforms = self.platforms.len(),
            "building level"
        );
        Simulation::new(
            config,
            self.bounds,
            self.spawn_body(),
            Box::new(self.physics(config.gravity)),
        )
    }
}
