//! Reference physics oracle and built-in levels.
//!
//! The kernel only knows the [`sidescroll_kernel::PhysicsOracle`] seam; this
//! crate supplies gravity, platform contacts and the tile placement loops
//! the demos run on.

mod level;
mod platformer;

pub use level::{LevelKind, LevelLayout, TILE_SIZE};
pub use platformer::PlatformerPhysics;

pub fn crate_info() -> &'static str {
    "sidescroll-physics v0.1.0"
}
