//! Rendering adapter: renderer-agnostic frame views over the simulation.
//!
//! # Invariants
//! - Renderers cannot mutate simulation state.
//! - Drawables compose over the kinematic body by reference.

mod renderer;
mod sprite;

pub use renderer::{DebugTextRenderer, FrameView, Renderer};
pub use sprite::PlayerSprite;

pub fn crate_info() -> &'static str {
    "sidescroll-render v0.1.0"
}
