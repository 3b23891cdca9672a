use glam::Vec2;
use sidescroll_common::Facing;
use sidescroll_kernel::Simulation;

use crate::sprite::PlayerSprite;

/// Everything a render host needs for one frame, copied out of the
/// simulation so drawing cannot mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub tick: u64,
    pub player_position: Vec2,
    pub player_screen_position: Vec2,
    pub facing: Facing,
    pub scale_x: f32,
    pub grounded: bool,
    pub camera_position: Vec2,
    pub camera_half_extents: Vec2,
}

impl FrameView {
    pub fn capture(sim: &Simulation) -> Self {
        let body = sim.body();
        let camera = sim.camera();
        let sprite = PlayerSprite::new(body);
        Self {
            tick: sim.tick(),
            player_position: body.position,
            player_screen_position: sprite.screen_position(camera),
            facing: body.facing,
            scale_x: sprite.scale_x(),
            grounded: sim.grounded(),
            camera_position: camera.position,
            camera_half_extents: camera.half_extents,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer only ever sees a [`FrameView`]; world truth stays with the
/// simulation.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    fn render(&self, frame: &FrameView) -> Self::Output;
}

/// Human-readable frame dump for the CLI, logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Frame (tick={}) ===\n", frame.tick));
        out.push_str(&format!(
            "Player: pos=({:.1}, {:.1}) screen=({:.1}, {:.1}) facing={:?} grounded={}\n",
            frame.player_position.x,
            frame.player_position.y,
            frame.player_screen_position.x,
            frame.player_screen_position.y,
            frame.facing,
            frame.grounded,
        ));
        let min = frame.camera_position - frame.camera_half_extents;
        let max = frame.camera_position + frame.camera_half_extents;
        out.push_str(&format!(
            "Camera: center=({:.1}, {:.1}) view=[{:.1}..{:.1}]x[{:.1}..{:.1}]\n",
            frame.camera_position.x,
            frame.camera_position.y,
            min.x,
            max.x,
            min.y,
            max.y,
        ));
        out
    }
}
