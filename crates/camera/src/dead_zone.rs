use glam::Vec2;
use serde::{Deserialize, Serialize};
use sidescroll_common::{ConfigError, WorldBounds, check_non_negative, check_positive};

/// Margins inset from each viewport edge. The rectangle left inside is the
/// region where the tracked target may move without moving the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadZone {
    pub x: f32,
    pub y: f32,
}

impl DeadZone {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for DeadZone {
    fn default() -> Self {
        Self { x: 200.0, y: 120.0 }
    }
}

/// Camera tunables: viewport size in world units and the dead-zone margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub viewport: Vec2,
    pub dead_zone: DeadZone,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(800.0, 600.0),
            dead_zone: DeadZone::default(),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("camera.viewport.x", self.viewport.x)?;
        check_positive("camera.viewport.y", self.viewport.y)?;
        check_non_negative("camera.dead_zone.x", self.dead_zone.x)?;
        check_non_negative("camera.dead_zone.y", self.dead_zone.y)?;
        Ok(())
    }

    pub fn half_extents(&self) -> Vec2 {
        self.viewport * 0.5
    }
}

/// Camera centre plus viewport half extents, owned by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl CameraState {
    pub fn new(position: Vec2, half_extents: Vec2) -> Self {
        Self {
            position,
            half_extents,
        }
    }

    /// Camera centred on `target`, then pulled back inside the world.
    pub fn centered_on(target: Vec2, half_extents: Vec2, bounds: &WorldBounds) -> Self {
        let mut cam = Self::new(target, half_extents);
        cam.position = clamp_to_world(cam.position, half_extents, bounds);
        cam
    }

    /// Apply [`follow`] in place. Returns true if the camera moved.
    pub fn update(&mut self, target: Vec2, dead_zone: &DeadZone, bounds: &WorldBounds) -> bool {
        let next = follow(self, target, dead_zone, bounds);
        let moved = next != self.position;
        if moved {
            tracing::trace!(
                from_x = self.position.x,
                from_y = self.position.y,
                to_x = next.x,
                to_y = next.y,
                "camera moved"
            );
        }
        self.position = next;
        moved
    }

    /// Bottom-left corner of the visible region.
    pub fn view_origin(&self) -> Vec2 {
        self.position - self.half_extents
    }
}

/// Soft-follow the target, then clamp the viewport inside the world.
///
/// The camera moves only by the distance the target has left the dead-zone
/// rectangle, so it re-settles with the target on the rectangle edge. The
/// world clamp runs every call, including when the target is inside.
pub fn follow(
    camera: &CameraState,
    target: Vec2,
    dead_zone: &DeadZone,
    bounds: &WorldBounds,
) -> Vec2 {
    let unclamped = follow_unclamped(camera, target, dead_zone);
    clamp_to_world(unclamped, camera.half_extents, bounds)
}

/// Dead-zone step only. Returns the input position unchanged when the
/// target lies inside the rectangle.
pub fn follow_unclamped(camera: &CameraState, target: Vec2, dead_zone: &DeadZone) -> Vec2 {
    Vec2::new(
        follow_axis(camera.position.x, camera.half_extents.x, dead_zone.x, target.x),
        follow_axis(camera.position.y, camera.half_extents.y, dead_zone.y, target.y),
    )
}

/// Keep the viewport inside `bounds`. An axis where the viewport is larger
/// than the world is pinned to the world centre on that axis.
pub fn clamp_to_world(position: Vec2, half_extents: Vec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        clamp_axis(position.x, half_extents.x, bounds.width),
        clamp_axis(position.y, half_extents.y, bounds.height),
    )
}

fn follow_axis(center: f32, half: f32, margin: f32, target: f32) -> f32 {
    let mut low = center - half + margin;
    let mut high = center + half - margin;
    // Margins wider than the viewport collapse to a single tracking line.
    if low > high {
        let mid = (low + high) * 0.5;
        low = mid;
        high = mid;
    }

    if target < low {
        center - (low - target)
    } else if target > high {
        center + (target - high)
    } else {
        center
    }
}

fn clamp_axis(value: f32, half: f32, extent: f32) -> f32 {
    let min = half;
    let max = extent - half;
    if min > max {
        return extent * 0.5;
    }
    value.clamp(min, max)
}
