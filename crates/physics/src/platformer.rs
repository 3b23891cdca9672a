use glam::Vec2;
use sidescroll_common::Aabb;
use sidescroll_kernel::{KinematicBody, PhysicsOracle};

/// Penetration below this depth on the cross axis is treated as touching,
/// so a body sliding along a surface is not pushed sideways by rounding.
const CONTACT_EPSILON: f32 = 1e-3;

/// Gravity plus axis-separated AABB contacts against static platforms.
///
/// Each step moves the body horizontally and resolves, then vertically and
/// resolves. Landing on a platform top (or the world floor at y = 0) marks
/// the body grounded until the next step.
#[derive(Debug, Clone)]
pub struct PlatformerPhysics {
    gravity: f32,
    platforms: Vec<Aabb>,
    grounded: bool,
}

impl PlatformerPhysics {
    pub fn new(gravity: f32, platforms: Vec<Aabb>) -> Self {
        Self {
            gravity,
            platforms,
            grounded: false,
        }
    }

    pub fn platforms(&self) -> &[Aabb] {
        &self.platforms
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    fn resolve_horizontal(&self, body: &mut KinematicBody) {
        for platform in &self.platforms {
            let Some(depth) = penetration(&body.aabb(), platform) else {
                continue;
            };
            if depth.y <= CONTACT_EPSILON {
                continue;
            }
            if body.position.x < platform.center.x {
                body.position.x = platform.left() - body.half_extents.x;
            } else {
                body.position.x = platform.right() + body.half_extents.x;
            }
            body.velocity.x = 0.0;
        }
    }

    fn resolve_vertical(&mut self, body: &mut KinematicBody) {
        for platform in &self.platforms {
            let Some(depth) = penetration(&body.aabb(), platform) else {
                continue;
            };
            if depth.x <= CONTACT_EPSILON {
                continue;
            }
            if body.velocity.y <= 0.0 {
                body.position.y = platform.top() + body.half_extents.y;
                self.grounded = true;
            } else {
                body.position.y = platform.bottom() - body.half_extents.y;
                tracing::trace!(y = body.position.y, "hit ceiling");
            }
            body.velocity.y = 0.0;
        }

        if body.position.y - body.half_extents.y < 0.0 {
            body.position.y = body.half_extents.y;
            body.velocity.y = 0.0;
            self.grounded = true;
        }
    }
}

impl PhysicsOracle for PlatformerPhysics {
    fn step(&mut self, body: &mut KinematicBody) {
        self.grounded = false;
        body.velocity.y -= self.gravity;

        body.position.x += body.velocity.x;
        self.resolve_horizontal(body);

        body.position.y += body.velocity.y;
        self.resolve_vertical(body);
    }

    fn can_jump(&self) -> bool {
        self.grounded
    }
}

/// Overlap depth on each axis, or None when the boxes are apart or touching.
fn penetration(a: &Aabb, b: &Aabb) -> Option<Vec2> {
    if !a.intersects(b) {
        return None;
    }
    let x = a.right().min(b.right()) - a.left().max(b.left());
    let y = a.top().min(b.top()) - a.bottom().max(b.bottom());
    Some(Vec2::new(x, y))
}
