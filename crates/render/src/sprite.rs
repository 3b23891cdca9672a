use glam::Vec2;
use sidescroll_camera::CameraState;
use sidescroll_kernel::KinematicBody;

/// Drawable view of the player. Borrows the body instead of wrapping it, so
/// the simulation keeps sole ownership of the kinematic state.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSprite<'a> {
    body: &'a KinematicBody,
}

impl<'a> PlayerSprite<'a> {
    pub fn new(body: &'a KinematicBody) -> Self {
        Self { body }
    }

    /// Horizontal mirror factor: +1 facing right, -1 facing left.
    pub fn scale_x(&self) -> f32 {
        self.body.facing.scale_x()
    }

    /// Sprite centre relative to the bottom-left of the viewport.
    pub fn screen_position(&self, camera: &CameraState) -> Vec2 {
        self.body.position - camera.view_origin()
    }

    pub fn is_visible(&self, camera: &CameraState) -> bool {
        let p = self.screen_position(camera);
        let size = camera.half_extents * 2.0;
        let half = self.body.half_extents;
        p.x + half.x >= 0.0
            && p.x - half.x <= size.x
            && p.y + half.y >= 0.0
            && p.y - half.y <= size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidescroll_common::Facing;

    #[test]
    fn mirrors_when_facing_left() {
        let mut body = KinematicBody::default();
        assert_eq!(PlayerSprite::new(&body).scale_x(), 1.0);
        body.facing = Facing::Left;
        assert_eq!(PlayerSprite::new(&body).scale_x(), -1.0);
    }

    #[test]
    fn screen_position_is_camera_relative() {
        let body = KinematicBody::at(Vec2::new(1500.0, 100.0));
        let camera = CameraState::new(Vec2::new(1300.0, 300.0), Vec2::new(400.0, 300.0));
        let sprite = PlayerSprite::new(&body);
        assert_eq!(sprite.screen_position(&camera), Vec2::new(600.0, 100.0));
        assert!(sprite.is_visible(&camera));

        let far = KinematicBody::at(Vec2::new(5000.0, 100.0));
        assert!(!PlayerSprite::new(&far).is_visible(&camera));
    }
}
