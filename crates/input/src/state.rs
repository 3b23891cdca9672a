use sidescroll_common::MoveDirection;

use crate::action::{Action, InputAction, InputEvent};

/// Held-button state between frames.
///
/// Left/right/sprint are level-triggered and re-emitted every tick. Jump is
/// edge-triggered: each press yields exactly one [`Action::Jump`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    sprint: bool,
    jump_latched: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(action) => self.set(action, true),
            InputEvent::Released(action) => self.set(action, false),
        }
    }

    fn set(&mut self, action: InputAction, down: bool) {
        match action {
            InputAction::Left => self.left = down,
            InputAction::Right => self.right = down,
            InputAction::Sprint => self.sprint = down,
            InputAction::Jump => {
                if down {
                    self.jump_latched = true;
                }
            }
        }
    }

    /// Opposing keys cancel out.
    pub fn direction(&self) -> MoveDirection {
        match (self.left, self.right) {
            (true, false) => MoveDirection::Left,
            (false, true) => MoveDirection::Right,
            _ => MoveDirection::None,
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Actions for the coming tick. Consumes a latched jump press.
    pub fn actions(&mut self) -> Vec<Action> {
        let mut out = Vec::with_capacity(3);
        if std::mem::take(&mut self.jump_latched) {
            out.push(Action::Jump);
        }
        out.push(Action::Move(self.direction()));
        out.push(Action::Sprint(self.sprint));
        out
    }
}
