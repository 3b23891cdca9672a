use serde::{Deserialize, Serialize};
use sidescroll_common::MoveDirection;

/// A per-tick command for the player controller.
///
/// The kernel consumes actions, never raw key events. Any input source
/// (keyboard, scripted replay, tests) reduces to the same action stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Set horizontal movement intent for this tick.
    Move(MoveDirection),
    /// Set whether the sprint modifier is held.
    Sprint(bool),
    /// Request a jump. Ignored by the controller unless grounded.
    Jump,
}

/// Logical button the player can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputAction {
    Left,
    Right,
    Jump,
    Sprint,
}

/// Discrete press/release edge for a logical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(InputAction),
    Released(InputAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_move_is_constructible() {
        let a = Action::Move(MoveDirection::Right);
        assert!(matches!(a, Action::Move(MoveDirection::Right)));
    }

    #[test]
    fn events_carry_their_action() {
        let e = InputEvent::Pressed(InputAction::Jump);
        assert!(matches!(e, InputEvent::Pressed(InputAction::Jump)));
        assert_ne!(e, InputEvent::Released(InputAction::Jump));
    }
}
