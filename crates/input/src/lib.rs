//! Input mapping: key press/release events reduced to per-tick player actions.
//!
//! # Invariants
//! - The controller only ever sees [`Action`]s, never key names.
//! - One jump press produces one jump action regardless of how long it is held.

pub mod action;
pub mod bindings;
pub mod script;
pub mod state;

pub use action::{Action, InputAction, InputEvent};
pub use bindings::KeyBindings;
pub use script::{DEMO_SCRIPT, InputScript, ScriptError};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "sidescroll-input v0.1.0"
}
