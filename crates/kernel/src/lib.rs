//! Simulation kernel: player controller, the physics oracle seam, and the
//! explicitly constructed simulation context.
//!
//! # Invariants
//! - After every controller tick the body lies inside the world horizontally;
//!   a clamp also zeroes horizontal velocity.
//! - Sprint rescaling preserves the sign of a moving body and never divides
//!   by zero.
//! - One accepted jump per grounded contact.

pub mod body;
pub mod config;
pub mod controller;
pub mod oracle;
pub mod sim;

pub use body::KinematicBody;
pub use config::SimConfig;
pub use controller::{PlayerController, PlayerTuning};
pub use oracle::PhysicsOracle;
pub use sim::{Simulation, StepReport};

pub fn crate_info() -> &'static str {
    "sidescroll-kernel v0.1.0"
}
