//! Developer tooling: simulation inspector.
//!
//! # Invariants
//! - Tools only read simulation state.

mod inspector;

pub use inspector::{SimInspector, SimSummary};

pub fn crate_info() -> &'static str {
    "sidescroll-tools v0.1.0"
}
