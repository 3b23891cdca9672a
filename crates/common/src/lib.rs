//! Shared value types for the sidescroll core: movement intent, facing,
//! world bounds, boxes, and configuration errors.

pub mod error;
pub mod types;

pub use error::{ConfigError, check_non_negative, check_positive};
pub use types::{Aabb, Facing, MoveDirection, WorldBounds};
