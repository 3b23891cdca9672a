use crate::body::KinematicBody;

/// Authoritative physics the controller defers to.
///
/// Implementors integrate the body's position, own vertical velocity
/// (gravity, ground, ceilings, platforms) and report groundedness. The
/// controller never resolves collisions itself.
pub trait PhysicsOracle {
    /// Advance the body by one simulation step.
    fn step(&mut self, body: &mut KinematicBody);

    /// True when the body rested on a surface after the last step.
    fn can_jump(&self) -> bool;
}
