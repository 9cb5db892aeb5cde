use hecs::Entity;

/// Keeps the player's head inside a circular play area. Swing rigs carry this, and it owns the
/// reference to the camera eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularLimitTracking {
    /// The entity tracking the player's eyes
    pub camera_eye: Entity,
}
