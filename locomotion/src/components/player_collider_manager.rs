use hecs::Entity;

/// The body colliders driven by an external locomotion device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColliderManager {
    /// The entity tracking the player's head
    pub head: Entity,
}
