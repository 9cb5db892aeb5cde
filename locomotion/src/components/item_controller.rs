use hecs::Entity;

/// Holds the player's two hand controllers. Used to pick up and use items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemController {
    /// Left hand controller
    pub left: Entity,
    /// Right hand controller
    pub right: Entity,
}
