use hecs::Entity;

/// Component added to indicate that an entity has a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub Entity);
