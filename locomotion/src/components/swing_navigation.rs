use hecs::{Entity, World};

use super::Parent;

/// The input hook of a swing rig. While `enabled` is false the swing detector keeps running but
/// must not move the player.
///
/// Lives on the rig root or anywhere beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingNavigation {
    /// Is swinging currently allowed to move the player?
    pub enabled: bool,
}

impl Default for SwingNavigation {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Parent chains longer than this are treated as cycles
const MAX_DEPTH: usize = 64;

/// Find the entity carrying the [`SwingNavigation`] for `rig`: the rig itself, or the first
/// entity anywhere beneath it that has one.
pub fn find_swing_navigation(world: &World, rig: Entity) -> Option<Entity> {
    if world.get::<&SwingNavigation>(rig).is_ok() {
        return Some(rig);
    }

    let mut query = world.query::<(&Parent, &SwingNavigation)>();
    let descendant = query
        .iter()
        .find(|(_, (parent, _))| is_descendant_of(world, parent.0, rig))
        .map(|(entity, _)| entity);
    descendant
}

/// Is `entity` either `ancestor` or somewhere beneath it?
fn is_descendant_of(world: &World, mut entity: Entity, ancestor: Entity) -> bool {
    for _ in 0..MAX_DEPTH {
        if entity == ancestor {
            return true;
        }
        match world.get::<&Parent>(entity) {
            Ok(parent) => entity = parent.0,
            Err(_) => return false,
        }
    }
    false
}
