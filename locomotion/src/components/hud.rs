use crate::HudController;

/// Component that places a HUD controller in the world, so a session can find it at start.
///
/// A session expects exactly one of these to exist.
pub struct Hud(pub Box<dyn HudController>);
