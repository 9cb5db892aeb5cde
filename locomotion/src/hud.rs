use hecs::Entity;

/// The in-headset HUD, as seen by a locomotion session.
///
/// The session only tells the HUD when the player has been frozen or released, and which entity
/// is the player's eye so the HUD can render in front of it. Everything else about the HUD is up
/// to the application.
pub trait HudController: Send + Sync + 'static {
    /// The player has been frozen: show something that says so
    fn show_freeze_indicator(&mut self);

    /// The player can move again
    fn hide_freeze_indicator(&mut self);

    /// Render the HUD from the point of view of `eye`
    fn configure_camera(&mut self, eye: Entity);
}
