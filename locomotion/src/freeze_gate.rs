use crate::HudController;

/// Whatever actually moves the player. The [`FreezeGate`] switches it on and off.
pub trait LocomotionInput {
    /// Allow movement input to move the player
    fn enable_locomotion_input(&mut self);
    /// Stop movement input from moving the player
    fn disable_locomotion_input(&mut self);
}

/// The state a session starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezePolicy {
    /// The player can move straight away
    StartActive,
    /// The player can't move until something releases them
    StartFrozen,
}

impl FreezePolicy {
    /// Does this policy start the player frozen?
    pub fn starts_frozen(self) -> bool {
        self == FreezePolicy::StartFrozen
    }
}

impl Default for FreezePolicy {
    /// Development builds start active; anything else starts frozen, so a player is never moved
    /// before the experience is ready for them.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            FreezePolicy::StartActive
        } else {
            FreezePolicy::StartFrozen
        }
    }
}

/// Gates whether movement input can move the player.
///
/// Every change of state switches the [`LocomotionInput`] first, then tells the HUD (if there is
/// one). Setting the state it's already in does nothing.
#[derive(Debug, Clone, Default)]
pub struct FreezeGate {
    frozen: bool,
}

impl FreezeGate {
    /// Create a gate in the given state. No side effects are run.
    pub fn new(frozen: bool) -> Self {
        Self { frozen }
    }

    /// Is the player currently frozen?
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freeze or release the player. Returns true if the state changed.
    pub fn set_frozen(
        &mut self,
        frozen: bool,
        input: &mut dyn LocomotionInput,
        hud: Option<&mut dyn HudController>,
    ) -> bool {
        if frozen == self.frozen {
            return false;
        }
        self.frozen = frozen;

        if frozen {
            input.disable_locomotion_input();
        } else {
            input.enable_locomotion_input();
        }

        match hud {
            Some(hud) if frozen => hud.show_freeze_indicator(),
            Some(hud) => hud.hide_freeze_indicator(),
            None => log::trace!("[LOCOMOTION_FREEZE] No HUD attached, skipping indicator"),
        }

        log::debug!("[LOCOMOTION_FREEZE] Player is now {}", if frozen { "frozen" } else { "active" });
        true
    }

    /// Flip the current state
    pub fn toggle(
        &mut self,
        input: &mut dyn LocomotionInput,
        hud: Option<&mut dyn HudController>,
    ) -> bool {
        self.set_frozen(!self.frozen, input, hud)
    }
}
