use hecs::{Entity, World};

use crate::{LocomotionMode, LocomotionResult};

mod arm_swing;
mod external_device;
mod foot_swing;
mod swing;

pub use arm_swing::ArmSwing;
pub use external_device::ExternalDevice;
pub use foot_swing::FootSwing;

/// The references into the active rig that the rest of the game needs.
///
/// Which of the optional fields are filled in depends on the mode; see each strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpatialReferences {
    /// The entity carrying the rig's primary controller component
    pub primary: Entity,
    /// Left hand controller
    pub left_hand: Option<Entity>,
    /// Right hand controller
    pub right_hand: Option<Entity>,
    /// Tracker on the left foot
    pub left_tracker: Option<Entity>,
    /// Tracker on the right foot
    pub right_tracker: Option<Entity>,
    /// Tracker giving the walking direction, usually worn on the hip
    pub directional_tracker: Option<Entity>,
    /// The player's eyes
    pub camera_eye: Entity,
}

/// Everything that differs between locomotion modes.
pub trait LocomotionStrategy: Sync {
    /// The mode this strategy implements
    fn mode(&self) -> LocomotionMode;

    /// Pull this mode's references out of `rig`. Fails with
    /// [`crate::LocomotionError::BindingError`] if the rig is missing anything required.
    fn bind(&self, world: &World, rig: Entity) -> LocomotionResult<SpatialReferences>;

    /// Let the rig's input move the player
    fn enable_input(&self, world: &World, rig: Entity);

    /// Stop the rig's input from moving the player
    fn disable_input(&self, world: &World, rig: Entity);
}

/// Get the strategy for `mode`
pub fn strategy_for(mode: LocomotionMode) -> &'static dyn LocomotionStrategy {
    match mode {
        LocomotionMode::ArmSwing => &ArmSwing,
        LocomotionMode::FootSwing => &FootSwing,
        LocomotionMode::ExternalDevice => &ExternalDevice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_table_covers_every_mode() {
        for mode in LocomotionMode::ALL {
            assert_eq!(strategy_for(mode).mode(), mode);
        }
    }
}
