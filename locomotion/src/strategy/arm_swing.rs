use hecs::{Entity, World};

use super::swing::{bind_swing_rig, set_swing_navigation};
use crate::{LocomotionMode, LocomotionResult, LocomotionStrategy, SpatialReferences};

/// The player swings their arms to walk, in the direction of a tracker on their hip.
///
/// Requires the rig to have an [`crate::components::ItemController`],
/// [`crate::components::CircularLimitTracking`] and a [`crate::components::CameraRig`] with a
/// hip tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArmSwing;

impl LocomotionStrategy for ArmSwing {
    fn mode(&self) -> LocomotionMode {
        LocomotionMode::ArmSwing
    }

    fn bind(&self, world: &World, rig: Entity) -> LocomotionResult<SpatialReferences> {
        let (references, _) = bind_swing_rig(self.mode(), world, rig)?;
        Ok(references)
    }

    fn enable_input(&self, world: &World, rig: Entity) {
        set_swing_navigation(world, rig, true);
    }

    fn disable_input(&self, world: &World, rig: Entity) {
        set_swing_navigation(world, rig, false);
    }
}
