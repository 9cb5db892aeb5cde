use hecs::{Entity, World};

use super::swing::{bind_swing_rig, existing, set_swing_navigation};
use crate::{LocomotionError, LocomotionMode, LocomotionResult, LocomotionStrategy, SpatialReferences};

/// The player swings their feet, each wearing a tracker, to walk.
///
/// Requires everything [`super::ArmSwing`] does, plus a tracker on each foot in the
/// [`crate::components::CameraRig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FootSwing;

impl LocomotionStrategy for FootSwing {
    fn mode(&self) -> LocomotionMode {
        LocomotionMode::FootSwing
    }

    fn bind(&self, world: &World, rig: Entity) -> LocomotionResult<SpatialReferences> {
        let mode = self.mode();
        let (mut references, camera_rig) = bind_swing_rig(mode, world, rig)?;

        references.left_tracker = Some(
            existing(world, camera_rig.left_foot_tracker).ok_or(LocomotionError::BindingError {
                mode,
                missing: "left foot tracker",
            })?,
        );
        references.right_tracker = Some(
            existing(world, camera_rig.right_foot_tracker).ok_or(LocomotionError::BindingError {
                mode,
                missing: "right foot tracker",
            })?,
        );

        Ok(references)
    }

    fn enable_input(&self, world: &World, rig: Entity) {
        set_swing_navigation(world, rig, true);
    }

    fn disable_input(&self, world: &World, rig: Entity) {
        set_swing_navigation(world, rig, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{CameraRig, ItemController},
        rigs::add_foot_swing_rig,
    };

    #[test]
    fn test_bind_foot_swing() {
        let mut world = World::new();
        let rig = add_foot_swing_rig(&mut world);

        let references = FootSwing.bind(&world, rig).unwrap();
        let camera_rig = *world.get::<&CameraRig>(rig).unwrap();
        assert_eq!(references.left_tracker, camera_rig.left_foot_tracker);
        assert_eq!(references.right_tracker, camera_rig.right_foot_tracker);
        assert_eq!(references.directional_tracker, camera_rig.hip_tracker);
        assert!(references.left_tracker.is_some());
        assert!(references.right_tracker.is_some());
        assert!(references.left_hand.is_some());
    }

    #[test]
    fn test_bind_foot_swing_missing_pieces() {
        let mut world = World::new();
        let rig = add_foot_swing_rig(&mut world);
        let mut camera_rig = *world.get::<&CameraRig>(rig).unwrap();
        camera_rig.right_foot_tracker = None;
        world.insert_one(rig, camera_rig).unwrap();

        assert!(matches!(
            FootSwing.bind(&world, rig),
            Err(LocomotionError::BindingError { missing: "right foot tracker", .. })
        ));

        world.remove_one::<ItemController>(rig).unwrap();
        assert!(matches!(
            FootSwing.bind(&world, rig),
            Err(LocomotionError::BindingError { missing: "item controller", .. })
        ));
    }
}
