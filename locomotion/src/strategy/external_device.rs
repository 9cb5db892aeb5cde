use hecs::{Entity, World};

use super::swing::existing;
use crate::{
    components::{ItemController, PlayerColliderManager},
    LocomotionError, LocomotionMode, LocomotionResult, LocomotionStrategy, SpatialReferences,
};

/// The player stands in an external treadmill device, which moves them through its own driver.
///
/// Requires the rig to have a [`PlayerColliderManager`]. Hands are bound if the rig also has an
/// [`ItemController`], but aren't required. The device exposes no input hook yet, so enabling
/// and disabling input does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalDevice;

impl LocomotionStrategy for ExternalDevice {
    fn mode(&self) -> LocomotionMode {
        LocomotionMode::ExternalDevice
    }

    fn bind(&self, world: &World, rig: Entity) -> LocomotionResult<SpatialReferences> {
        let mode = self.mode();
        let collider_manager = *world.get::<&PlayerColliderManager>(rig).map_err(|_| {
            LocomotionError::BindingError {
                mode,
                missing: "player collider manager",
            }
        })?;
        let camera_eye =
            existing(world, Some(collider_manager.head)).ok_or(LocomotionError::BindingError {
                mode,
                missing: "head",
            })?;

        let hands = world.get::<&ItemController>(rig).map(|c| *c).ok();

        Ok(SpatialReferences {
            primary: rig,
            left_hand: hands.and_then(|h| existing(world, Some(h.left))),
            right_hand: hands.and_then(|h| existing(world, Some(h.right))),
            left_tracker: None,
            right_tracker: None,
            directional_tracker: None,
            camera_eye,
        })
    }

    fn enable_input(&self, _world: &World, rig: Entity) {
        log::trace!("[LOCOMOTION] External device rig {rig:?} has no input hook to enable");
    }

    fn disable_input(&self, _world: &World, rig: Entity) {
        log::trace!("[LOCOMOTION] External device rig {rig:?} has no input hook to disable");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigs::add_external_device_rig;

    #[test]
    fn test_bind_external_device() {
        let mut world = World::new();
        let rig = add_external_device_rig(&mut world);

        let references = ExternalDevice.bind(&world, rig).unwrap();
        let head = world.get::<&PlayerColliderManager>(rig).unwrap().head;
        assert_eq!(references.primary, rig);
        assert_eq!(references.camera_eye, head);
        assert_eq!(references.left_tracker, None);
        assert_eq!(references.right_tracker, None);
        assert_eq!(references.directional_tracker, None);
    }

    #[test]
    fn test_bind_external_device_hands_are_optional() {
        let mut world = World::new();
        let rig = add_external_device_rig(&mut world);
        assert!(ExternalDevice.bind(&world, rig).unwrap().left_hand.is_none());

        let left = world.spawn(());
        let right = world.spawn(());
        world.insert_one(rig, ItemController { left, right }).unwrap();
        let references = ExternalDevice.bind(&world, rig).unwrap();
        assert_eq!(references.left_hand, Some(left));
        assert_eq!(references.right_hand, Some(right));
    }

    #[test]
    fn test_bind_external_device_without_collider_manager() {
        let mut world = World::new();
        let rig = world.spawn(());
        assert!(matches!(
            ExternalDevice.bind(&world, rig),
            Err(LocomotionError::BindingError {
                mode: LocomotionMode::ExternalDevice,
                missing: "player collider manager"
            })
        ));
    }
}
