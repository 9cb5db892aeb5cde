//! Shared plumbing for the two swing rigs.

use hecs::{Entity, World};

use crate::{
    components::{
        swing_navigation::find_swing_navigation, CameraRig, CircularLimitTracking, ItemController,
        SwingNavigation,
    },
    LocomotionError, LocomotionMode, LocomotionResult, SpatialReferences,
};

/// Bind everything both swing rigs have: hands, eye and hip tracker.
pub(super) fn bind_swing_rig(
    mode: LocomotionMode,
    world: &World,
    rig: Entity,
) -> LocomotionResult<(SpatialReferences, CameraRig)> {
    let missing = |missing| LocomotionError::BindingError { mode, missing };

    let item_controller = *world
        .get::<&ItemController>(rig)
        .map_err(|_| missing("item controller"))?;
    let circular_limit_tracking = *world
        .get::<&CircularLimitTracking>(rig)
        .map_err(|_| missing("circular limit tracking"))?;
    let camera_rig = *world
        .get::<&CameraRig>(rig)
        .map_err(|_| missing("camera rig"))?;

    let hip_tracker = existing(world, camera_rig.hip_tracker).ok_or_else(|| missing("hip tracker"))?;
    let left = existing(world, Some(item_controller.left)).ok_or_else(|| missing("left controller"))?;
    let right =
        existing(world, Some(item_controller.right)).ok_or_else(|| missing("right controller"))?;
    let camera_eye = existing(world, Some(circular_limit_tracking.camera_eye))
        .ok_or_else(|| missing("camera eye"))?;
    find_swing_navigation(world, rig).ok_or_else(|| missing("swing navigation"))?;

    let references = SpatialReferences {
        primary: rig,
        left_hand: Some(left),
        right_hand: Some(right),
        left_tracker: None,
        right_tracker: None,
        directional_tracker: Some(hip_tracker),
        camera_eye,
    };

    Ok((references, camera_rig))
}

/// `entity`, if it is set and still alive
pub(super) fn existing(world: &World, entity: Option<Entity>) -> Option<Entity> {
    entity.filter(|e| world.contains(*e))
}

/// Switch the swing navigation hook on the rig (or one of its descendants) on or off.
pub(super) fn set_swing_navigation(world: &World, rig: Entity, enabled: bool) {
    let Some(hook) = find_swing_navigation(world, rig) else {
        log::warn!("[LOCOMOTION] Rig {rig:?} has no swing navigation to switch");
        return;
    };

    if let Ok(mut swing_navigation) = world.get::<&mut SwingNavigation>(hook) {
        swing_navigation.enabled = enabled;
    }
}
