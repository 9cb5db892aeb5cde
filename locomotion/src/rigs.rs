use glam::Vec3;
use hecs::{Entity, World};

use crate::{
    components::{
        CameraRig, CircularLimitTracking, GlobalTransform, Info, ItemController, Parent,
        PlayerColliderManager, Rig, SwingNavigation,
    },
    LocomotionMode,
};

/// Height of the camera eye above the rig root when spawned
const EYE_HEIGHT: f32 = 1.7;

/// Spawn an arm swing rig: hands, eye, and a camera rig with a hip tracker.
/// The swing navigation hook lives on a child of the rig root.
pub fn add_arm_swing_rig(world: &mut World) -> Entity {
    let rig = spawn_rig_root(world, LocomotionMode::ArmSwing);
    let camera_rig = CameraRig {
        hip_tracker: Some(spawn_child(world, rig, "Tracker (hip)", Vec3::new(0.0, 1.0, 0.0))),
        ..Default::default()
    };
    add_swing_components(world, rig, camera_rig);
    rig
}

/// Spawn a foot swing rig: everything an arm swing rig has, plus a tracker on each foot.
pub fn add_foot_swing_rig(world: &mut World) -> Entity {
    let rig = spawn_rig_root(world, LocomotionMode::FootSwing);
    let camera_rig = CameraRig {
        hip_tracker: Some(spawn_child(world, rig, "Tracker (hip)", Vec3::new(0.0, 1.0, 0.0))),
        left_foot_tracker: Some(spawn_child(world, rig, "Tracker (left)", Vec3::new(-0.1, 0.1, 0.0))),
        right_foot_tracker: Some(spawn_child(world, rig, "Tracker (right)", Vec3::new(0.1, 0.1, 0.0))),
    };
    add_swing_components(world, rig, camera_rig);
    rig
}

/// Spawn an external device rig: a collider manager tracking the player's head.
pub fn add_external_device_rig(world: &mut World) -> Entity {
    let rig = spawn_rig_root(world, LocomotionMode::ExternalDevice);
    let head = spawn_child(world, rig, "Head", Vec3::new(0.0, EYE_HEIGHT, 0.0));
    world
        .insert_one(rig, PlayerColliderManager { head })
        .expect("rig was just spawned");
    rig
}

fn spawn_rig_root(world: &mut World, mode: LocomotionMode) -> Entity {
    world.spawn((
        Rig { mode },
        Info {
            name: format!("{mode} rig"),
        },
        GlobalTransform::default(),
    ))
}

fn spawn_child(world: &mut World, parent: Entity, name: &str, offset: Vec3) -> Entity {
    world.spawn((
        Parent(parent),
        Info {
            name: name.to_string(),
        },
        GlobalTransform::from_translation(offset),
    ))
}

fn add_swing_components(world: &mut World, rig: Entity, camera_rig: CameraRig) {
    let left = spawn_child(world, rig, "Controller (left)", Vec3::new(-0.2, 1.2, -0.3));
    let right = spawn_child(world, rig, "Controller (right)", Vec3::new(0.2, 1.2, -0.3));
    let camera_eye = spawn_child(world, rig, "Camera (eye)", Vec3::new(0.0, EYE_HEIGHT, 0.0));
    world.spawn((
        Parent(rig),
        Info {
            name: "Swinger".to_string(),
        },
        SwingNavigation::default(),
    ));

    world
        .insert(
            rig,
            (
                ItemController { left, right },
                CircularLimitTracking { camera_eye },
                camera_rig,
            ),
        )
        .expect("rig was just spawned");
}
