use hecs::Entity;

/// The tracked devices parented under a swing rig's camera rig.
///
/// Arm swing rigs need the hip tracker to know which way the player is facing. Foot swing rigs
/// additionally need a tracker on each foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraRig {
    /// Tracker worn on the hip, used as the walking direction
    pub hip_tracker: Option<Entity>,
    /// Tracker worn on the left foot
    pub left_foot_tracker: Option<Entity>,
    /// Tracker worn on the right foot
    pub right_foot_tracker: Option<Entity>,
}
