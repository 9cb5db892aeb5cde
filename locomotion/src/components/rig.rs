use crate::LocomotionMode;

/// Marks the root entity of a controller rig, and which mode it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rig {
    /// The mode this rig implements
    pub mode: LocomotionMode,
}
