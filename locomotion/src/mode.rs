use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The technique used to move the player around for the duration of a session.
///
/// The declaration order matters: the [`crate::ModeRegistry`] expects one rig per mode, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocomotionMode {
    /// The player swings their arms to walk
    ArmSwing,
    /// The player swings their feet, tracked by trackers on each foot and the hip
    FootSwing,
    /// The player stands in an external treadmill device
    #[serde(alias = "CVirtualizer")]
    ExternalDevice,
}

impl LocomotionMode {
    /// All modes, in declaration order
    pub const ALL: [LocomotionMode; 3] = [
        LocomotionMode::ArmSwing,
        LocomotionMode::FootSwing,
        LocomotionMode::ExternalDevice,
    ];

    /// Position of this mode in declaration order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Default for LocomotionMode {
    fn default() -> Self {
        LocomotionMode::ArmSwing
    }
}

impl fmt::Display for LocomotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocomotionMode::ArmSwing => "ArmSwing",
            LocomotionMode::FootSwing => "FootSwing",
            LocomotionMode::ExternalDevice => "ExternalDevice",
        };
        f.write_str(name)
    }
}

/// Returned when a string does not name a [`LocomotionMode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locomotion mode {:?}", self.0)
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for LocomotionMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "armswing" => Ok(LocomotionMode::ArmSwing),
            "footswing" => Ok(LocomotionMode::FootSwing),
            "externaldevice" | "cvirtualizer" => Ok(LocomotionMode::ExternalDevice),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("ArmSwing".parse(), Ok(LocomotionMode::ArmSwing));
        assert_eq!(" footswing ".parse(), Ok(LocomotionMode::FootSwing));
        assert_eq!("CVirtualizer".parse(), Ok(LocomotionMode::ExternalDevice));
        assert!("Teleport".parse::<LocomotionMode>().is_err());
    }

    #[test]
    fn test_mode_order() {
        for (i, mode) in LocomotionMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
            assert_eq!(mode.to_string().parse(), Ok(*mode));
        }
    }

    #[test]
    fn test_mode_legacy_alias_deserializes() {
        let mode: LocomotionMode = serde_json::from_str("\"CVirtualizer\"").unwrap();
        assert_eq!(mode, LocomotionMode::ExternalDevice);
    }
}
