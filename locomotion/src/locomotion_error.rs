use thiserror::Error;

use crate::LocomotionMode;

/// Everything that can stop a locomotion session from starting.
///
/// Once a session is running nothing it does is fatal, so these only ever come out of
/// [`crate::LocomotionSessionBuilder::start`] and [`crate::ConfigFile::load`].
#[derive(Error, Debug)]
pub enum LocomotionError {
    /// There is no controller rig registered for the resolved mode
    #[error("No controller rig is registered for {mode} ({registered} rigs registered)")]
    ConfigurationError {
        /// The mode that was resolved
        mode: LocomotionMode,
        /// How many rigs the registry holds
        registered: usize,
    },
    /// The rig for the resolved mode is missing a required component or reference
    #[error("The {mode} rig is malformed: missing {missing}")]
    BindingError {
        /// The mode whose rig was being bound
        mode: LocomotionMode,
        /// A description of what was missing
        missing: &'static str,
    },
    /// No HUD controller exists in the world
    #[error("No HUD controller was found in the world")]
    MissingCollaboratorError,
    /// The configuration file could not be parsed
    #[error("The configuration file is not valid")]
    InvalidConfigurationFile(#[from] serde_json::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
