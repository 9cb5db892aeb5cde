#![deny(missing_docs)]

//! Locomotion management for VR experiences.
//!
//! A VR experience usually ships several ways of moving the player around: swinging your arms,
//! swinging your feet with trackers strapped to them, or standing in an external treadmill device.
//! Exactly one of these is used per session. This crate picks which one, activates its controller
//! rig in the [`hecs::World`], binds the hand/foot/eye references the rest of the game needs,
//! and governs whether the player is currently allowed to move.
//!
//! # Getting started
//! Spawn one rig per [`LocomotionMode`], in declaration order, register them with a
//! [`ModeRegistry`] and start a session:
//!
//! ```no_run
//! use locomotion::{
//!     components::Hud, rigs, HudController, InputContext, LocomotionSessionBuilder, ModeRegistry,
//! };
//!
//! struct NoHud;
//! impl HudController for NoHud {
//!     fn show_freeze_indicator(&mut self) {}
//!     fn hide_freeze_indicator(&mut self) {}
//!     fn configure_camera(&mut self, _eye: locomotion::hecs::Entity) {}
//! }
//!
//! let mut world = locomotion::hecs::World::new();
//! let registry = ModeRegistry::new(vec![
//!     rigs::add_arm_swing_rig(&mut world),
//!     rigs::add_foot_swing_rig(&mut world),
//!     rigs::add_external_device_rig(&mut world),
//! ]);
//! world.spawn((Hud(Box::new(NoHud)),));
//!
//! let mut session = LocomotionSessionBuilder::new()
//!     .start(&mut world, &registry)
//!     .unwrap();
//! let mut input_context = InputContext::default();
//! loop {
//!     input_context.update(false);
//!     session.tick(&world, &input_context, 1.0 / 72.0);
//!     # break;
//! }
//! session.shutdown();
//! ```

pub use hecs;

pub use calibration::{
    CalibrationRecord, CalibrationStore, FileCalibrationStore, PersistenceError,
    SerializationFormat,
};
pub use configuration::{ConfigFile, Configuration};
pub use freeze_gate::{FreezeGate, FreezePolicy, LocomotionInput};
pub use hud::HudController;
pub use input_context::InputContext;
pub use locomotion_error::LocomotionError;
pub use mode::{LocomotionMode, UnknownModeError};
pub use registry::ModeRegistry;
pub use session::{LocomotionSession, LocomotionSessionBuilder, SessionConfig};
pub use speed_tracker::SpeedTracker;
pub use strategy::{strategy_for, LocomotionStrategy, SpatialReferences};

/// Loading and saving per-user calibration data
pub mod calibration;
/// Components are the typed descriptors that make up a controller rig
pub mod components;
/// Typed lookups into the application's configuration
pub mod configuration;
mod freeze_gate;
mod hud;
mod input_context;
mod locomotion_error;
mod mode;
mod registry;
/// Helpers to spawn well-formed controller rigs
pub mod rigs;
mod session;
mod speed_tracker;
/// One strategy per locomotion mode: how to bind its references and toggle its input
pub mod strategy;

/// Locomotion result type
pub type LocomotionResult<T> = std::result::Result<T, LocomotionError>;

/// Configuration key holding the locomotion mode
pub const LOCOMOTION_MODE_KEY: &str = "LocomotionMethod";
