use hecs::{Entity, World};

use crate::{
    components::Visible,
    configuration::{get_enum, Configuration},
    LocomotionError, LocomotionMode, LocomotionResult, LOCOMOTION_MODE_KEY,
};

/// The controller rigs an application has built, one per [`LocomotionMode`], in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ModeRegistry {
    rigs: Vec<Entity>,
}

impl ModeRegistry {
    /// Register `rigs`. The rig for a mode is found at that mode's [`LocomotionMode::index`].
    pub fn new(rigs: Vec<Entity>) -> Self {
        Self { rigs }
    }

    /// The registered rigs
    pub fn rigs(&self) -> &[Entity] {
        &self.rigs
    }

    /// The rig registered for `mode`, if there is one
    pub fn rig_for(&self, mode: LocomotionMode) -> Option<Entity> {
        self.rigs.get(mode.index()).copied()
    }

    /// Decide which mode this session uses.
    ///
    /// If `from_configuration` is set, the mode comes from [`LOCOMOTION_MODE_KEY`] in
    /// `configuration`, with `requested` as the fallback. Otherwise `requested` is used as is.
    pub fn resolve(
        requested: LocomotionMode,
        from_configuration: bool,
        configuration: &dyn Configuration,
    ) -> LocomotionMode {
        if !from_configuration {
            return requested;
        }
        get_enum(configuration, LOCOMOTION_MODE_KEY, requested)
    }

    /// Make the rig for `mode` the only visible rig, and return it.
    pub fn activate(&self, mode: LocomotionMode, world: &mut World) -> LocomotionResult<Entity> {
        let configuration_error = || LocomotionError::ConfigurationError {
            mode,
            registered: self.rigs.len(),
        };
        let active = self.rig_for(mode).ok_or_else(configuration_error)?;
        world
            .insert_one(active, Visible {})
            .map_err(|_| configuration_error())?;

        for &rig in self.rigs.iter().filter(|&&rig| rig != active) {
            // Rigs that were never visible (or no longer exist) are fine.
            let _ = world.remove_one::<Visible>(rig);
        }

        log::info!("[LOCOMOTION] Activated {mode} rig {active:?}");
        Ok(active)
    }
}
