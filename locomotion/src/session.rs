use std::{collections::HashMap, fmt};

use hecs::{Entity, World};

use crate::{
    calibration::load_or_default,
    components::{GlobalTransform, Hud, Visible},
    CalibrationRecord, CalibrationStore, Configuration, FileCalibrationStore, FreezeGate,
    FreezePolicy, InputContext, LocomotionError, LocomotionInput, LocomotionMode,
    LocomotionResult, LocomotionStrategy, ModeRegistry, SpatialReferences, SpeedTracker,
};

/// How a session should pick its mode and initial freeze state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The mode to use, or the fallback if reading it from configuration
    pub mode: LocomotionMode,
    /// Read the mode from configuration instead of using `mode` directly
    pub mode_from_configuration: bool,
    /// Whether the player starts frozen
    pub freeze_policy: FreezePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: LocomotionMode::default(),
            mode_from_configuration: true,
            freeze_policy: FreezePolicy::default(),
        }
    }
}

/// Builder for [`LocomotionSession`].
#[derive(Default)]
pub struct LocomotionSessionBuilder<'a> {
    config: SessionConfig,
    configuration: Option<&'a dyn Configuration>,
    calibration_store: Option<Box<dyn CalibrationStore>>,
}

impl<'a> LocomotionSessionBuilder<'a> {
    /// Create a `LocomotionSessionBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Replace the whole session config
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the requested mode
    pub fn mode(mut self, mode: LocomotionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set whether the mode is read from configuration
    pub fn mode_from_configuration(mut self, from_configuration: bool) -> Self {
        self.config.mode_from_configuration = from_configuration;
        self
    }

    /// Set the freeze policy
    pub fn freeze_policy(mut self, freeze_policy: FreezePolicy) -> Self {
        self.config.freeze_policy = freeze_policy;
        self
    }

    /// Set the configuration the mode is read from. Without one, nothing is configured.
    pub fn configuration(mut self, configuration: &'a dyn Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Set where calibration is loaded from and saved to. Defaults to [`FileCalibrationStore::default`].
    pub fn calibration_store(mut self, store: impl CalibrationStore + 'static) -> Self {
        self.calibration_store = Some(Box::new(store));
        self
    }

    /// Start the session: resolve the mode, activate and bind its rig, attach the HUD and
    /// seed the freeze state.
    ///
    /// On error, no rig is left active.
    pub fn start(
        self,
        world: &mut World,
        registry: &ModeRegistry,
    ) -> LocomotionResult<LocomotionSession> {
        let config = self.config;
        let empty: HashMap<String, String> = HashMap::new();
        let configuration = self.configuration.unwrap_or(&empty);

        let mode = ModeRegistry::resolve(config.mode, config.mode_from_configuration, configuration);
        log::info!("[LOCOMOTION] Starting session with {mode}");

        let calibration_store = self
            .calibration_store
            .unwrap_or_else(|| Box::new(FileCalibrationStore::default()));
        let calibration = load_or_default(calibration_store.as_ref());

        let rig = registry.activate(mode, world)?;
        let strategy = crate::strategy_for(mode);
        let (references, hud) = match bind_and_find_hud(world, strategy, rig) {
            Ok(bound) => bound,
            Err(e) => {
                log::error!("[LOCOMOTION] Unable to start session: {e}");
                let _ = world.remove_one::<Visible>(rig);
                return Err(e);
            }
        };

        if let Ok(mut hud) = world.get::<&mut Hud>(hud) {
            hud.0.configure_camera(references.camera_eye);
        }

        let initial_position = player_position(world, rig).unwrap_or_default();
        let mut session = LocomotionSession {
            mode,
            rig,
            strategy,
            references,
            hud: Some(hud),
            freeze_gate: FreezeGate::new(false),
            speed_tracker: SpeedTracker::new(initial_position),
            calibration,
            calibration_store,
        };

        // Make sure the rig's input hook agrees with the gate, whichever way it starts.
        if config.freeze_policy.starts_frozen() {
            session.set_frozen(world, true);
        } else {
            session.start_locomotion(world);
        }

        Ok(session)
    }
}

fn bind_and_find_hud(
    world: &World,
    strategy: &dyn LocomotionStrategy,
    rig: Entity,
) -> LocomotionResult<(SpatialReferences, Entity)> {
    let references = strategy.bind(world, rig)?;

    let mut huds = world.query::<&Hud>();
    let mut huds = huds.iter().map(|(entity, _)| entity);
    let hud = huds.next().ok_or(LocomotionError::MissingCollaboratorError)?;
    if huds.next().is_some() {
        log::warn!("[LOCOMOTION] More than one HUD in the world, using {hud:?}");
    }

    Ok((references, hud))
}

fn player_position(world: &World, rig: Entity) -> Option<glam::Vec3> {
    world
        .get::<&GlobalTransform>(rig)
        .map(|transform| transform.translation())
        .ok()
}

/// Adapts the active rig's strategy into something the [`FreezeGate`] can switch.
struct RigInput<'w> {
    world: &'w World,
    rig: Entity,
    strategy: &'static dyn LocomotionStrategy,
}

impl LocomotionInput for RigInput<'_> {
    fn enable_locomotion_input(&mut self) {
        self.strategy.enable_input(self.world, self.rig);
    }

    fn disable_locomotion_input(&mut self) {
        self.strategy.disable_input(self.world, self.rig);
    }
}

/// A running locomotion session.
///
/// Owned by the application's main loop. **IMPORTANT**: call `tick` once per frame, and
/// `shutdown` when the session ends so calibration is saved.
pub struct LocomotionSession {
    mode: LocomotionMode,
    rig: Entity,
    strategy: &'static dyn LocomotionStrategy,
    references: SpatialReferences,
    hud: Option<Entity>,
    freeze_gate: FreezeGate,
    speed_tracker: SpeedTracker,
    calibration: CalibrationRecord,
    calibration_store: Box<dyn CalibrationStore>,
}

impl fmt::Debug for LocomotionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocomotionSession")
            .field("mode", &self.mode)
            .field("rig", &self.rig)
            .field("references", &self.references)
            .field("hud", &self.hud)
            .field("frozen", &self.freeze_gate.is_frozen())
            .field("speed", &self.speed_tracker.speed())
            .field("calibration", &self.calibration)
            .finish_non_exhaustive()
    }
}

impl LocomotionSession {
    /// Advance the session by one frame. Toggles the freeze state if the freeze button was
    /// just pressed, then measures the player's speed.
    pub fn tick(&mut self, world: &World, input_context: &InputContext, delta_seconds: f32) {
        if input_context.freeze_button_just_pressed() {
            self.toggle_freeze(world);
        }

        match player_position(world, self.rig) {
            Some(position) => {
                self.speed_tracker.update(position, delta_seconds);
            }
            None => log::trace!("[LOCOMOTION] Rig {:?} has no transform", self.rig),
        }
    }

    /// End the session, saving calibration. Failing to save is logged and otherwise ignored.
    pub fn shutdown(self) {
        match self.calibration_store.save(&self.calibration) {
            Ok(()) => log::info!("[LOCOMOTION] Session ended, calibration saved"),
            Err(e) => log::warn!("[LOCOMOTION] Session ended, unable to save calibration: {e}"),
        }
    }

    /// Freeze or release the player, telling the HUD if one is attached.
    /// Returns true if the state changed.
    pub fn set_frozen(&mut self, world: &World, frozen: bool) -> bool {
        let mut input = RigInput {
            world,
            rig: self.rig,
            strategy: self.strategy,
        };
        let mut hud = self.hud.and_then(|hud| world.get::<&mut Hud>(hud).ok());
        let hud = hud.as_deref_mut().map(|hud| hud.0.as_mut());

        let changed = self.freeze_gate.set_frozen(frozen, &mut input, hud);
        if changed {
            log::info!("[LOCOMOTION] Player {}", if frozen { "frozen" } else { "released" });
        }
        changed
    }

    /// Flip the freeze state
    pub fn toggle_freeze(&mut self, world: &World) -> bool {
        let frozen = !self.is_frozen();
        self.set_frozen(world, frozen)
    }

    /// Let the active rig move the player, without touching the freeze state or the HUD
    pub fn start_locomotion(&self, world: &World) {
        self.strategy.enable_input(world, self.rig);
    }

    /// Stop the active rig moving the player, without touching the freeze state or the HUD
    pub fn stop_locomotion(&self, world: &World) {
        self.strategy.disable_input(world, self.rig);
    }

    /// Attach a different HUD. It must carry a [`Hud`] component to be notified.
    pub fn attach_hud(&mut self, hud: Entity) {
        self.hud = Some(hud);
    }

    /// Detach the HUD, returning it. Freeze changes will no longer be shown.
    pub fn detach_hud(&mut self) -> Option<Entity> {
        self.hud.take()
    }

    /// The attached HUD, if any
    pub fn hud(&self) -> Option<Entity> {
        self.hud
    }

    /// The mode this session is using
    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    /// The active rig
    pub fn rig(&self) -> Entity {
        self.rig
    }

    /// References bound from the active rig
    pub fn references(&self) -> &SpatialReferences {
        &self.references
    }

    /// Is the player currently frozen?
    pub fn is_frozen(&self) -> bool {
        self.freeze_gate.is_frozen()
    }

    /// The player's speed as of the last tick, in metres per second
    pub fn current_speed(&self) -> f32 {
        self.speed_tracker.speed()
    }

    /// The player's calibration
    pub fn calibration(&self) -> &CalibrationRecord {
        &self.calibration
    }

    /// Mutable access to the player's calibration. Changes are saved on `shutdown`.
    pub fn calibration_mut(&mut self) -> &mut CalibrationRecord {
        &mut self.calibration
    }
}
