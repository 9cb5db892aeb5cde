//! Drives a locomotion session from the desktop, standing in for a headset.
//!
//! Usage: `locomotion-simulator [config.json]`
//!
//! The player "swings" forward at walking pace whenever their rig allows it, and the freeze
//! button is pressed once every two seconds.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::sleep,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use glam::Vec3A;
use hecs::{Entity, World};
use locomotion::{
    components::{
        swing_navigation::find_swing_navigation, GlobalTransform, Hud, SwingNavigation,
    },
    rigs, ConfigFile, FileCalibrationStore, HudController, InputContext,
    LocomotionSessionBuilder, ModeRegistry,
};

const FRAMES_PER_SECOND: usize = 72;
const FRAME_TIME: f32 = 1.0 / FRAMES_PER_SECOND as f32;
const SIMULATED_SECONDS: usize = 10;
const WALKING_SPEED: f32 = 1.4;

struct ConsoleHud;

impl HudController for ConsoleHud {
    fn show_freeze_indicator(&mut self) {
        log::info!("[SIMULATOR_HUD] Player frozen");
    }

    fn hide_freeze_indicator(&mut self) {
        log::info!("[SIMULATOR_HUD] Player released");
    }

    fn configure_camera(&mut self, eye: Entity) {
        log::info!("[SIMULATOR_HUD] Rendering from {eye:?}");
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let should_quit = Arc::new(AtomicBool::from(false));
    {
        let should_quit = should_quit.clone();
        ctrlc::set_handler(move || should_quit.store(true, Ordering::Relaxed))?;
    }

    let configuration = match std::env::args().nth(1) {
        Some(path) => ConfigFile::load(&path)
            .with_context(|| format!("Unable to load configuration from {path}"))?,
        None => ConfigFile::default(),
    };

    let mut world = World::new();
    let registry = ModeRegistry::new(vec![
        rigs::add_arm_swing_rig(&mut world),
        rigs::add_foot_swing_rig(&mut world),
        rigs::add_external_device_rig(&mut world),
    ]);
    world.spawn((Hud(Box::new(ConsoleHud)),));

    let calibration_store = FileCalibrationStore::default();
    log::info!(
        "[SIMULATOR] Calibration is stored at {}",
        calibration_store.path().display()
    );

    let mut session = LocomotionSessionBuilder::new()
        .configuration(&configuration)
        .calibration_store(calibration_store)
        .start(&mut world, &registry)
        .context("Unable to start locomotion session")?;

    let mut input_context = InputContext::default();
    for frame in 0..FRAMES_PER_SECOND * SIMULATED_SECONDS {
        if should_quit.load(Ordering::Relaxed) {
            log::info!("[SIMULATOR] Exiting early!");
            break;
        }
        let frame_start = Instant::now();

        input_context.update(frame % (FRAMES_PER_SECOND * 2) == FRAMES_PER_SECOND);
        simulate_swinging(&world, session.rig());
        session.tick(&world, &input_context, FRAME_TIME);

        if frame % FRAMES_PER_SECOND == 0 {
            log::info!(
                "[SIMULATOR] {}s: speed {:.2} m/s, frozen: {}",
                frame / FRAMES_PER_SECOND,
                session.current_speed(),
                session.is_frozen()
            );
        }

        if let Some(remaining) =
            Duration::from_secs_f32(FRAME_TIME).checked_sub(frame_start.elapsed())
        {
            sleep(remaining);
        }
    }

    session.shutdown();
    Ok(())
}

/// Move the rig forward at walking pace if its swing navigation lets it. Rigs without one are
/// driven by their device, which always walks.
fn simulate_swinging(world: &World, rig: Entity) {
    let enabled = find_swing_navigation(world, rig)
        .and_then(|hook| world.get::<&SwingNavigation>(hook).ok().map(|s| s.enabled))
        .unwrap_or(true);

    if !enabled {
        return;
    }

    if let Ok(mut transform) = world.get::<&mut GlobalTransform>(rig) {
        transform.0.translation += Vec3A::NEG_Z * WALKING_SPEED * FRAME_TIME;
    }
}
