/// The Visible component marks the active controller rig.
///
/// Exactly one registered rig carries it while a session is running.
///
/// Basic usage:
/// ```ignore
/// world.insert_one(rig, Visible {})
/// world.remove_one::<Visible>(rig)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Visible {}
