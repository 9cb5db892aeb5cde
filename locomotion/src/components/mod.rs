#![allow(missing_docs)]
pub mod camera_rig;
pub mod circular_limit_tracking;
pub mod global_transform;
pub mod hud;
pub mod info;
pub mod item_controller;
pub mod parent;
pub mod player_collider_manager;
pub mod rig;
pub mod swing_navigation;
pub mod visible;

pub use camera_rig::CameraRig;
pub use circular_limit_tracking::CircularLimitTracking;
pub use global_transform::GlobalTransform;
pub use hud::Hud;
pub use info::Info;
pub use item_controller::ItemController;
pub use parent::Parent;
pub use player_collider_manager::PlayerColliderManager;
pub use rig::Rig;
pub use swing_navigation::SwingNavigation;
pub use visible::Visible;
