//! # Viewer Plugins
//!
//! One plugin per concern, added from `main`:
//!
//! ```rust,ignore
//! app.add_plugins(StagePlugin)
//!    .add_plugins(ShowcasePlugin)
//!    .add_plugins(InputPlugin)
//!    .add_plugins(RigPlugin);
//! ```

// Scene
pub mod showcase_plugin;
pub mod stage_plugin;

// Interaction
pub mod input_plugin;
pub mod rig_plugin;

// Re-export plugins
pub use input_plugin::InputPlugin;
pub use rig_plugin::{AnimateToPoseEvent, PoseReachedEvent, RigPlugin, ScrubInputEvent};
pub use showcase_plugin::ShowcasePlugin;
pub use stage_plugin::StagePlugin;
