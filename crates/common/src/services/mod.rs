//! # Services Module
//!
//! Service-oriented architecture - the pure showcase logic shared by the
//! viewer and any future host.
//!
//! ## Services
//!
//! | Service | Description | Common Types |
//! |---------|-------------|--------------|
//! | `RigService` | Sweep progress state machine | RigService, PoseTarget |
//! | `TweenService` | Time-based interpolation | ProgressTween, EasingStyle |
//! | Pose curves | Progress to renderable pose | spread, part_offset |
//! | Backdrop | Turntable angle to clear color | backdrop_rgb, backdrop_color |

// Core services
pub mod rig;
pub mod tween;

// Pure curve functions
pub mod backdrop;
pub mod pose;

// Re-export the common surface
pub use backdrop::{backdrop_color, backdrop_rgb, base_color};
pub use pose::{part_offset, spread, tilt_radians, turntable_degrees, yaw_radians, FULL_TILT};
pub use rig::{PoseTarget, RigService, POSE_GLIDE_SECS, SCRUB_GLIDE_SECS};
pub use tween::{ease, EasingDirection, EasingStyle, ProgressTween};
