//! # Vitrine Common
//!
//! Shared types and services for the Vitrine showcase.
//!
//! ## Modules
//!
//! - `catalog`: Part catalog data model plus the built-in teardown
//! - `services`: Rig state machine, tween kernel, pose and backdrop curves
//! - `vitrine_format`: RON-based `.vitrine` catalog format
//!
//! ## Architecture
//!
//! - **Catalog**: What the showcase is made of (static after load)
//! - **Services**: How it moves (pure logic, no rendering)
//! - **Format**: How it is saved and loaded

pub mod catalog;
pub mod services;
pub mod vitrine_format;

// Re-export the catalog surface
pub use catalog::{default_catalog, placeholder_color, PartCatalog, PartDef, PLACEHOLDER_COLORS};

// Re-export the vitrine format as the canonical file format
pub use vitrine_format::{
    // Core functions
    load_catalog, save_catalog,
    // Validation
    is_vitrine_file,
    // Path conversion
    to_vitrine_path,
    // Constants
    EXTENSION, FORMAT_VERSION, VALID_EXTENSIONS,
    // Errors
    VitrineError,
};

// Re-export the service surface
pub use services::{
    backdrop_color, base_color, ease, part_offset, spread, EasingDirection, EasingStyle,
    PoseTarget, ProgressTween, RigService,
};
