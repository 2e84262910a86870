//! # Part Catalog
//!
//! The data model behind a showcase: which parts exist, where each one
//! sits when assembled, where it flies to when exploded, and which model
//! file (if any) dresses it.
//!
//! ## Table of Contents
//! 1. PartDef - one part of the showcase
//! 2. PartCatalog - root container, serialized as a `.vitrine` file
//! 3. default_catalog - the built-in quadcopter teardown
//! 4. placeholder_color - fallback hues for parts without a model

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vitrine_format::FORMAT_VERSION;

// ============================================================================
// 1. PartDef
// ============================================================================

/// One part of the showcase.
///
/// The two poses are static after load; per-frame motion only ever touches
/// the rendered transform, never these definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Debug)]
pub struct PartDef {
    /// Display name, also used for the spawned entity's `Name`
    pub name: String,

    /// Asset path of a GLB/GLTF model, relative to the assets root.
    /// `None` renders the placeholder cuboid instead.
    #[serde(default)]
    pub model: Option<String>,

    /// Local translation when the showcase is fully assembled
    pub assembled: [f32; 3],

    /// Local translation at full spread
    pub exploded: [f32; 3],

    /// Extents of the placeholder cuboid (x, y, z)
    pub size: [f32; 3],
}

impl PartDef {
    /// Assembled pose as a vector
    pub fn assembled_vec(&self) -> Vec3 {
        Vec3::from(self.assembled)
    }

    /// Exploded pose as a vector
    pub fn exploded_vec(&self) -> Vec3 {
        Vec3::from(self.exploded)
    }

    /// Placeholder extents as a vector
    pub fn size_vec(&self) -> Vec3 {
        Vec3::from(self.size)
    }
}

// ============================================================================
// 2. PartCatalog
// ============================================================================

/// Root container of a showcase definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Debug)]
pub struct PartCatalog {
    /// Format version for compatibility checking
    pub format: String,

    /// Display name of the showcase
    pub name: String,

    /// Parts in draw order; the index doubles as the placeholder hue index
    pub parts: Vec<PartDef>,
}

impl Default for PartCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

// ============================================================================
// 3. Default Catalog
// ============================================================================

/// The built-in six-part showcase: a quadcopter teardown.
///
/// The viewer falls back to this whenever no catalog file is given or
/// loading one fails.
pub fn default_catalog() -> PartCatalog {
    let part = |name: &str,
                model: &str,
                assembled: [f32; 3],
                exploded: [f32; 3],
                size: [f32; 3]| PartDef {
        name: name.to_string(),
        model: Some(model.to_string()),
        assembled,
        exploded,
        size,
    };

    PartCatalog {
        format: FORMAT_VERSION.to_string(),
        name: "Quadcopter Teardown".to_string(),
        parts: vec![
            part(
                "Canopy",
                "models/canopy.glb",
                [0.0, 0.32, 0.0],
                [0.0, 2.4, 0.0],
                [1.1, 0.25, 1.4],
            ),
            part(
                "Flight Controller",
                "models/controller.glb",
                [0.0, 0.12, 0.0],
                [0.0, 1.2, 0.0],
                [0.5, 0.12, 0.5],
            ),
            part(
                "Frame",
                "models/frame.glb",
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0],
                [1.3, 0.18, 1.3],
            ),
            part(
                "Battery",
                "models/battery.glb",
                [0.0, -0.14, 0.0],
                [0.0, -1.6, 0.0],
                [0.8, 0.25, 0.5],
            ),
            part(
                "Rotor Arm (Port)",
                "models/arm_port.glb",
                [-0.55, 0.05, 0.0],
                [-2.8, 0.4, 0.0],
                [1.2, 0.12, 0.3],
            ),
            part(
                "Rotor Arm (Starboard)",
                "models/arm_starboard.glb",
                [0.55, 0.05, 0.0],
                [2.8, 0.4, 0.0],
                [1.2, 0.12, 0.3],
            ),
        ],
    }
}

// ============================================================================
// 4. Placeholder Colors
// ============================================================================

/// Distinct hues for fallback geometry, one per part index
pub const PLACEHOLDER_COLORS: [[f32; 4]; 6] = [
    [0.91, 0.34, 0.32, 1.0],
    [0.96, 0.65, 0.14, 1.0],
    [0.93, 0.85, 0.25, 1.0],
    [0.36, 0.77, 0.40, 1.0],
    [0.25, 0.56, 0.89, 1.0],
    [0.64, 0.42, 0.86, 1.0],
];

/// Placeholder hue for a part, cycling when a catalog has more parts than
/// the palette has entries
pub fn placeholder_color(index: usize) -> [f32; 4] {
    PLACEHOLDER_COLORS[index % PLACEHOLDER_COLORS.len()]
}

// ============================================================================
// Tests
// ============================================================================
