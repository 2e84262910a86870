//! # Backdrop Color
//!
//! The scene clear color as a pure function of the turntable angle.
//!
//! Outside the glow window the backdrop rests at a dark charcoal. Inside
//! [160, 240] degrees it blends to a warm beige and back along a sine ease,
//! peaking at 200 degrees. No hysteresis: the angle is already smoothed by
//! the rig's glide, so the color is recomputed from it every frame.

use bevy::prelude::*;
use std::f32::consts::PI;

/// Resting charcoal, the clear color almost everywhere on the turntable
pub const BASE_RGB: [f32; 3] = [0.094, 0.094, 0.102];

/// Beige glow at the center of the window
pub const GLOW_RGB: [f32; 3] = [0.906, 0.871, 0.780];

/// Turntable window where the glow blends in (degrees)
pub const GLOW_START_DEG: f32 = 160.0;
pub const GLOW_END_DEG: f32 = 240.0;

/// Backdrop color for a turntable angle, as raw sRGB components.
///
/// The angle is wrapped into [0, 360) before the window test.
pub fn backdrop_rgb(angle_degrees: f32) -> [f32; 3] {
    let angle = angle_degrees.rem_euclid(360.0);
    if angle < GLOW_START_DEG || angle > GLOW_END_DEG {
        return BASE_RGB;
    }

    let t = (angle - GLOW_START_DEG) / (GLOW_END_DEG - GLOW_START_DEG);
    let blend = (t * PI).sin();
    [
        BASE_RGB[0] + (GLOW_RGB[0] - BASE_RGB[0]) * blend,
        BASE_RGB[1] + (GLOW_RGB[1] - BASE_RGB[1]) * blend,
        BASE_RGB[2] + (GLOW_RGB[2] - BASE_RGB[2]) * blend,
    ]
}

/// Backdrop color for a turntable angle, ready for the renderer
pub fn backdrop_color(angle_degrees: f32) -> Color {
    let [r, g, b] = backdrop_rgb(angle_degrees);
    Color::srgb(r, g, b)
}

/// The resting clear color, used before the rig has produced a frame
pub fn base_color() -> Color {
    Color::srgb(BASE_RGB[0], BASE_RGB[1], BASE_RGB[2])
}

// ============================================================================
// Tests
// ============================================================================
