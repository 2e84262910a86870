//! # Pose Curves
//!
//! Pure functions from sweep progress to renderable pose.
//!
//! Progress drives a triangle-wave `spread`: the first half of the sweep
//! pulls the parts apart, the second half reseats them. The group rotations
//! are functions of raw progress instead, so they keep turning through the
//! whole sweep; a full sweep returns every part to its assembled seat while
//! the group ends yawed a full turn and tilted by [`FULL_TILT`]. That drift
//! is the showcase's visual signature.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// Tilt reached at the end of a full sweep (radians)
pub const FULL_TILT: f32 = PI / 6.0;

/// Triangle-wave spread factor: 0 at both ends of the sweep, 1 at the middle
pub fn spread(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    if p <= 0.5 {
        p * 2.0
    } else {
        (1.0 - p) * 2.0
    }
}

/// Local translation of one part at the given spread factor
pub fn part_offset(assembled: Vec3, exploded: Vec3, spread: f32) -> Vec3 {
    assembled.lerp(exploded, spread)
}

/// Group yaw: one full turn across the sweep
pub fn yaw_radians(progress: f32) -> f32 {
    progress * TAU
}

/// Group tilt, growing linearly across the sweep
pub fn tilt_radians(progress: f32) -> f32 {
    progress * FULL_TILT
}

/// Turntable angle in degrees, the driver of the backdrop color
pub fn turntable_degrees(progress: f32) -> f32 {
    progress * 360.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn spread_is_a_triangle_wave() {
        assert_eq!(spread(0.0), 0.0);
        assert_eq!(spread(0.5), 1.0);
        assert_eq!(spread(1.0), 0.0);
    }

    #[test]
    fn spread_ladder_matches_the_sweep() {
        let ladder = [0.0, 0.25, 0.5, 0.75, 1.0];
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (p, e) in ladder.iter().zip(expected.iter()) {
            assert!((spread(*p) - e).abs() < EPS);
        }
    }

    #[test]
    fn spread_clamps_out_of_range_progress() {
        assert_eq!(spread(-0.2), 0.0);
        assert_eq!(spread(1.3), 0.0);
    }

    #[test]
    fn part_offset_hits_both_endpoints() {
        let assembled = Vec3::new(0.55, 0.05, 0.0);
        let exploded = Vec3::new(2.8, 0.4, 0.0);
        assert!(part_offset(assembled, exploded, 0.0).distance(assembled) < EPS);
        assert!(part_offset(assembled, exploded, 1.0).distance(exploded) < EPS);
        let halfway = (assembled + exploded) * 0.5;
        assert!(part_offset(assembled, exploded, 0.5).distance(halfway) < EPS);
    }

    #[test]
    fn full_sweep_returns_parts_to_their_seats() {
        let assembled = Vec3::new(0.0, 0.32, 0.0);
        let exploded = Vec3::new(0.0, 2.4, 0.0);
        let at = |p: f32| part_offset(assembled, exploded, spread(p));
        assert!(at(0.0).distance(assembled) < EPS);
        assert!(at(0.5).distance(exploded) < EPS);
        assert!(at(1.0).distance(assembled) < EPS);
    }

    #[test]
    fn rotation_drifts_while_positions_reseat() {
        assert!((yaw_radians(1.0) - TAU).abs() < EPS);
        assert!((tilt_radians(1.0) - FULL_TILT).abs() < EPS);
        assert_eq!(spread(1.0), 0.0);
    }

    #[test]
    fn turntable_spans_a_full_turn() {
        assert_eq!(turntable_degrees(0.0), 0.0);
        assert_eq!(turntable_degrees(0.5), 180.0);
        assert_eq!(turntable_degrees(1.0), 360.0);
    }
}
