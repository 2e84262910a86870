//! # Rig Service
//!
//! The single authority over the showcase sweep.
//!
//! ## Classes
//! - `RigService`: progress scalar, glide target, and the active tween
//! - `PoseTarget`: the named poses a discrete command can request
//!
//! Every input channel lands here. Wheel and touch scrub the target,
//! named poses glide to fixed progress values, and both share the one
//! tween slot, so the channels can never disagree about where the rig
//! is headed.

use bevy::prelude::*;
use tracing::debug;

use super::pose;
use super::tween::{EasingDirection, EasingStyle, ProgressTween};

/// Duration of the short glide that follows scrub input (seconds)
pub const SCRUB_GLIDE_SECS: f32 = 0.6;

/// Duration of the glide to a named pose (seconds)
pub const POSE_GLIDE_SECS: f32 = 1.4;

// ============================================================================
// PoseTarget
// ============================================================================

/// Named rig poses reachable through a discrete command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum PoseTarget {
    /// Every part seated; progress at the nearest end of the sweep
    Assembled,
    /// Full spread; progress at the middle of the sweep
    Exploded,
}

// ============================================================================
// RigService
// ============================================================================

/// RigService - progress state machine for the showcase rig.
///
/// `progress` is the live value the frame renders, `target` is where the
/// active glide is headed. Both stay inside [0, 1]. At most one tween runs
/// at a time; starting a new one replaces the old and begins at the live
/// `progress`, so the rendered value never jumps.
#[derive(Resource, Reflect, Clone, Debug, Default)]
#[reflect(Resource)]
pub struct RigService {
    progress: f32,
    target: f32,
    tween: Option<ProgressTween>,
    pending_pose: Option<PoseTarget>,
}

impl RigService {
    /// Live progress value in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Where the active glide is headed (equals `progress` when idle)
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Is a glide in flight?
    pub fn is_gliding(&self) -> bool {
        self.tween.is_some()
    }

    /// Nudge the target by an already sensitivity-scaled delta and glide
    /// toward it.
    ///
    /// Returns `false` without touching the rig when the delta is zero or
    /// the target is already pinned at the rail in the direction of travel.
    /// A successful scrub cancels any pending named pose.
    pub fn scrub_by(&mut self, delta: f32) -> bool {
        if delta == 0.0 {
            return false;
        }
        let to = (self.target + delta).clamp(0.0, 1.0);
        if to == self.target {
            return false;
        }
        self.target = to;
        self.pending_pose = None;
        self.tween = Some(ProgressTween::new(
            self.progress,
            to,
            SCRUB_GLIDE_SECS,
            EasingStyle::Quad,
            EasingDirection::Out,
        ));
        true
    }

    /// Start a glide to a named pose.
    ///
    /// `Exploded` heads for the middle of the sweep; `Assembled` heads for
    /// whichever seated endpoint is closer to the live progress, so the rig
    /// keeps turning the way it was already facing. The pose is recorded
    /// and handed out by [`take_arrival`](Self::take_arrival) once the
    /// glide completes.
    pub fn animate_to(&mut self, pose: PoseTarget) {
        let to = match pose {
            PoseTarget::Exploded => 0.5,
            PoseTarget::Assembled => {
                if self.progress < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        };
        self.target = to;
        self.pending_pose = Some(pose);
        self.tween = Some(ProgressTween::new(
            self.progress,
            to,
            POSE_GLIDE_SECS,
            EasingStyle::Cubic,
            EasingDirection::InOut,
        ));
        debug!(
            "Rig gliding to {:?} ({:.3} -> {:.3})",
            pose, self.progress, to
        );
    }

    /// Step the active glide by `dt` seconds.
    ///
    /// Returns `true` exactly once, on the step that completes the glide;
    /// `progress` lands exactly on `target` and the tween is cleared.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        self.progress = tween.advance(dt);
        if tween.finished() {
            self.progress = self.target;
            self.tween = None;
            true
        } else {
            false
        }
    }

    /// Take the named pose the last completed glide arrived at, if any
    pub fn take_arrival(&mut self) -> Option<PoseTarget> {
        self.pending_pose.take()
    }

    /// Spread factor at the live progress
    pub fn spread(&self) -> f32 {
        pose::spread(self.progress)
    }

    /// Group yaw at the live progress (radians)
    pub fn yaw_radians(&self) -> f32 {
        pose::yaw_radians(self.progress)
    }

    /// Group tilt at the live progress (radians)
    pub fn tilt_radians(&self) -> f32 {
        pose::tilt_radians(self.progress)
    }

    /// Turntable angle at the live progress (degrees)
    pub fn turntable_degrees(&self) -> f32 {
        pose::turntable_degrees(self.progress)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;
    const FRAME: f32 = 0.016;

    fn settle(rig: &mut RigService) {
        for _ in 0..200 {
            if rig.advance(FRAME) {
                return;
            }
        }
        panic!("glide never completed");
    }

    #[test]
    fn progress_stays_in_bounds_under_any_scrub_sequence() {
        let mut rig = RigService::default();
        let deltas = [0.4, 0.4, 0.4, -1.2, 0.05, 2.0, -0.3, -5.0, 0.7, 0.9];
        for delta in deltas {
            rig.scrub_by(delta);
            for _ in 0..7 {
                rig.advance(FRAME);
                assert!(rig.progress() >= 0.0 && rig.progress() <= 1.0);
                assert!(rig.target() >= 0.0 && rig.target() <= 1.0);
            }
        }
    }

    #[test]
    fn scrub_at_the_rail_is_a_no_op() {
        let mut rig = RigService::default();
        assert!(!rig.scrub_by(0.0));
        assert!(!rig.scrub_by(-0.1));
        assert!(!rig.is_gliding());

        assert!(rig.scrub_by(2.0));
        settle(&mut rig);
        assert_eq!(rig.progress(), 1.0);
        assert!(!rig.scrub_by(0.25));
        assert!(!rig.is_gliding());
    }

    #[test]
    fn new_glide_starts_from_the_live_value() {
        let mut rig = RigService::default();
        rig.scrub_by(1.0);
        for _ in 0..5 {
            rig.advance(FRAME);
        }
        let live = rig.progress();
        assert!(live > 0.0 && live < 1.0);

        // Reversing direction mid-glide must not jump the rendered value.
        assert!(rig.scrub_by(-0.5));
        rig.advance(0.0);
        assert!((rig.progress() - live).abs() < EPS);
    }

    #[test]
    fn scrub_accumulates_on_the_target_not_the_live_value() {
        let mut rig = RigService::default();
        rig.scrub_by(0.2);
        rig.scrub_by(0.2);
        assert!((rig.target() - 0.4).abs() < EPS);
        settle(&mut rig);
        assert!((rig.progress() - 0.4).abs() < EPS);
    }

    #[test]
    fn exploded_heads_for_the_middle_of_the_sweep() {
        let mut rig = RigService::default();
        rig.animate_to(PoseTarget::Exploded);
        assert!((rig.target() - 0.5).abs() < EPS);
        settle(&mut rig);
        assert_eq!(rig.progress(), 0.5);
        assert_eq!(rig.spread(), 1.0);
    }

    #[test]
    fn assembled_heads_for_the_nearest_seated_endpoint() {
        let mut rig = RigService::default();
        rig.scrub_by(0.2);
        settle(&mut rig);
        rig.animate_to(PoseTarget::Assembled);
        assert_eq!(rig.target(), 0.0);

        let mut rig = RigService::default();
        rig.animate_to(PoseTarget::Exploded);
        settle(&mut rig);
        rig.animate_to(PoseTarget::Assembled);
        assert_eq!(rig.target(), 1.0);
        settle(&mut rig);
        assert_eq!(rig.spread(), 0.0);
    }

    #[test]
    fn scrub_after_a_named_pose_builds_on_its_target() {
        let mut rig = RigService::default();
        rig.animate_to(PoseTarget::Exploded);
        settle(&mut rig);
        assert!(rig.scrub_by(0.1));
        assert!((rig.target() - 0.6).abs() < EPS);
    }

    #[test]
    fn completion_is_reported_exactly_once() {
        let mut rig = RigService::default();
        rig.scrub_by(0.4);
        let mut completions = 0;
        for _ in 0..200 {
            if rig.advance(FRAME) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(!rig.is_gliding());
        assert!((rig.progress() - 0.4).abs() < EPS);
    }

    #[test]
    fn arrival_is_announced_for_named_poses_only() {
        let mut rig = RigService::default();
        rig.animate_to(PoseTarget::Exploded);
        settle(&mut rig);
        assert_eq!(rig.take_arrival(), Some(PoseTarget::Exploded));
        assert_eq!(rig.take_arrival(), None);

        rig.scrub_by(0.1);
        settle(&mut rig);
        assert_eq!(rig.take_arrival(), None);
    }

    #[test]
    fn scrubbing_cancels_a_pending_pose() {
        let mut rig = RigService::default();
        rig.animate_to(PoseTarget::Exploded);
        rig.advance(FRAME);
        assert!(rig.scrub_by(0.05));
        settle(&mut rig);
        assert_eq!(rig.take_arrival(), None);
    }
}
