//! # Rig Plugin
//!
//! Registers the rig state and runs the per-frame sequence: fold input
//! into the rig, advance the glide, write the resulting pose to the scene,
//! recolor the backdrop. The sequence is chained so every frame renders a
//! pose computed from this frame's time step.

use bevy::prelude::*;
use vitrine_common::services::{backdrop, pose, PoseTarget, RigService};

use crate::components::{PartSlot, ShowcaseRoot};
use crate::settings::ViewerSettings;

// ============================================================================
// Messages
// ============================================================================

/// Continuous scrub input in wheel lines; positive advances the sweep
#[derive(Message, Clone, Debug)]
pub struct ScrubInputEvent {
    pub lines: f32,
}

/// Command to glide the rig to a named pose
#[derive(Message, Clone, Copy, Debug)]
pub struct AnimateToPoseEvent(pub PoseTarget);

/// Announcement that a named-pose glide has completed
#[derive(Message, Clone, Copy, Debug)]
pub struct PoseReachedEvent {
    pub pose: PoseTarget,
}

// ============================================================================
// Plugin
// ============================================================================

pub struct RigPlugin;

impl Plugin for RigPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resource
            .init_resource::<RigService>()
            .register_type::<RigService>()
            // Messages
            .add_message::<ScrubInputEvent>()
            .add_message::<AnimateToPoseEvent>()
            .add_message::<PoseReachedEvent>()
            // Systems
            .add_systems(
                Update,
                (drive_rig, advance_rig, apply_rig_pose, update_backdrop).chain(),
            )
            .add_systems(Update, announce_arrivals);
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Fold the frame's input into the rig
fn drive_rig(
    mut rig: ResMut<RigService>,
    settings: Res<ViewerSettings>,
    mut scrubs: MessageReader<ScrubInputEvent>,
    mut poses: MessageReader<AnimateToPoseEvent>,
) {
    let mut delta = 0.0;
    for scrub in scrubs.read() {
        delta += scrub.lines * settings.scroll_sensitivity;
    }
    if delta != 0.0 {
        rig.scrub_by(delta);
    }

    // Last pose command of the frame wins
    if let Some(event) = poses.read().last() {
        rig.animate_to(event.0);
    }
}

/// Step the active glide and announce named-pose arrivals
fn advance_rig(
    time: Res<Time>,
    mut rig: ResMut<RigService>,
    mut arrivals: MessageWriter<PoseReachedEvent>,
) {
    if rig.advance(time.delta_secs()) {
        if let Some(reached) = rig.take_arrival() {
            arrivals.write(PoseReachedEvent { pose: reached });
        }
    }
}

/// Handle PoseReachedEvent
fn announce_arrivals(mut arrivals: MessageReader<PoseReachedEvent>) {
    for arrival in arrivals.read() {
        info!("🎯 Rig arrived at {:?}", arrival.pose);
    }
}

/// Write the rig's pose into part transforms and the root rotation
fn apply_rig_pose(
    rig: Res<RigService>,
    mut parts: Query<(&PartSlot, &mut Transform), Without<ShowcaseRoot>>,
    mut root: Query<&mut Transform, With<ShowcaseRoot>>,
) {
    let spread = rig.spread();
    for (slot, mut transform) in parts.iter_mut() {
        transform.translation = pose::part_offset(slot.assembled, slot.exploded, spread);
    }

    let Ok(mut transform) = root.single_mut() else {
        return;
    };
    transform.rotation = Quat::from_euler(
        EulerRot::YXZ,
        rig.yaw_radians(),
        rig.tilt_radians(),
        0.0,
    );
}

/// Recompute the clear color from the turntable angle
fn update_backdrop(rig: Res<RigService>, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = backdrop::backdrop_color(rig.turntable_degrees());
}
