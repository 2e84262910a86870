//! # Input Plugin
//!
//! Translates wheel, touch, and keyboard input into rig messages. This is
//! the only module that reads raw input; everything downstream speaks
//! [`ScrubInputEvent`] and [`AnimateToPoseEvent`].

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use vitrine_common::services::PoseTarget;

use super::rig_plugin::{AnimateToPoseEvent, ScrubInputEvent};
use crate::settings::ViewerSettings;

/// Pixels equivalent to one wheel line, for pixel-unit wheels and touch drags
pub const PIXELS_PER_LINE: f32 = 16.0;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchDragState>()
            .add_systems(Update, (wheel_input, touch_input, keyboard_poses));
    }
}

// ============================================================================
// Wheel
// ============================================================================

/// Wheel delta in lines, whichever unit the platform reports
fn wheel_line_delta(event: &MouseWheel) -> f32 {
    match event.unit {
        MouseScrollUnit::Line => event.y,
        MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
    }
}

/// Sum the frame's wheel movement into one scrub message
fn wheel_input(
    mut wheel_events: MessageReader<MouseWheel>,
    settings: Res<ViewerSettings>,
    mut scrubs: MessageWriter<ScrubInputEvent>,
) {
    let mut lines = 0.0;
    for event in wheel_events.read() {
        lines += wheel_line_delta(event);
    }
    if lines == 0.0 {
        return;
    }

    // Scrolling down (negative y) advances the sweep
    let mut lines = -lines;
    if settings.invert_scroll {
        lines = -lines;
    }
    scrubs.write(ScrubInputEvent { lines });
}

// ============================================================================
// Touch
// ============================================================================

/// Tracks the single finger driving a vertical drag.
///
/// The first finger down claims the drag; other fingers are ignored until
/// it lifts. A touch that ends without moving emits nothing.
#[derive(Resource, Default)]
pub struct TouchDragState {
    finger: Option<u64>,
    last_y: f32,
}

impl TouchDragState {
    /// A finger went down
    pub fn begin(&mut self, id: u64, y: f32) {
        if self.finger.is_none() {
            self.finger = Some(id);
            self.last_y = y;
        }
    }

    /// A finger moved. Returns the drag delta in wheel lines (screen
    /// convention, y growing downward) when it is the tracked finger.
    pub fn moved(&mut self, id: u64, y: f32) -> Option<f32> {
        if self.finger != Some(id) {
            return None;
        }
        let delta = y - self.last_y;
        self.last_y = y;
        if delta == 0.0 {
            return None;
        }
        Some(delta / PIXELS_PER_LINE)
    }

    /// A finger lifted or the OS canceled the touch
    pub fn end(&mut self, id: u64) {
        if self.finger == Some(id) {
            self.finger = None;
        }
    }
}

fn touch_input(
    mut touch_events: MessageReader<TouchInput>,
    mut drag: ResMut<TouchDragState>,
    settings: Res<ViewerSettings>,
    mut scrubs: MessageWriter<ScrubInputEvent>,
) {
    for touch in touch_events.read() {
        match touch.phase {
            TouchPhase::Started => {
                drag.begin(touch.id, touch.position.y);
            }
            TouchPhase::Moved => {
                if let Some(raw) = drag.moved(touch.id, touch.position.y) {
                    // Dragging up advances the sweep, same feel as scrolling down
                    let mut lines = -raw;
                    if settings.invert_scroll {
                        lines = -lines;
                    }
                    scrubs.write(ScrubInputEvent { lines });
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                drag.end(touch.id);
            }
        }
    }
}

// ============================================================================
// Keyboard
// ============================================================================

/// A assembles, E explodes
fn keyboard_poses(
    keys: Res<ButtonInput<KeyCode>>,
    mut poses: MessageWriter<AnimateToPoseEvent>,
) {
    if keys.just_pressed(KeyCode::KeyA) {
        poses.write(AnimateToPoseEvent(PoseTarget::Assembled));
    }
    if keys.just_pressed(KeyCode::KeyE) {
        poses.write(AnimateToPoseEvent(PoseTarget::Exploded));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_lines_pass_through_and_pixels_divide() {
        let line = MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 2.0,
            window: Entity::PLACEHOLDER,
        };
        let pixel = MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: 32.0,
            window: Entity::PLACEHOLDER,
        };
        assert_eq!(wheel_line_delta(&line), 2.0);
        assert_eq!(wheel_line_delta(&pixel), 2.0);
    }

    #[test]
    fn first_finger_claims_the_drag() {
        let mut drag = TouchDragState::default();
        drag.begin(7, 100.0);
        drag.begin(9, 400.0);

        assert_eq!(drag.moved(9, 380.0), None);
        assert_eq!(drag.moved(7, 84.0), Some(-1.0));
    }

    #[test]
    fn drag_deltas_accumulate_from_the_last_position() {
        let mut drag = TouchDragState::default();
        drag.begin(1, 200.0);
        assert_eq!(drag.moved(1, 216.0), Some(1.0));
        assert_eq!(drag.moved(1, 216.0), None);
        assert_eq!(drag.moved(1, 208.0), Some(-0.5));
    }

    #[test]
    fn lifting_the_finger_ends_the_drag() {
        let mut drag = TouchDragState::default();
        drag.begin(3, 50.0);
        drag.end(3);
        assert_eq!(drag.moved(3, 66.0), None);

        // A stray end for an unknown finger changes nothing
        drag.begin(4, 10.0);
        drag.end(99);
        assert_eq!(drag.moved(4, 26.0), Some(1.0));
    }
}
