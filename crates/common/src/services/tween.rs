//! # Tween Service
//!
//! Time-based interpolation for the showcase rig.
//!
//! ## Classes
//! - `ProgressTween`: one in-flight glide of the progress scalar
//! - `EasingStyle` / `EasingDirection`: curve configuration
//! - `ease`: the easing kernel shared by every glide

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Easing
// ============================================================================

/// Easing style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum EasingStyle {
    Linear,
    Sine,
    #[default]
    Quad,
    Cubic,
    Expo,
}

/// Easing direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum EasingDirection {
    In,
    #[default]
    Out,
    InOut,
}

/// Calculate eased value
pub fn ease(t: f32, style: EasingStyle, direction: EasingDirection) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match direction {
        EasingDirection::In => ease_in(t, style),
        EasingDirection::Out => 1.0 - ease_in(1.0 - t, style),
        EasingDirection::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0, style) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0, style) / 2.0
            }
        }
    }
}

fn ease_in(t: f32, style: EasingStyle) -> f32 {
    match style {
        EasingStyle::Linear => t,
        EasingStyle::Sine => 1.0 - (t * std::f32::consts::FRAC_PI_2).cos(),
        EasingStyle::Quad => t * t,
        EasingStyle::Cubic => t * t * t,
        EasingStyle::Expo => {
            if t == 0.0 {
                0.0
            } else {
                2.0_f32.powf(10.0 * (t - 1.0))
            }
        }
    }
}

// ============================================================================
// ProgressTween
// ============================================================================

/// ProgressTween - an active interpolation of the rig's progress scalar.
///
/// A non-positive duration is an instant tween: the first sample lands on
/// `to`. Cancellation is external; the rig drops the old tween and builds a
/// new one whose `from` is the live value.
#[derive(Reflect, Clone, Debug)]
pub struct ProgressTween {
    /// Start value
    pub from: f32,
    /// End value
    pub to: f32,
    /// Time elapsed so far
    pub elapsed: f32,
    /// Duration in seconds
    pub duration: f32,
    /// Easing style
    pub style: EasingStyle,
    /// Easing direction
    pub direction: EasingDirection,
}

impl ProgressTween {
    /// Create a new tween
    pub fn new(
        from: f32,
        to: f32,
        duration: f32,
        style: EasingStyle,
        direction: EasingDirection,
    ) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            style,
            direction,
        }
    }

    /// Step the tween by `dt` seconds and return the sampled value
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.duration > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Sample the tween at its current elapsed time
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease(t, self.style, self.direction)
    }

    /// Has the tween reached its end?
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn ease_endpoints_land_on_zero_and_one() {
        let styles = [
            EasingStyle::Linear,
            EasingStyle::Sine,
            EasingStyle::Quad,
            EasingStyle::Cubic,
            EasingStyle::Expo,
        ];
        let directions = [
            EasingDirection::In,
            EasingDirection::Out,
            EasingDirection::InOut,
        ];
        for style in styles {
            for direction in directions {
                assert!(ease(0.0, style, direction).abs() < EPS);
                assert!((ease(1.0, style, direction) - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn ease_out_mirrors_ease_in() {
        let t = 0.3;
        let out = ease(t, EasingStyle::Quad, EasingDirection::Out);
        let mirrored = 1.0 - ease(1.0 - t, EasingStyle::Quad, EasingDirection::In);
        assert!((out - mirrored).abs() < EPS);
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert!(ease(-0.5, EasingStyle::Quad, EasingDirection::In).abs() < EPS);
        assert!((ease(1.5, EasingStyle::Quad, EasingDirection::In) - 1.0).abs() < EPS);
    }

    #[test]
    fn tween_moves_monotonically_toward_target() {
        let mut tween = ProgressTween::new(
            0.0,
            1.0,
            0.6,
            EasingStyle::Quad,
            EasingDirection::Out,
        );
        let mut prev = 0.0;
        while !tween.finished() {
            let v = tween.advance(0.016);
            assert!(v >= prev - EPS);
            assert!(v <= 1.0 + EPS);
            prev = v;
        }
        assert!((prev - 1.0).abs() < EPS);
    }

    #[test]
    fn instant_tween_returns_target_on_first_sample() {
        let mut tween = ProgressTween::new(
            0.2,
            0.8,
            0.0,
            EasingStyle::Quad,
            EasingDirection::Out,
        );
        assert!((tween.advance(0.016) - 0.8).abs() < EPS);
        assert!(tween.finished());
    }

    #[test]
    fn value_is_stable_once_finished() {
        let mut tween = ProgressTween::new(
            0.1,
            0.9,
            0.5,
            EasingStyle::Cubic,
            EasingDirection::InOut,
        );
        for _ in 0..100 {
            tween.advance(0.016);
        }
        assert!(tween.finished());
        assert!((tween.value() - 0.9).abs() < EPS);
    }
}
