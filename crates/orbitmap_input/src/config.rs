//! Gesture sensitivity configuration

use serde::{Serialize, Deserialize};
use std::f32::consts::TAU;

/// Tunable constants for [`GestureControl`](crate::GestureControl)
///
/// Defaults reproduce the stock map feel: one full orbit per 900 px of drag,
/// 5% zoom per wheel notch, 3% per pinch step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Multiplier on drag-to-orbit sensitivity
    pub user_rotate_speed: f32,
    /// Multiplier on the idle spin angle per tick
    pub auto_rotate_speed: f32,
    /// Drag distance in pixels that maps to one revolution at speed 1.0
    pub pixels_per_round: f32,
    /// Zoom factor per wheel notch
    pub scale_step: f32,
    /// Zoom factor per pinch step
    pub touch_scale_step: f32,
    /// Minimum change in finger distance (pixels) before a pinch zooms
    pub pinch_threshold: f32,
    /// Clip-space depth the pick ray passes through
    pub ray_depth: f32,
    /// Whether the scroll wheel zooms initially
    pub scroll_wheel_zoom: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            user_rotate_speed: 2.0,
            auto_rotate_speed: 1.0,
            pixels_per_round: 1800.0,
            scale_step: 1.05,
            touch_scale_step: 1.03,
            pinch_threshold: 5.0,
            ray_depth: 0.5,
            scroll_wheel_zoom: true,
        }
    }
}

impl GestureConfig {
    /// Idle spin per tick: one revolution per hour at 60 ticks per second
    pub fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// Orbit angle in radians for a drag of `pixels`
    pub fn drag_angle(&self, pixels: f32) -> f32 {
        TAU * pixels / self.pixels_per_round * self.user_rotate_speed
    }

    /// Builder: set drag-to-orbit speed
    pub fn with_user_rotate_speed(mut self, speed: f32) -> Self {
        self.user_rotate_speed = speed;
        self
    }

    /// Builder: set idle spin speed
    pub fn with_auto_rotate_speed(mut self, speed: f32) -> Self {
        self.auto_rotate_speed = speed;
        self
    }

    /// Builder: set the wheel zoom step
    pub fn with_scale_step(mut self, step: f32) -> Self {
        self.scale_step = step;
        self
    }

    /// Builder: set the pinch noise threshold
    pub fn with_pinch_threshold(mut self, pixels: f32) -> Self {
        self.pinch_threshold = pixels;
        self
    }

    /// Check that every value yields finite camera commands
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("pixels_per_round", self.pixels_per_round),
            ("scale_step", self.scale_step),
            ("touch_scale_step", self.touch_scale_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("gesture.{} must be a positive number, got {}", name, value));
            }
        }

        let finite = [
            ("user_rotate_speed", self.user_rotate_speed),
            ("auto_rotate_speed", self.auto_rotate_speed),
            ("pinch_threshold", self.pinch_threshold),
            ("ray_depth", self.ray_depth),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("gesture.{} must be finite, got {}", name, value));
            }
        }
        Ok(())
    }
}
