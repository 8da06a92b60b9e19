//! Orbit camera map view
//!
//! The camera circles a focus point on the ground plane. Heading turns it
//! around the vertical axis, tilt leans it away from looking straight down,
//! and distance sets how far it sits from the focus.

use std::f32::consts::TAU;

use orbitmap_input::MapControl;
use orbitmap_math::{PerspectiveCamera, Vec2, Vec3};

use crate::config::CameraConfig;

/// Pose the view returns to on reset
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    focus: Vec3,
    heading: f32,
    tilt: f32,
    distance: f32,
}

/// Map camera driven by [`GestureControl`](orbitmap_input::GestureControl)
#[derive(Debug, Clone)]
pub struct MapView {
    focus: Vec3,
    heading: f32,
    tilt: f32,
    distance: f32,
    viewport: Vec2,
    camera: PerspectiveCamera,

    // Limits, all angles in radians
    min_tilt: f32,
    max_tilt: f32,
    min_distance: f32,
    zoom_step: f32,

    home: Pose,
}

impl MapView {
    /// Create a view from camera settings and a viewport size in pixels
    pub fn new(config: &CameraConfig, viewport: Vec2) -> Self {
        let min_tilt = config.min_tilt.to_radians();
        let max_tilt = config.max_tilt.to_radians().max(min_tilt);
        let min_distance = config.min_distance.max(f32::EPSILON);

        let home = Pose {
            focus: Vec3::ZERO,
            heading: config.start_heading.to_radians().rem_euclid(TAU),
            tilt: config.start_tilt.to_radians().clamp(min_tilt, max_tilt),
            distance: config.start_distance.max(min_distance),
        };

        let mut view = Self {
            focus: home.focus,
            heading: home.heading,
            tilt: home.tilt,
            distance: home.distance,
            viewport,
            camera: PerspectiveCamera {
                fov_y: config.fov.to_radians(),
                near: config.near,
                far: config.far,
                ..PerspectiveCamera::default()
            },
            min_tilt,
            max_tilt,
            min_distance,
            zoom_step: config.zoom_step,
            home,
        };
        view.update_camera();
        view
    }

    /// Point on the ground the camera orbits
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Distance from the camera to the focus point
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Resize the viewport, keeping the camera aspect in sync
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
        self.update_camera();
    }

    /// Return to the starting pose
    pub fn reset(&mut self) {
        self.focus = self.home.focus;
        self.heading = self.home.heading;
        self.tilt = self.home.tilt;
        self.distance = self.home.distance;
        self.update_camera();
        log::info!("Map view reset to starting pose");
    }

    /// Divide the distance by `factor`, ignoring nonsensical factors
    fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ignoring zoom factor {}", factor);
            return;
        }
        self.distance = (self.distance / factor).max(self.min_distance);
        log::trace!("Zoom x{} -> distance {:.2}", factor, self.distance);
        self.update_camera();
    }

    fn update_camera(&mut self) {
        let (sin_t, cos_t) = self.tilt.sin_cos();
        let (sin_h, cos_h) = self.heading.sin_cos();

        let offset = Vec3::new(sin_t * sin_h, cos_t, sin_t * cos_h);
        // Derivative of the offset towards vertical, never parallel to it
        let up = Vec3::new(-cos_t * sin_h, sin_t, -cos_t * cos_h);

        self.camera.position = self.focus + offset * self.distance;
        self.camera.target = self.focus;
        self.camera.up = up;
        if self.viewport.x > 0.0 && self.viewport.y > 0.0 {
            self.camera.aspect = self.viewport.x / self.viewport.y;
        }
    }
}

impl MapControl for MapView {
    type Camera = PerspectiveCamera;

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn rotate_angle(&self) -> f32 {
        self.heading
    }

    fn tilt_angle(&self) -> f32 {
        self.tilt
    }

    fn rotate_to(&mut self, angle: f32) {
        if !angle.is_finite() {
            return;
        }
        self.heading = angle.rem_euclid(TAU);
        self.update_camera();
    }

    fn tilt_to(&mut self, angle: f32) {
        if !angle.is_finite() {
            return;
        }
        self.tilt = angle.clamp(self.min_tilt, self.max_tilt);
        self.update_camera();
    }

    fn zoom_in(&mut self, factor: Option<f32>) {
        self.zoom_by(factor.unwrap_or(self.zoom_step));
    }

    fn zoom_out(&mut self, factor: Option<f32>) {
        self.zoom_by(factor.unwrap_or(1.0 / self.zoom_step));
    }

    fn translate_by(&mut self, offset: Vec3) {
        self.focus += offset;
        self.update_camera();
    }

    fn scale_by(&mut self, factor: f32) {
        self.zoom_by(factor);
    }
}
