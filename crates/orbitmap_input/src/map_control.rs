//! The map collaborator the gesture controller drives

use orbitmap_math::{PickRay, Vec2, Vec3};

/// Camera operations a map exposes to the gesture controller
///
/// The controller only issues commands through this trait; the map stays
/// the single owner of camera state.
pub trait MapControl {
    /// Camera used to cast pick rays for panning
    type Camera: PickRay;

    /// Current camera
    fn camera(&self) -> &Self::Camera;

    /// Viewport size in pixels (width, height)
    fn viewport_size(&self) -> Vec2;

    /// Current heading in radians
    fn rotate_angle(&self) -> f32;

    /// Current tilt in radians
    fn tilt_angle(&self) -> f32;

    /// Set the heading
    fn rotate_to(&mut self, angle: f32);

    /// Set the tilt
    fn tilt_to(&mut self, angle: f32);

    /// Zoom in by `factor` (> 1), or by the map's own step when `None`
    fn zoom_in(&mut self, factor: Option<f32>);

    /// Zoom out by `factor` (< 1), or by the map's own step when `None`
    fn zoom_out(&mut self, factor: Option<f32>);

    /// Move the camera focus by a world-space offset
    fn translate_by(&mut self, offset: Vec3);

    /// Scale the view; factors above 1 bring the camera closer
    fn scale_by(&mut self, factor: f32);
}
