//! Perspective camera and pick-ray casting
//!
//! The gesture controller never reads camera matrices directly; it asks for
//! a ray through a clip-space point via [`PickRay`] and intersects that with
//! the ground. Any camera that can answer that question can drive panning.

use crate::mat4::{self, Mat4};
use crate::{Ray, Vec3};

/// Cameras that can cast a world-space ray through a clip-space point
pub trait PickRay {
    /// Ray from the camera through `ndc`
    ///
    /// `ndc.x` and `ndc.y` are in [-1, 1] (+Y up); `ndc.z` is a depth hint
    /// used to pick the point the ray passes through. Returns `None` when
    /// the camera cannot be inverted.
    fn pick_ray(&self, ndc: Vec3) -> Option<Ray>;
}

/// Look-at perspective camera
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Approximate up direction
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.target, self.up)
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined world-to-clip matrix
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }

    /// Map a clip-space point back to world space
    pub fn unproject(&self, ndc: Vec3) -> Option<Vec3> {
        let inv = mat4::inverse(self.view_projection())?;
        mat4::transform_point(inv, ndc)
    }
}

impl PickRay for PerspectiveCamera {
    fn pick_ray(&self, ndc: Vec3) -> Option<Ray> {
        let through = self.unproject(ndc)?;
        let direction = through - self.position;
        if direction.length_squared() == 0.0 {
            return None;
        }
        Some(Ray::new(self.position, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plane;

    const EPSILON: f32 = 0.001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_center_ray_hits_target() {
        let camera = PerspectiveCamera::default();
        let ray = camera.pick_ray(Vec3::new(0.0, 0.0, 0.5)).unwrap();

        assert!(vec_approx_eq(ray.origin, camera.position));
        let hit = ray.intersect_plane(&Plane::GROUND).unwrap();
        assert!(vec_approx_eq(hit, Vec3::ZERO), "Center of view should land on target, got {:?}", hit);
    }

    #[test]
    fn test_right_edge_lands_on_positive_x() {
        let camera = PerspectiveCamera::default();
        let ray = camera.pick_ray(Vec3::new(1.0, 0.0, 0.5)).unwrap();
        let hit = ray.intersect_plane(&Plane::GROUND).unwrap();

        // Camera looks toward -Z from +Z, so screen right is world +X
        assert!(hit.x > 0.0, "got {:?}", hit);
    }

    #[test]
    fn test_upper_half_lands_farther_away() {
        let camera = PerspectiveCamera::default();
        let low = camera.pick_ray(Vec3::new(0.0, -0.5, 0.5)).unwrap()
            .intersect_plane(&Plane::GROUND).unwrap();
        let high = camera.pick_ray(Vec3::new(0.0, 0.5, 0.5)).unwrap()
            .intersect_plane(&Plane::GROUND).unwrap();

        assert!(high.z < low.z, "high = {:?}, low = {:?}", high, low);
    }

    #[test]
    fn test_unproject_roundtrip() {
        let camera = PerspectiveCamera {
            position: Vec3::new(4.0, 6.0, -3.0),
            target: Vec3::new(1.0, 0.0, 1.0),
            aspect: 1.6,
            ..PerspectiveCamera::default()
        };
        let world = Vec3::new(1.0, 0.0, 1.0);
        let ndc = mat4::transform_point(camera.view_projection(), world).unwrap();
        let back = camera.unproject(ndc).unwrap();
        assert!(vec_approx_eq(back, world), "got {:?}", back);
    }
}
