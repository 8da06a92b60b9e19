//! Screen-to-ground projection

use orbitmap_math::{PickRay, Plane, Vec2, Vec3};

/// Projects viewport pixels onto the ground plane
///
/// Each controller owns one, so several maps on a page never share scratch
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProjector {
    /// Plane pointer positions are projected onto
    pub ground: Plane,
    /// Clip-space depth the pick ray passes through
    pub depth: f32,
}

impl Default for ViewProjector {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ViewProjector {
    pub fn new(depth: f32) -> Self {
        Self {
            ground: Plane::GROUND,
            depth,
        }
    }

    /// Clip-space point for a viewport pixel, `None` for an empty viewport
    pub fn to_clip_space(&self, viewport: Vec2, point: Vec2) -> Option<Vec3> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        Some(Vec3::new(
            (point.x / viewport.x) * 2.0 - 1.0,
            -(point.y / viewport.y) * 2.0 + 1.0,
            self.depth,
        ))
    }

    /// Ground point under a viewport pixel
    ///
    /// `None` when the viewport is empty, the camera cannot cast a ray, or
    /// the ray never reaches the ground (e.g. it runs parallel to it).
    pub fn view_to_world<C: PickRay + ?Sized>(
        &self,
        camera: &C,
        viewport: Vec2,
        point: Vec2,
    ) -> Option<Vec3> {
        let ndc = self.to_clip_space(viewport, point)?;
        camera.pick_ray(ndc)?.intersect_plane(&self.ground)
    }
}
