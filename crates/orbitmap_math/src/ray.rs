//! Ray casting against infinite planes
//!
//! Used to turn a screen-space pointer into the world-space point on the
//! ground that sits under it.

use crate::Vec3;
use serde::{Serialize, Deserialize};

/// An infinite plane: every point `p` with `normal . p + constant == 0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed offset from the origin along `-normal`
    pub constant: f32,
}

impl Plane {
    /// The map ground: Y-up plane through the origin
    pub const GROUND: Self = Self { normal: Vec3::Y, constant: 0.0 };

    /// Create a plane from a normal (normalized here) and constant
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self {
            normal: normal.normalized(),
            constant,
        }
    }

    /// Signed distance from the plane to a point
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::GROUND
    }
}

/// A half-line starting at `origin` travelling along `direction`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Point at parameter `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the plane, if the ray reaches it
    ///
    /// A ray parallel to the plane only hits when its origin lies on the plane
    /// (distance 0). Planes behind the origin are never hit.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denominator = plane.normal.dot(self.direction);

        if denominator == 0.0 {
            return if plane.distance_to_point(self.origin) == 0.0 {
                Some(0.0)
            } else {
                None
            };
        }

        let t = -(self.origin.dot(plane.normal) + plane.constant) / denominator;
        if t >= 0.0 && t.is_finite() {
            Some(t)
        } else {
            None
        }
    }

    /// Intersection point with a plane, if any
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }
}
