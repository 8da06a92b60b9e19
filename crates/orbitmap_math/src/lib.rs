//! Geometry for the orbitmap viewer
//!
//! This crate provides the small amount of 3D math the gesture controller
//! needs from a camera: screen-space vectors, world-space vectors, matrices,
//! and ray casting against the ground plane.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector for screen coordinates
//! - [`Vec3`] - 3D vector for world positions and directions
//! - [`Mat4`] - 4x4 column-major matrix
//!
//! ## Picking
//!
//! - [`Ray`] - Half-line with an origin and a unit direction
//! - [`Plane`] - Infinite plane `normal . p + constant = 0`
//! - [`PickRay`] - Trait for cameras that can cast a ray through a clip-space point
//! - [`PerspectiveCamera`] - Look-at perspective camera implementing [`PickRay`]

mod vec2;
mod vec3;
pub mod mat4;
pub mod ray;
pub mod camera;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use mat4::Mat4;
pub use ray::{Ray, Plane};
pub use camera::{PerspectiveCamera, PickRay};
