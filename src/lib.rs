//! Orbitmap - gesture-driven 3D map viewer
//!
//! Pointer, touch, and wheel input drives an orbit camera over a ground
//! plane. The gesture state machine lives in `orbitmap_input`; this crate
//! holds the reference map, configuration, and the winit glue.

pub mod config;
pub mod input;
pub mod map;
pub mod systems;
