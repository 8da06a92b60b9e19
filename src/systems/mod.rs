//! Application systems
//!
//! Pieces of the viewer kept out of main.rs so they can be tested.

mod window;

pub use window::{ViewStatus, ViewerError, WindowSystem};
