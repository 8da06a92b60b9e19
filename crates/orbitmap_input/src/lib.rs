//! Map Gesture Input
//!
//! This crate turns raw pointer and touch input into camera commands for a
//! 3D map view: orbit, tilt, pan, zoom, and click.
//!
//! - [`GestureControl`] - The gesture state machine
//! - [`MapControl`] - What the controller needs from the map it drives
//! - [`InputEvent`] - Platform-agnostic pointer, wheel, and context-menu events
//! - [`ListenerTable`] - Host-side listener registry the controller attaches to

mod callbacks;
mod config;
mod event;
mod gesture_control;
mod listeners;
mod map_control;
mod projector;
mod session;

pub use callbacks::{GestureCallbacks, PointerCallback};
pub use config::GestureConfig;
pub use event::{InputEvent, MouseButton, PointerEvent, PointerSource, WheelDelta};
pub use gesture_control::GestureControl;
pub use listeners::{
    EventHost, EventKind, EventTarget, ListenerId, ListenerOptions, ListenerTable, Registration,
    GESTURE_LISTENERS,
};
pub use map_control::MapControl;
pub use projector::ViewProjector;
pub use session::{GestureSession, PointerState, MAX_TOUCH_POINTS};
