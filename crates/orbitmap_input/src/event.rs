//! Platform-agnostic input events
//!
//! Hosts translate their native mouse, touch, and wheel events into these
//! before handing them to [`GestureControl`](crate::GestureControl).

use orbitmap_math::Vec2;

use crate::listeners::EventKind;

/// Mouse button identifier, numbered like DOM `MouseEvent.button`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Button 0: left button
    Primary,
    /// Button 1: middle button / wheel click
    Auxiliary,
    /// Button 2: right button
    Secondary,
    /// Any other button (back, forward, ...)
    Other(u16),
}

/// Device that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer sample: a mouse cursor or a set of touch contacts
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Which device produced the event
    pub source: PointerSource,
    /// Button that changed state (mouse down/up only)
    pub button: Option<MouseButton>,
    /// Page-space points: the cursor for a mouse, every active contact for touch
    pub points: Vec<Vec2>,
    /// Whether the pointer is over the map viewport
    pub over_viewport: bool,
}

impl PointerEvent {
    /// Mouse press or release at `position`
    pub fn mouse(position: Vec2, button: MouseButton) -> Self {
        Self {
            source: PointerSource::Mouse,
            button: Some(button),
            points: vec![position],
            over_viewport: true,
        }
    }

    /// Mouse motion to `position`
    pub fn mouse_move(position: Vec2) -> Self {
        Self {
            source: PointerSource::Mouse,
            button: None,
            points: vec![position],
            over_viewport: true,
        }
    }

    /// Touch event carrying the currently active contacts
    pub fn touch(points: Vec<Vec2>) -> Self {
        Self {
            source: PointerSource::Touch,
            button: None,
            points,
            over_viewport: true,
        }
    }

    /// Builder: mark whether the pointer is over the viewport
    pub fn with_over_viewport(mut self, over_viewport: bool) -> Self {
        self.over_viewport = over_viewport;
        self
    }

    /// The point single-pointer gestures track: the cursor, or the first contact
    pub fn primary_point(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    /// More than one simultaneous touch contact
    pub fn is_multi_touch(&self) -> bool {
        self.source == PointerSource::Touch && self.points.len() > 1
    }

    /// Exactly one touch contact
    pub fn is_single_touch(&self) -> bool {
        self.source == PointerSource::Touch && self.points.len() == 1
    }
}

/// Scroll-wheel delta in one of the conventions browsers and platforms report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// `wheelDelta` style: multiples of 120 per notch, positive away from the user
    Legacy(f32),
    /// `detail` style: lines per notch (usually 3), positive toward the user
    Detail(f32),
    /// Already normalized notches, positive away from the user
    Notches(f32),
}

impl WheelDelta {
    /// Notches scrolled, positive away from the user (zoom in)
    pub fn normalized(self) -> f32 {
        match self {
            WheelDelta::Legacy(delta) => delta / 120.0,
            WheelDelta::Detail(detail) => -detail / 3.0,
            WheelDelta::Notches(notches) => notches,
        }
    }
}

/// Input event fed to the gesture controller
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed or touch contact started
    PointerDown(PointerEvent),
    /// Cursor or touch contacts moved
    PointerMove(PointerEvent),
    /// Mouse button released or touch contact ended
    PointerUp(PointerEvent),
    /// Scroll wheel turned
    Wheel(WheelDelta),
    /// Native context menu requested
    ContextMenu,
}

impl InputEvent {
    /// Listener kind this event is delivered through
    pub fn kind(&self) -> EventKind {
        let touch = |e: &PointerEvent| e.source == PointerSource::Touch;
        match self {
            InputEvent::PointerDown(e) if touch(e) => EventKind::TouchStart,
            InputEvent::PointerDown(_) => EventKind::MouseDown,
            InputEvent::PointerMove(e) if touch(e) => EventKind::TouchMove,
            InputEvent::PointerMove(_) => EventKind::MouseMove,
            InputEvent::PointerUp(e) if touch(e) => EventKind::TouchEnd,
            InputEvent::PointerUp(_) => EventKind::MouseUp,
            InputEvent::Wheel(_) => EventKind::MouseWheel,
            InputEvent::ContextMenu => EventKind::ContextMenu,
        }
    }
}
