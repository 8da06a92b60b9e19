//! Translation from winit window events to gesture input
//!
//! winit reports one cursor and individual touch contacts; the gesture
//! controller wants DOM-like events carrying every active contact. The
//! translator keeps just enough state to bridge the two.
//!
//! winit windows have no native context menu, so `ContextMenu` is never
//! produced here.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent};

use orbitmap_input::{EventTarget, InputEvent, ListenerTable, MouseButton, PointerEvent, WheelDelta};
use orbitmap_math::Vec2;

/// Converts winit events into [`InputEvent`]s for the gesture controller
#[derive(Debug, Default)]
pub struct WinitTranslator {
    cursor: Vec2,
    cursor_inside: bool,
    /// Active contacts in order of first contact
    touches: Vec<(u64, Vec2)>,
}

impl WinitTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget active touches, e.g. after focus loss
    ///
    /// The cursor position and hover flag are kept; winit reports those
    /// again on its own.
    pub fn clear(&mut self) {
        self.touches.clear();
    }

    /// Translate and keep the event only if something listens for it
    pub fn route(&mut self, event: &WindowEvent, listeners: &ListenerTable) -> Option<InputEvent> {
        let (target, input) = self.translate(event)?;
        deliver(listeners, target, input)
    }

    /// Translate a window event into gesture input and the target it is delivered on
    pub fn translate(&mut self, event: &WindowEvent) -> Option<(EventTarget, InputEvent)> {
        match event {
            WindowEvent::CursorEntered { .. } => {
                self.cursor_inside = true;
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_inside = false;
                None
            }
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(*delta),
            WindowEvent::Touch(Touch { phase, location, id, .. }) => {
                Some(self.touch(*phase, *id, *location))
            }
            _ => None,
        }
    }

    /// Cursor motion, watched on the window
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> (EventTarget, InputEvent) {
        self.cursor = to_vec2(position);
        let pointer = PointerEvent::mouse_move(self.cursor).with_over_viewport(self.cursor_inside);
        (EventTarget::Window, InputEvent::PointerMove(pointer))
    }

    /// Presses land on the viewport, releases on the window
    pub fn mouse_input(
        &self,
        state: ElementState,
        button: WinitButton,
    ) -> Option<(EventTarget, InputEvent)> {
        let pointer = PointerEvent::mouse(self.cursor, map_button(button))
            .with_over_viewport(self.cursor_inside);

        match state {
            ElementState::Pressed if self.cursor_inside => {
                Some((EventTarget::Viewport, InputEvent::PointerDown(pointer)))
            }
            ElementState::Pressed => None,
            ElementState::Released => Some((EventTarget::Window, InputEvent::PointerUp(pointer))),
        }
    }

    /// Line deltas count as notches; 120 pixels make one notch
    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> Option<(EventTarget, InputEvent)> {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => WheelDelta::Notches(y),
            MouseScrollDelta::PixelDelta(pos) => WheelDelta::Legacy(pos.y as f32),
        };
        Some((EventTarget::ViewportParent, InputEvent::Wheel(delta)))
    }

    /// Update the contact list and report every remaining contact
    pub fn touch(
        &mut self,
        phase: TouchPhase,
        id: u64,
        location: PhysicalPosition<f64>,
    ) -> (EventTarget, InputEvent) {
        let point = to_vec2(location);

        match phase {
            TouchPhase::Started => {
                match self.touches.iter_mut().find(|(touch_id, _)| *touch_id == id) {
                    Some(entry) => entry.1 = point,
                    None => self.touches.push((id, point)),
                }
                (EventTarget::Viewport, InputEvent::PointerDown(self.touch_event()))
            }
            TouchPhase::Moved => {
                if let Some(entry) = self.touches.iter_mut().find(|(touch_id, _)| *touch_id == id) {
                    entry.1 = point;
                }
                (EventTarget::Window, InputEvent::PointerMove(self.touch_event()))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(touch_id, _)| *touch_id != id);
                (EventTarget::Window, InputEvent::PointerUp(self.touch_event()))
            }
        }
    }

    fn touch_event(&self) -> PointerEvent {
        PointerEvent::touch(self.touches.iter().map(|(_, point)| *point).collect())
    }
}

fn deliver(listeners: &ListenerTable, target: EventTarget, input: InputEvent) -> Option<InputEvent> {
    if listeners.is_registered(target, input.kind()) {
        Some(input)
    } else {
        log::trace!("No listener for {:?} on {:?}", input.kind(), target);
        None
    }
}

fn to_vec2(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

fn map_button(button: WinitButton) -> MouseButton {
    match button {
        WinitButton::Left => MouseButton::Primary,
        WinitButton::Middle => MouseButton::Auxiliary,
        WinitButton::Right => MouseButton::Secondary,
        WinitButton::Back => MouseButton::Other(3),
        WinitButton::Forward => MouseButton::Other(4),
        WinitButton::Other(n) => MouseButton::Other(n),
    }
}
