//! Gesture controller for map camera input
//!
//! Controls:
//! - Left-click / one finger: click, or pan once the pointer moves
//! - Right-click + drag: orbit (horizontal) and tilt (vertical)
//! - Middle-click + drag: zoom in (drag down) or out (drag up)
//! - Two-finger pinch: zoom
//! - Three fingers: orbit mode (no camera motion yet)
//! - Scroll wheel: exponential zoom
//!
//! The context menu is always suppressed so right-drag stays available for
//! orbiting.

use orbitmap_math::{Vec2, Vec3};

use crate::callbacks::GestureCallbacks;
use crate::config::GestureConfig;
use crate::event::{InputEvent, MouseButton, PointerEvent, WheelDelta};
use crate::listeners::{EventHost, ListenerId, GESTURE_LISTENERS};
use crate::map_control::MapControl;
use crate::projector::ViewProjector;
use crate::session::{GestureSession, PointerState};

/// Turns pointer, touch, and wheel events into map camera commands
#[derive(Debug)]
pub struct GestureControl {
    // Interaction state
    session: GestureSession,
    projector: ViewProjector,
    callbacks: GestureCallbacks,

    // Host registrations made at construction
    listeners: Vec<ListenerId>,

    // Configuration
    config: GestureConfig,
    /// Gate for all event processing; listeners stay registered
    pub enabled: bool,
    /// Gate for wheel zoom only
    pub scroll_wheel_zoom_enabled: bool,
}

impl GestureControl {
    /// Create a controller and register its listeners with `host`
    pub fn new<H: EventHost + ?Sized>(config: GestureConfig, host: &mut H) -> Self {
        let listeners = GESTURE_LISTENERS
            .iter()
            .map(|registration| host.add_listener(*registration))
            .collect();

        log::debug!("Gesture control attached ({} listeners)", GESTURE_LISTENERS.len());
        if let Err(problem) = config.validate() {
            log::warn!("{}; the affected gestures will not move the camera", problem);
        }

        Self {
            session: GestureSession::default(),
            projector: ViewProjector::new(config.ray_depth),
            callbacks: GestureCallbacks::default(),
            listeners,
            scroll_wheel_zoom_enabled: config.scroll_wheel_zoom,
            enabled: true,
            config,
        }
    }

    /// Remove every listener registered at construction
    ///
    /// After this the controller ignores all events. Calling it twice is a no-op.
    pub fn destroy<H: EventHost + ?Sized>(&mut self, host: &mut H) {
        let count = self.listeners.len();
        for id in self.listeners.drain(..) {
            if !host.remove_listener(id) {
                log::warn!("Gesture listener {:?} was already removed from its host", id);
            }
        }
        if count > 0 {
            log::debug!("Gesture control detached ({} listeners)", count);
        }
    }

    /// Forget the in-flight interaction without touching listener registration
    pub fn reset(&mut self) {
        if self.session.state.is_active() {
            log::debug!("Gesture reset while {:?}", self.session.state);
        }
        self.session = GestureSession::default();
    }

    /// Whether the controller still has listeners registered
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Current gesture state
    pub fn state(&self) -> PointerState {
        self.session.state
    }

    /// Data of the current interaction
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Set the click callback, replacing any previous one
    pub fn on_click(&mut self, callback: impl FnMut(&PointerEvent) + 'static) {
        self.callbacks.set_click(Box::new(callback));
    }

    /// Set the hover callback, replacing any previous one
    pub fn on_hover(&mut self, callback: impl FnMut(&PointerEvent) + 'static) {
        self.callbacks.set_hover(Box::new(callback));
    }

    pub fn clear_click_listener(&mut self) {
        self.callbacks.clear_click();
    }

    pub fn clear_hover_listener(&mut self) {
        self.callbacks.clear_hover();
    }

    /// Process one input event
    ///
    /// Returns true when the host should suppress the event's default
    /// handling, which is every event while attached.
    pub fn handle_event<M: MapControl>(&mut self, map: &mut M, event: &InputEvent) -> bool {
        if !self.is_attached() {
            return false;
        }

        match event {
            InputEvent::PointerDown(pointer) => {
                if pointer.is_multi_touch() {
                    self.touch_start(pointer);
                } else {
                    self.start(pointer);
                }
            }
            InputEvent::PointerMove(pointer) => {
                let multi_touch_state =
                    matches!(self.session.state, PointerState::Zoom | PointerState::Rotate);
                if pointer.is_multi_touch() && multi_touch_state {
                    self.touch_move(map, pointer);
                } else {
                    self.move_pointer(map, pointer);
                }
            }
            InputEvent::PointerUp(pointer) => self.end(pointer),
            InputEvent::Wheel(delta) => self.wheel(map, *delta),
            InputEvent::ContextMenu => {}
        }

        true
    }

    /// Pan so the ground point under `start` ends up under `end`
    pub fn pan<M: MapControl>(&self, map: &mut M, start: Vec2, end: Vec2) {
        let (Some(from), Some(to)) = (self.view_to_world(map, start), self.view_to_world(map, end)) else {
            log::trace!("Pan skipped: pointer is off the ground plane");
            return;
        };
        let offset = from - to;
        log::trace!("Pan by {:?}", offset);
        map.translate_by(offset);
    }

    /// Ground point under a viewport pixel
    pub fn view_to_world<M: MapControl>(&self, map: &M, point: Vec2) -> Option<Vec3> {
        self.projector.view_to_world(map.camera(), map.viewport_size(), point)
    }

    /// Idle spin step, see [`GestureConfig::auto_rotation_angle`]
    pub fn auto_rotation_angle(&self) -> f32 {
        self.config.auto_rotation_angle()
    }

    /// Orbit left by `angle`, or by the idle spin step when `None`
    pub fn rotate_left<M: MapControl>(&self, map: &mut M, angle: Option<f32>) {
        let angle = angle.unwrap_or_else(|| self.auto_rotation_angle());
        map.rotate_to(map.rotate_angle() - angle);
    }

    /// Orbit right by `angle`, or by the idle spin step when `None`
    pub fn rotate_right<M: MapControl>(&self, map: &mut M, angle: Option<f32>) {
        let angle = angle.unwrap_or_else(|| self.auto_rotation_angle());
        map.rotate_to(map.rotate_angle() + angle);
    }

    /// Tilt up by `angle`, or by the idle spin step when `None`
    pub fn rotate_up<M: MapControl>(&self, map: &mut M, angle: Option<f32>) {
        let angle = angle.unwrap_or_else(|| self.auto_rotation_angle());
        map.tilt_to(map.tilt_angle() - angle);
    }

    /// Tilt down by `angle`, or by the idle spin step when `None`
    pub fn rotate_down<M: MapControl>(&self, map: &mut M, angle: Option<f32>) {
        let angle = angle.unwrap_or_else(|| self.auto_rotation_angle());
        map.tilt_to(map.tilt_angle() + angle);
    }

    /// Builder: start with wheel zoom on or off
    pub fn with_scroll_wheel_zoom(mut self, enabled: bool) -> Self {
        self.scroll_wheel_zoom_enabled = enabled;
        self
    }

    fn set_state(&mut self, state: PointerState) {
        if self.session.state != state {
            log::debug!("Gesture {:?} -> {:?}", self.session.state, state);
            self.session.state = state;
        }
    }

    fn start(&mut self, pointer: &PointerEvent) {
        if !self.enabled {
            return;
        }
        let Some(point) = pointer.primary_point() else {
            return;
        };

        if self.session.state == PointerState::None {
            match pointer.button {
                Some(MouseButton::Primary) => self.set_state(PointerState::Click),
                Some(MouseButton::Auxiliary) => self.set_state(PointerState::Zoom),
                Some(MouseButton::Secondary) => self.set_state(PointerState::Rotate),
                None if pointer.is_single_touch() => self.set_state(PointerState::Click),
                _ => {}
            }
        }

        self.session.start_position = point;
    }

    fn move_pointer<M: MapControl>(&mut self, map: &mut M, pointer: &PointerEvent) {
        if !self.enabled {
            return;
        }

        if self.session.state == PointerState::None {
            if pointer.over_viewport && self.callbacks.has_hover() {
                self.callbacks.emit_hover(pointer);
            }
            return;
        }

        let Some(point) = pointer.primary_point() else {
            return;
        };
        self.session.end_position = point;
        self.session.delta = self.session.end_position - self.session.start_position;
        if self.session.delta.length() == 0.0 {
            return;
        }

        let delta = self.session.delta;
        match self.session.state {
            PointerState::Rotate => {
                let yaw = self.config.drag_angle(delta.x);
                let pitch = self.config.drag_angle(delta.y);
                if yaw.is_finite() && pitch.is_finite() {
                    self.rotate_left(map, Some(yaw));
                    self.rotate_up(map, Some(pitch));
                } else {
                    log::warn!(
                        "Orbit skipped: pixels_per_round {} gives a non-finite angle",
                        self.config.pixels_per_round
                    );
                }
            }
            PointerState::Zoom => {
                if delta.y > 0.0 {
                    map.zoom_in(None);
                } else {
                    map.zoom_out(None);
                }
            }
            PointerState::Click | PointerState::Pan => {
                self.set_state(PointerState::Pan);
                self.pan(map, self.session.start_position, self.session.end_position);
            }
            _ => {}
        }

        self.session.start_position = self.session.end_position;
    }

    fn end(&mut self, pointer: &PointerEvent) {
        if !self.enabled || self.session.state == PointerState::None {
            return;
        }

        let state = self.session.state;
        self.set_state(PointerState::None);
        if state == PointerState::Click {
            self.callbacks.emit_click(pointer);
        }
    }

    fn wheel<M: MapControl>(&mut self, map: &mut M, delta: WheelDelta) {
        if !self.enabled || !self.scroll_wheel_zoom_enabled {
            return;
        }

        let notches = delta.normalized();
        if notches == 0.0 || !notches.is_finite() {
            return;
        }
        let scale = self.config.scale_step.powf(notches);
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("Wheel zoom skipped: scale_step {} gives x{}", self.config.scale_step, scale);
            return;
        }
        log::trace!("Wheel zoom x{}", scale);
        map.scale_by(scale);
    }

    fn touch_start(&mut self, pointer: &PointerEvent) {
        if !self.enabled {
            return;
        }

        self.session.capture_touch_start(&pointer.points);
        if pointer.points.len() == 2 {
            self.set_state(PointerState::Zoom);
        } else {
            self.set_state(PointerState::Rotate);
        }
    }

    fn touch_move<M: MapControl>(&mut self, map: &mut M, pointer: &PointerEvent) {
        if !self.enabled || self.session.state == PointerState::None {
            return;
        }

        self.session.capture_touch_end(&pointer.points);
        if self.session.state == PointerState::Zoom {
            let (start, end) = self.session.pinch_distances();
            // Below the threshold the baseline is kept, so slow pinches add up
            if (start - end).abs() < self.config.pinch_threshold {
                return;
            }
            let step = self.config.touch_scale_step;
            if !step.is_finite() || step <= 0.0 {
                log::warn!("Pinch zoom skipped: touch_scale_step {}", step);
            } else if start < end {
                map.zoom_in(Some(step));
            } else {
                map.zoom_out(Some(1.0 / step));
            }
        }
        self.session.advance_touches();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::ListenerTable;
    use orbitmap_math::{PickRay, Ray};

    /// Camera looking straight down from y = 10; one pixel is 0.01 world units
    struct TopDown;

    impl PickRay for TopDown {
        fn pick_ray(&self, ndc: Vec3) -> Option<Ray> {
            Some(Ray::new(Vec3::new(ndc.x * 4.0, 10.0, -ndc.y * 4.0), -Vec3::Y))
        }
    }

    #[derive(Default)]
    struct CountingMap {
        heading: f32,
        tilt: f32,
        calls: usize,
        translated: Vec3,
        zoom_ins: Vec<Option<f32>>,
        zoom_outs: Vec<Option<f32>>,
        scales: Vec<f32>,
    }

    impl MapControl for CountingMap {
        type Camera = TopDown;

        fn camera(&self) -> &TopDown {
            &TopDown
        }
        fn viewport_size(&self) -> Vec2 {
            Vec2::new(800.0, 800.0)
        }
        fn rotate_angle(&self) -> f32 {
            self.heading
        }
        fn tilt_angle(&self) -> f32 {
            self.tilt
        }
        fn rotate_to(&mut self, angle: f32) {
            self.calls += 1;
            self.heading = angle;
        }
        fn tilt_to(&mut self, angle: f32) {
            self.calls += 1;
            self.tilt = angle;
        }
        fn zoom_in(&mut self, factor: Option<f32>) {
            self.calls += 1;
            self.zoom_ins.push(factor);
        }
        fn zoom_out(&mut self, factor: Option<f32>) {
            self.calls += 1;
            self.zoom_outs.push(factor);
        }
        fn translate_by(&mut self, offset: Vec3) {
            self.calls += 1;
            self.translated += offset;
        }
        fn scale_by(&mut self, factor: f32) {
            self.calls += 1;
            self.scales.push(factor);
        }
    }

    fn setup() -> (GestureControl, ListenerTable, CountingMap) {
        let mut host = ListenerTable::new();
        let control = GestureControl::new(GestureConfig::default(), &mut host);
        (control, host, CountingMap::default())
    }

    fn down(x: f32, y: f32, button: MouseButton) -> InputEvent {
        InputEvent::PointerDown(PointerEvent::mouse(Vec2::new(x, y), button))
    }

    fn motion(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMove(PointerEvent::mouse_move(Vec2::new(x, y)))
    }

    fn up(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerUp(PointerEvent::mouse(Vec2::new(x, y), MouseButton::Primary))
    }

    #[test]
    fn test_construction_registers_listeners() {
        let (control, host, _) = setup();
        assert!(control.is_attached());
        assert_eq!(host.len(), GESTURE_LISTENERS.len());
        assert!(control.enabled);
        assert!(control.scroll_wheel_zoom_enabled);
    }

    #[test]
    fn test_buttons_select_state() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Primary));
        assert_eq!(control.state(), PointerState::Click);
        control.handle_event(&mut map, &up(0.0, 0.0));

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Auxiliary));
        assert_eq!(control.state(), PointerState::Zoom);
        control.handle_event(&mut map, &up(0.0, 0.0));

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Secondary));
        assert_eq!(control.state(), PointerState::Rotate);
        control.handle_event(&mut map, &up(0.0, 0.0));

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Other(3)));
        assert_eq!(control.state(), PointerState::None);
    }

    #[test]
    fn test_second_press_keeps_state_but_moves_anchor() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &down(10.0, 10.0, MouseButton::Secondary));
        control.handle_event(&mut map, &down(50.0, 60.0, MouseButton::Primary));

        assert_eq!(control.state(), PointerState::Rotate);
        assert_eq!(control.session().start_position, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_click_promoted_to_pan() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &down(400.0, 400.0, MouseButton::Primary));
        control.handle_event(&mut map, &motion(410.0, 400.0));

        assert_eq!(control.state(), PointerState::Pan);
        // Dragging right by 10 px moves the focus 0.1 world units left
        assert!((map.translated.x + 0.1).abs() < 1e-5, "got {:?}", map.translated);
        assert_eq!(control.session().start_position, Vec2::new(410.0, 400.0));
    }

    #[test]
    fn test_zoom_drag_direction() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Auxiliary));
        control.handle_event(&mut map, &motion(0.0, 3.0));
        control.handle_event(&mut map, &motion(0.0, 1.0));
        // Horizontal-only drag has dy == 0, which zooms out
        control.handle_event(&mut map, &motion(5.0, 1.0));

        assert_eq!(map.zoom_ins, vec![None]);
        assert_eq!(map.zoom_outs, vec![None, None]);
    }

    #[test]
    fn test_rotate_drag() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Secondary));
        control.handle_event(&mut map, &motion(90.0, -45.0));

        let config = GestureConfig::default();
        assert_eq!(map.heading, -config.drag_angle(90.0));
        assert_eq!(map.tilt, -config.drag_angle(-45.0));
    }

    #[test]
    fn test_hover_only_when_idle_and_over_viewport() {
        use std::cell::Cell;
        use std::rc::Rc;

        let (mut control, _host, mut map) = setup();
        let hovers = Rc::new(Cell::new(0));
        let h = hovers.clone();
        control.on_hover(move |_| h.set(h.get() + 1));

        control.handle_event(&mut map, &motion(1.0, 1.0));
        let outside = PointerEvent::mouse_move(Vec2::new(2.0, 2.0)).with_over_viewport(false);
        control.handle_event(&mut map, &InputEvent::PointerMove(outside));
        control.handle_event(&mut map, &down(3.0, 3.0, MouseButton::Secondary));
        control.handle_event(&mut map, &motion(4.0, 4.0));

        assert_eq!(hovers.get(), 1);
    }

    #[test]
    fn test_wheel() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Legacy(120.0)));
        control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Detail(3.0)));
        control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Legacy(0.0)));
        control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Notches(f32::NAN)));

        assert_eq!(map.scales.len(), 2);
        assert!((map.scales[0] - 1.05).abs() < 1e-6);
        assert!((map.scales[1] - 1.0 / 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_wheel_disabled() {
        let (control, _host, mut map) = setup();
        let mut control = control.with_scroll_wheel_zoom(false);

        assert!(control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Notches(1.0))));
        assert!(map.scales.is_empty());
    }

    #[test]
    fn test_disabled_ignores_but_still_suppresses_default() {
        let (mut control, _host, mut map) = setup();
        control.enabled = false;

        assert!(control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Primary)));
        assert!(control.handle_event(&mut map, &motion(30.0, 30.0)));
        assert_eq!(control.state(), PointerState::None);
        assert_eq!(map.calls, 0);
    }

    #[test]
    fn test_context_menu_suppressed() {
        let (mut control, _host, mut map) = setup();
        assert!(control.handle_event(&mut map, &InputEvent::ContextMenu));
        assert_eq!(map.calls, 0);
    }

    #[test]
    fn test_empty_touch_list_is_noop() {
        let (mut control, _host, mut map) = setup();

        control.handle_event(&mut map, &InputEvent::PointerDown(PointerEvent::touch(Vec::new())));
        assert_eq!(control.state(), PointerState::None);

        control.handle_event(&mut map, &InputEvent::PointerDown(PointerEvent::touch(vec![Vec2::ZERO])));
        control.handle_event(&mut map, &InputEvent::PointerMove(PointerEvent::touch(Vec::new())));
        assert_eq!(control.state(), PointerState::Click);
        assert_eq!(map.calls, 0);
    }

    #[test]
    fn test_auto_rotation_helpers() {
        let (control, _host, mut map) = setup();
        let step = control.auto_rotation_angle();

        control.rotate_right(&mut map, None);
        control.rotate_right(&mut map, None);
        control.rotate_left(&mut map, None);
        assert!((map.heading - step).abs() < 1e-9);

        control.rotate_down(&mut map, Some(0.25));
        control.rotate_up(&mut map, Some(0.05));
        assert!((map.tilt - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_config_issues_no_commands() {
        let mut host = ListenerTable::new();
        let config = GestureConfig {
            pixels_per_round: 0.0,
            scale_step: -1.05,
            touch_scale_step: 0.0,
            ..GestureConfig::default()
        };
        let mut control = GestureControl::new(config, &mut host);
        let mut map = CountingMap::default();

        control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Secondary));
        control.handle_event(&mut map, &motion(40.0, 10.0));
        control.handle_event(&mut map, &up(40.0, 10.0));
        control.handle_event(&mut map, &InputEvent::Wheel(WheelDelta::Notches(1.0)));

        let pinch = |x: f32| PointerEvent::touch(vec![Vec2::ZERO, Vec2::new(x, 0.0)]);
        control.handle_event(&mut map, &InputEvent::PointerDown(pinch(100.0)));
        control.handle_event(&mut map, &InputEvent::PointerMove(pinch(80.0)));

        assert_eq!(map.calls, 0);
        assert_eq!(map.heading, 0.0);
        assert_eq!(map.tilt, 0.0);
    }

    #[test]
    fn test_destroy_twice() {
        let (mut control, mut host, mut map) = setup();
        control.destroy(&mut host);
        control.destroy(&mut host);

        assert!(!control.is_attached());
        assert!(host.is_empty());
        assert!(!control.handle_event(&mut map, &down(0.0, 0.0, MouseButton::Primary)));
    }
}
