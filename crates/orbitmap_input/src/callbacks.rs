//! Click and hover callbacks
//!
//! Each slot holds at most one callback; registering again replaces it.

use std::fmt;

use crate::event::PointerEvent;

/// Application callback receiving the pointer event that triggered it
pub type PointerCallback = Box<dyn FnMut(&PointerEvent)>;

/// Single-slot click and hover callbacks
#[derive(Default)]
pub struct GestureCallbacks {
    click: Option<PointerCallback>,
    hover: Option<PointerCallback>,
}

impl GestureCallbacks {
    pub fn set_click(&mut self, callback: PointerCallback) {
        self.click = Some(callback);
    }

    pub fn set_hover(&mut self, callback: PointerCallback) {
        self.hover = Some(callback);
    }

    pub fn clear_click(&mut self) {
        self.click = None;
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn has_hover(&self) -> bool {
        self.hover.is_some()
    }

    /// Invoke the click callback, if any
    pub fn emit_click(&mut self, event: &PointerEvent) {
        if let Some(callback) = self.click.as_mut() {
            callback(event);
        }
    }

    /// Invoke the hover callback, if any
    pub fn emit_hover(&mut self, event: &PointerEvent) {
        if let Some(callback) = self.hover.as_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCallbacks")
            .field("click", &self.click.is_some())
            .field("hover", &self.hover.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitmap_math::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_last_registration_wins() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut callbacks = GestureCallbacks::default();

        let f = first.clone();
        callbacks.set_click(Box::new(move |_| f.set(f.get() + 1)));
        let s = second.clone();
        callbacks.set_click(Box::new(move |_| s.set(s.get() + 1)));

        callbacks.emit_click(&PointerEvent::mouse_move(Vec2::ZERO));
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_clear() {
        let hits = Rc::new(Cell::new(0));
        let mut callbacks = GestureCallbacks::default();

        let h = hits.clone();
        callbacks.set_hover(Box::new(move |_| h.set(h.get() + 1)));
        assert!(callbacks.has_hover());

        callbacks.clear_hover();
        assert!(!callbacks.has_hover());
        callbacks.emit_hover(&PointerEvent::mouse_move(Vec2::ZERO));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_empty_emit_is_noop() {
        let mut callbacks = GestureCallbacks::default();
        callbacks.emit_click(&PointerEvent::mouse_move(Vec2::ZERO));
        callbacks.clear_click();
        assert_eq!(format!("{:?}", callbacks), "GestureCallbacks { click: false, hover: false }");
    }
}
