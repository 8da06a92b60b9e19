//! Listener registration
//!
//! The controller does not receive events by itself; a host (a browser
//! binding, a winit loop, a test) routes events to it. At construction the
//! controller registers the event kinds it wants with an [`EventHost`], and
//! `destroy()` removes exactly those registrations again.

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The element the map renders into
    Viewport,
    /// The viewport's parent element
    ViewportParent,
    /// The whole window, so drags that leave the viewport still resolve
    Window,
}

/// Native event kinds the controller listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TouchStart,
    MouseDown,
    TouchEnd,
    MouseUp,
    TouchMove,
    MouseMove,
    MouseWheel,
    ContextMenu,
}

/// Listener options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// A passive listener promises not to suppress default handling
    pub passive: bool,
}

impl ListenerOptions {
    pub const ACTIVE: Self = Self { passive: false };
}

/// One listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub target: EventTarget,
    pub kind: EventKind,
    pub options: ListenerOptions,
}

impl Registration {
    const fn new(target: EventTarget, kind: EventKind, options: ListenerOptions) -> Self {
        Self { target, kind, options }
    }
}

/// Every listener a gesture controller registers
///
/// Presses start on the viewport; moves and releases are watched on the
/// window so a drag that leaves the viewport still ends cleanly. None is
/// passive: the controller suppresses the default of everything it handles.
pub const GESTURE_LISTENERS: [Registration; 8] = [
    Registration::new(EventTarget::Viewport, EventKind::TouchStart, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Viewport, EventKind::MouseDown, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Window, EventKind::TouchEnd, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Window, EventKind::MouseUp, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Window, EventKind::TouchMove, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Window, EventKind::MouseMove, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::ViewportParent, EventKind::MouseWheel, ListenerOptions::ACTIVE),
    Registration::new(EventTarget::Window, EventKind::ContextMenu, ListenerOptions::ACTIVE),
];

/// Handle returned by [`EventHost::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Anything that can hold listener registrations
pub trait EventHost {
    /// Register a listener and return a handle for removing it
    fn add_listener(&mut self, registration: Registration) -> ListenerId;

    /// Remove a listener; returns false if it was not registered
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

/// In-memory listener registry
///
/// Hosts consult [`is_registered`](Self::is_registered) before routing an
/// event, so a destroyed controller no longer receives anything.
#[derive(Debug, Default)]
pub struct ListenerTable {
    entries: Vec<(ListenerId, Registration)>,
    next_id: u64,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything listens for `kind` on `target`
    pub fn is_registered(&self, target: EventTarget, kind: EventKind) -> bool {
        self.entries
            .iter()
            .any(|(_, r)| r.target == target && r.kind == kind)
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventHost for ListenerTable {
    fn add_listener(&mut self, registration: Registration) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, registration));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }
}
