//! Orbitmap - gesture-driven 3D map viewer
//!
//! Opens a window and drives an orbit camera with mouse, touch, and wheel
//! gestures. The view is reported in the window title.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use orbitmap::config::AppConfig;
use orbitmap::input::{InputAction, InputMapper, WinitTranslator};
use orbitmap::map::MapView;
use orbitmap::systems::{ViewStatus, ViewerError, WindowSystem};
use orbitmap_input::{GestureControl, ListenerTable, MapControl};
use orbitmap_math::Vec2;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    map: MapView,
    gestures: GestureControl,
    /// Listener registrations the gesture controller made at construction
    listeners: ListenerTable,
    translator: WinitTranslator,
    auto_rotate: bool,
    /// Fatal error that stopped the event loop
    error: Option<ViewerError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let viewport = Vec2::new(config.window.width as f32, config.window.height as f32);
        let map = MapView::new(&config.camera, viewport);

        let mut listeners = ListenerTable::new();
        let mut gestures = GestureControl::new(config.gesture.clone(), &mut listeners);

        if config.debug.log_clicks {
            gestures.on_click(|event| {
                if let Some(point) = event.primary_point() {
                    log::info!("Click at ({:.0}, {:.0})", point.x, point.y);
                }
            });
        }
        if config.debug.log_hover {
            gestures.on_hover(|event| {
                if let Some(point) = event.primary_point() {
                    log::debug!("Hover at ({:.0}, {:.0})", point.x, point.y);
                }
            });
        }

        Self {
            config,
            window: None,
            map,
            gestures,
            listeners,
            translator: WinitTranslator::new(),
            auto_rotate: false,
            error: None,
        }
    }

    fn status(&self) -> ViewStatus {
        ViewStatus {
            heading: self.map.rotate_angle().to_degrees(),
            tilt: self.map.tilt_angle().to_degrees(),
            distance: self.map.distance(),
            gestures_enabled: self.gestures.enabled,
            auto_rotate: self.auto_rotate,
            wheel_zoom: self.gestures.scroll_wheel_zoom_enabled,
        }
    }

    fn apply_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::Reset => {
                self.gestures.reset();
                self.map.reset();
            }
            InputAction::ToggleGestures => {
                self.gestures.enabled = !self.gestures.enabled;
                log::info!("Gestures: {}", if self.gestures.enabled { "ON" } else { "OFF" });
            }
            InputAction::ToggleAutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                log::info!("Auto-rotate: {}", if self.auto_rotate { "ON" } else { "OFF" });
            }
            InputAction::ToggleWheelZoom => {
                self.gestures.scroll_wheel_zoom_enabled = !self.gestures.scroll_wheel_zoom_enabled;
                log::info!(
                    "Wheel zoom: {}",
                    if self.gestures.scroll_wheel_zoom_enabled { "ON" } else { "OFF" }
                );
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                let size = window.size();
                self.map.resize(size.width, size.height);
                window.update_title(&self.status());
                self.window = Some(window);
            }
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                self.gestures.destroy(&mut self.listeners);
                if !self.listeners.is_empty() {
                    log::warn!("{} listeners still registered at exit", self.listeners.len());
                }
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                self.map.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                // Releases that happen elsewhere never reach us
                self.translator.clear();
                self.gestures.reset();
            }
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(key) = key_event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, key_event.state) {
                        self.apply_action(action, event_loop);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if self.auto_rotate {
                    self.gestures.rotate_right(&mut self.map, None);
                }
                if let Some(window) = &self.window {
                    window.update_title(&self.status());
                }
                return;
            }
            _ => {}
        }

        if let Some(input) = self.translator.route(&event, &self.listeners) {
            self.gestures.handle_event(&mut self.map, &input);
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.auto_rotate {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn run(config: AppConfig) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new().map_err(|e| ViewerError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| ViewerError::EventLoop(e.to_string()))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str())).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Orbitmap");
    if let Err(e) = run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
