//! Window management system
//!
//! Handles window creation and the status line shown in the title bar.

use winit::{
    dpi::PhysicalSize,
    event_loop::ActiveEventLoop,
    window::Window,
};
use crate::config::WindowConfig;

/// Snapshot of the viewer state shown in the title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStatus {
    /// Heading in degrees
    pub heading: f32,
    /// Tilt in degrees
    pub tilt: f32,
    pub distance: f32,
    pub gestures_enabled: bool,
    pub auto_rotate: bool,
    pub wheel_zoom: bool,
}

/// Manages the application window
pub struct WindowSystem {
    window: Window,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, ViewerError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| ViewerError::WindowCreation(e.to_string()))?;

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Drawable size in physical pixels
    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Update window title with the current view
    pub fn update_title(&self, status: &ViewStatus) {
        self.window.set_title(&format_title(&self.base_title, status));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, status: &ViewStatus) -> String {
    let mut title = format!(
        "{} - heading {:.0}° tilt {:.0}° distance {:.1}",
        base, status.heading, status.tilt, status.distance
    );
    if !status.gestures_enabled {
        title.push_str(" [paused]");
    }
    if status.auto_rotate {
        title.push_str(" [spin]");
    }
    if !status.wheel_zoom {
        title.push_str(" [wheel off]");
    }
    title
}

/// Fatal viewer errors
#[derive(Debug)]
pub enum ViewerError {
    WindowCreation(String),
    EventLoop(String),
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
            ViewerError::EventLoop(msg) => write!(f, "Event loop error: {}", msg),
        }
    }
}

impl std::error::Error for ViewerError {}
