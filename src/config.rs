//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ORBITMAP_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use orbitmap_input::GestureConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Map camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Gesture sensitivity
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ORBITMAP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, gitignored
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ORBITMAP_GESTURE__SCALE_STEP=1.1 -> gesture.scale_step = 1.1
        figment = figment.merge(Env::prefixed("ORBITMAP_").split("__"));

        let config: Self = figment.extract()?;
        config.gesture.validate().map_err(|message| ConfigError { message })?;
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orbitmap".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Map camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Starting distance from the focus point
    pub start_distance: f32,
    /// Starting heading in degrees
    pub start_heading: f32,
    /// Starting tilt from vertical in degrees
    pub start_tilt: f32,
    /// Smallest tilt in degrees (0 = looking straight down)
    pub min_tilt: f32,
    /// Largest tilt in degrees
    pub max_tilt: f32,
    /// Closest the camera may get to the focus point
    pub min_distance: f32,
    /// Factor used by zoom commands that carry no explicit factor
    pub zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            start_distance: 50.0,
            start_heading: 0.0,
            start_tilt: 45.0,
            min_tilt: 0.0,
            max_tilt: 85.0,
            min_distance: 1.0,
            zoom_step: 1.1,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins when set
    pub log_level: String,
    /// Log every click reported by the gesture controller
    pub log_clicks: bool,
    /// Log hover events (noisy)
    pub log_hover: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_clicks: true,
            log_hover: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.max_tilt, 85.0);
        assert_eq!(config.gesture, GestureConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("pixels_per_round"));
        assert!(toml.contains("log_level"));
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [camera]
            start_distance = 12.5

            [gesture]
            scale_step = 1.2
            "#,
        )
        .unwrap();

        assert_eq!(config.camera.start_distance, 12.5);
        assert_eq!(config.camera.fov, 45.0);
        assert_eq!(config.gesture.scale_step, 1.2);
        assert_eq!(config.gesture.pixels_per_round, 1800.0);
        assert_eq!(config.window.title, "Orbitmap");
    }

    #[test]
    fn test_degenerate_gesture_values_rejected() {
        let dir = std::env::temp_dir().join(format!("orbitmap-unit-gesture-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[gesture]\npixels_per_round = 0.0\n").unwrap();

        let result = AppConfig::load_from(&dir);
        std::fs::remove_dir_all(&dir).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("pixels_per_round"), "got {}", err);
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.camera.start_tilt, 45.0);
    }
}
