//! Demo configuration.
//!
//! Settings for the demo driver loaded from an INI file. Provides defaults
//! for safe startup and methods to load/save the configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [demo]
//! min_fps = 5
//! debug = false
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_MIN_FPS: u32 = 5;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo driver configuration.
///
/// Stores window settings and loop options. Missing files or keys keep the
/// defaults, so the demo always starts.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Instantaneous rate below which update is skipped for the tick.
    pub min_fps: u32,
    /// Show the FPS overlay.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            min_fps: DEFAULT_MIN_FPS,
            debug: DEFAULT_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [demo] section
        if let Some(fps) = config.getuint("demo", "min_fps").ok().flatten() {
            self.min_fps = fps as u32;
        }
        if let Some(debug) = config.getbool("demo", "debug").ok().flatten() {
            self.debug = debug;
        }

        info!(
            "Loaded config: {}x{} window, target_fps={}, min_fps={}, debug={}",
            self.window_width, self.window_height, self.target_fps, self.min_fps, self.debug
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [demo] section
        config.set("demo", "min_fps", Some(self.min_fps.to_string()));
        config.set("demo", "debug", Some(self.debug.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = DemoConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.min_fps, 5);
        assert!(!config.debug);
    }

    #[test]
    fn with_path_keeps_other_defaults() {
        let config = DemoConfig::with_path("/tmp/galop.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/galop.ini"));
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn missing_file_reports_an_error_and_keeps_defaults() {
        let mut config = DemoConfig::with_path("/nonexistent/galop.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }
}
