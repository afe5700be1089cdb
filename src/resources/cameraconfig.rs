//! Camera configuration resource.
//!
//! Holds the tunable camera parameters and loads/saves them from an INI file.
//! Any key missing from the file keeps its current (default) value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [camera]
//! moving_sensitivity = 0.02
//! magnifying_sensitivity = 0.1
//! following_speed = 0.25
//! min_magnification = 1.0
//! max_magnification = 8.0
//! ; restricted area, defaults to the whole base screen
//! restricted_x = 0
//! restricted_y = 0
//! restricted_w = 1280
//! restricted_h = 720
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::cursorcamera2d::{
    CursorCamera2D, DEFAULT_FOLLOWING_SPEED, DEFAULT_MAGNIFYING_SENSITIVITY,
    DEFAULT_MAX_MAGNIFICATION, DEFAULT_MIN_MAGNIFICATION, DEFAULT_MOVING_SENSITIVITY,
};
use crate::resources::rect::RectF;

const DEFAULT_CONFIG_PATH: &str = "./camera.ini";
const SECTION: &str = "camera";

/// Camera configuration resource.
///
/// Inserting or mutating it in the ECS world makes
/// [`apply_camera_config_changes`] push the values into the camera.
///
/// [`apply_camera_config_changes`]: crate::systems::cameraconfig::apply_camera_config_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Fraction of the base screen panned per frame while a direction is active.
    pub moving_sensitivity: f32,
    /// Zoom change per wheel unit.
    pub magnifying_sensitivity: f32,
    /// Interpolation factor per frame, in (0, 1].
    pub following_speed: f32,
    pub min_magnification: f32,
    pub max_magnification: f32,
    /// World area the view is kept inside. `None` means the whole base screen.
    pub restricted_rect: Option<RectF>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            moving_sensitivity: DEFAULT_MOVING_SENSITIVITY,
            magnifying_sensitivity: DEFAULT_MAGNIFYING_SENSITIVITY,
            following_speed: DEFAULT_FOLLOWING_SPEED,
            min_magnification: DEFAULT_MIN_MAGNIFICATION,
            max_magnification: DEFAULT_MAX_MAGNIFICATION,
            restricted_rect: None,
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
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.read_ini(&config);

        info!(
            "Loaded camera config from {:?}: moving={}, magnifying={}, following={}, magnification={}..{}",
            self.config_path,
            self.moving_sensitivity,
            self.magnifying_sensitivity,
            self.following_speed,
            self.min_magnification,
            self.max_magnification
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.read_ini(&config);
        Ok(())
    }

    fn read_ini(&mut self, config: &Ini) {
        let float = |key: &str| config.getfloat(SECTION, key).ok().flatten().map(|v| v as f32);

        if let Some(v) = float("moving_sensitivity") {
            self.moving_sensitivity = v;
        }
        if let Some(v) = float("magnifying_sensitivity") {
            self.magnifying_sensitivity = v;
        }
        if let Some(v) = float("following_speed") {
            self.following_speed = v;
        }
        if let Some(v) = float("min_magnification") {
            self.min_magnification = v;
        }
        if let Some(v) = float("max_magnification") {
            self.max_magnification = v;
        }

        // All four keys are needed to describe a rect.
        if let (Some(x), Some(y), Some(w), Some(h)) = (
            float("restricted_x"),
            float("restricted_y"),
            float("restricted_w"),
            float("restricted_h"),
        ) {
            self.restricted_rect = Some(RectF::new(x, y, w, h));
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |key: &str, value: f32| {
            config.set(SECTION, key, Some(value.to_string()));
        };

        set("moving_sensitivity", self.moving_sensitivity);
        set("magnifying_sensitivity", self.magnifying_sensitivity);
        set("following_speed", self.following_speed);
        set("min_magnification", self.min_magnification);
        set("max_magnification", self.max_magnification);
        if let Some(rect) = self.restricted_rect {
            set("restricted_x", rect.pos.x);
            set("restricted_y", rect.pos.y);
            set("restricted_w", rect.w());
            set("restricted_h", rect.h());
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved camera config to {:?}", self.config_path);

        Ok(())
    }

    /// Route every value through the camera's setters.
    pub fn apply_to(&self, camera: &mut CursorCamera2D) {
        camera.set_sensitivity(
            self.magnifying_sensitivity,
            self.moving_sensitivity,
            self.following_speed,
        );
        camera.set_min_magnification(self.min_magnification);
        camera.set_max_magnification(self.max_magnification);
        match self.restricted_rect {
            Some(rect) => camera.set_restricted_rect(rect),
            None => camera.reset_restricted_rect(),
        }
    }
}
