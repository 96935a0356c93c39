//! Stage configuration.
//!
//! Grid dimensions and animation timings loaded from an INI file. Defaults
//! keep the stage runnable when the file is missing or partial.
//!
//! # Configuration File Format
//!
//! ```ini
//! [grid]
//! length = 10
//! width = 10
//! prefab = tile_basic
//!
//! [animation]
//! default_move_duration = 0.1
//! build_slot_y_offset = 0.25
//! tile_move_duration = 0.1
//! tile_delay = 0.1
//! move_y_offset = 5.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GRID_LENGTH: i32 = 10;
const DEFAULT_GRID_WIDTH: i32 = 10;
const DEFAULT_TILE_PREFAB: &str = "tile_basic";
const DEFAULT_MOVE_DURATION: f32 = 0.1;
const DEFAULT_BUILD_SLOT_Y_OFFSET: f32 = 0.25;
const DEFAULT_TILE_MOVE_DURATION: f32 = 0.1;
const DEFAULT_TILE_DELAY: f32 = 0.1;
const DEFAULT_MOVE_Y_OFFSET: f32 = 5.0;
const DEFAULT_CONFIG_PATH: &str = "./stage.ini";

/// Stage configuration handed to the grid builder and the animator.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Number of tiles along the x axis.
    pub grid_length: i32,
    /// Number of tiles along the z axis.
    pub grid_width: i32,
    /// Prefab key each grid cell turns into a build slot for.
    pub tile_prefab: String,
    /// Fallback travel duration for single-entity movements, in seconds.
    pub default_move_duration: f32,
    /// Vertical raise applied to a slot while it previews a build.
    pub build_slot_y_offset: f32,
    /// Travel duration of each entry during a grid reveal/hide, in seconds.
    pub tile_move_duration: f32,
    /// Delay between consecutive entry starts, in seconds.
    pub tile_delay: f32,
    /// Vertical distance a reveal/hide moves every entity.
    pub move_y_offset: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            grid_length: DEFAULT_GRID_LENGTH,
            grid_width: DEFAULT_GRID_WIDTH,
            tile_prefab: DEFAULT_TILE_PREFAB.to_string(),
            default_move_duration: DEFAULT_MOVE_DURATION,
            build_slot_y_offset: DEFAULT_BUILD_SLOT_Y_OFFSET,
            tile_move_duration: DEFAULT_TILE_MOVE_DURATION,
            tile_delay: DEFAULT_TILE_DELAY,
            move_y_offset: DEFAULT_MOVE_Y_OFFSET,
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
            .map_err(|e| format!("Failed to load config file: {e}"))?;

        if let Ok(Some(v)) = config.getint("grid", "length") {
            self.grid_length = v as i32;
        }
        if let Ok(Some(v)) = config.getint("grid", "width") {
            self.grid_width = v as i32;
        }
        if let Some(v) = config.get("grid", "prefab") {
            self.tile_prefab = v;
        }
        if let Ok(Some(v)) = config.getfloat("animation", "default_move_duration") {
            self.default_move_duration = v as f32;
        }
        if let Ok(Some(v)) = config.getfloat("animation", "build_slot_y_offset") {
            self.build_slot_y_offset = v as f32;
        }
        if let Ok(Some(v)) = config.getfloat("animation", "tile_move_duration") {
            self.tile_move_duration = v as f32;
        }
        if let Ok(Some(v)) = config.getfloat("animation", "tile_delay") {
            self.tile_delay = v as f32;
        }
        if let Ok(Some(v)) = config.getfloat("animation", "move_y_offset") {
            self.move_y_offset = v as f32;
        }

        info!("Loaded stage configuration from {:?}", self.config_path);
        Ok(())
    }
}
