use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::game::SnakeStart;
use crate::snake::Position;

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "toroidal-snake";

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default board width in cells (256px play texture / 16px squares).
pub const DEFAULT_GRID_WIDTH: u16 = 16;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 16;

/// Snake length after every reset.
pub const DEFAULT_START_LENGTH: usize = 3;

/// Tick interval in milliseconds (10 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Pixel edge of one cell, used for the board geometry dump.
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Colors for every element the renderer paints.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub apple: Color,
    pub snake: Color,
    pub border: Color,
    pub status: Color,
}

/// White board, red apple, charcoal snake.
pub const PALETTE_CLASSIC: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    apple: Color::Rgb(0xff, 0x54, 0x59),
    snake: Color::Rgb(0x40, 0x40, 0x40),
    border: Color::DarkGray,
    status: Color::Gray,
};

/// Errors raised while loading or validating [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Session settings, read from JSON and overridden from the command line.
///
/// Every field is optional in the file; missing ones take their defaults.
/// The start position defaults to the board centre.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: u16,
    pub height: u16,
    pub start_x: Option<i32>,
    pub start_y: Option<i32>,
    pub start_length: usize,
    pub tick_interval_ms: u64,
    pub cell_size: u32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            start_x: None,
            start_y: None,
            start_length: DEFAULT_START_LENGTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cell_size: DEFAULT_CELL_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields defaults. A missing file
    /// that was named explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match default_settings_path() {
                Some(path) if path.exists() => Self::load_from_path(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Where the snake's head sits after every reset.
    #[must_use]
    pub fn snake_start(&self) -> SnakeStart {
        SnakeStart {
            head: Position {
                x: self.start_x.unwrap_or(i32::from(self.width / 2)),
                y: self.start_y.unwrap_or(i32::from(self.height / 2)),
            },
            length: self.start_length,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Checks every constraint the game engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(invalid("width", "must be at least 1 cell"));
        }
        if self.height == 0 {
            return Err(invalid("height", "must be at least 1 cell"));
        }

        let total_cells = self.grid_size().total_cells();
        if self.start_length == 0 || self.start_length > total_cells {
            return Err(invalid(
                "start_length",
                format!("must be between 1 and {total_cells} for this board"),
            ));
        }

        let start = self.snake_start();
        if !start.head.is_within_bounds(self.grid_size()) {
            return Err(invalid(
                "start_x/start_y",
                format!(
                    "({}, {}) lies outside the {}x{} board",
                    start.head.x, start.head.y, self.width, self.height
                ),
            ));
        }

        // Trailing segments are laid out leftwards without wrapping.
        let head_x = usize::try_from(start.head.x).unwrap_or_default();
        if head_x + 1 < self.start_length {
            return Err(invalid(
                "start_x",
                format!(
                    "must be at least {} so a {}-segment snake fits to its left",
                    self.start_length - 1,
                    self.start_length
                ),
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be at least 1"));
        }
        if self.cell_size == 0 {
            return Err(invalid("cell_size", "must be at least 1 pixel"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Returns `<config_dir>/toroidal-snake/settings.json`, when a config dir exists.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
