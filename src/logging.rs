use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::APP_DIR_NAME;
use crate::error::AppError;

const LOG_FILE_NAME: &str = "snake.log";

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Returns `<data_local_dir>/toroidal-snake/snake.log`, falling back to the
/// working directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes the `log` macros to `path`; the terminal itself belongs to the UI.
pub fn init_file_logger(path: &Path, level: LogLevel) -> Result<(), AppError> {
    let file = open_log_file(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level.into(), config, file)?;
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
