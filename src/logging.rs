use simplelog::{Config, LevelFilter, WriteLogger};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Return the default log file path
pub(crate) fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join("wrapsnake").join("wrapsnake.log"))
}

/// Send all log messages at `level` and above to a freshly-truncated file at
/// `path`, creating its parent directories as needed
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let fp = fs_err::File::create(path)?;
    WriteLogger::init(level, Config::default(), fp)?;
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[from] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}
