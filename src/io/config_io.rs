use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse taskview.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read `taskview.toml` next to the tasks file. A missing config file is not
/// an error; defaults apply.
pub fn read_config(tasks_path: &Path) -> Result<Config, ConfigError> {
    let dir = tasks_path.parent().unwrap_or(Path::new("."));
    let config_path = dir.join("taskview.toml");
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
