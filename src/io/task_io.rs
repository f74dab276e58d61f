use std::fs;
use std::path::{Path, PathBuf};

use crate::model::task::TaskList;

/// Error type for loading the tasks file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load the task list from a JSON file.
pub fn load_tasks(path: &Path) -> Result<TaskList, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
