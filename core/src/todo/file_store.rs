//! File-based todo storage implementation
//!
//! Stores the todo list as a JSON array in a single file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::model::Todo;
use super::store::TodoStore;
use crate::{Error, Result};

/// Name of the todo file inside the data directory
pub const FILE_NAME: &str = "todos.json";

/// Durable todo store using JSON
#[derive(Debug, Clone)]
pub struct FileTodoStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileTodoStore {
    /// Create a store backed by the given file
    ///
    /// Nothing is touched on disk until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by `todos.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl TodoStore for FileTodoStore {
    fn try_save(&self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string_pretty(todos)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Write to a sibling file first, then swap it in
        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|e| {
            Error::Storage(format!(
                "Failed to write todos file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::Storage(format!(
                "Failed to replace todos file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), count = todos.len(), "Saved todos");
        Ok(())
    }

    fn try_load(&self) -> Result<Option<Vec<Todo>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::Storage(format!(
                "Failed to read todos file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(|e| {
            Error::Storage(format!(
                "Failed to parse todos file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), count = todos.len(), "Loaded todos");
        Ok(Some(todos))
    }
}
