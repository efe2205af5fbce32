//! Storage backend selection

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::file_store::{FileTodoStore, FILE_NAME};
use super::memory_store::InMemoryTodoStore;
use super::store::TodoStore;

/// Which store the manager should persist to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON file on disk
    File { path: PathBuf },

    /// Process memory only, lost on exit
    Memory,
}

impl StoreBackend {
    /// File backend pointing at `todos.json` inside `dir`
    pub fn file_in(dir: impl AsRef<Path>) -> Self {
        Self::File {
            path: dir.as_ref().join(FILE_NAME),
        }
    }

    /// Build the store for this backend
    pub fn open(&self) -> Arc<dyn TodoStore> {
        match self {
            Self::File { path } => Arc::new(FileTodoStore::new(path.clone())),
            Self::Memory => Arc::new(InMemoryTodoStore::new()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File { path } => format!("file store at {}", path.display()),
            Self::Memory => "in-memory store".to_string(),
        }
    }
}
