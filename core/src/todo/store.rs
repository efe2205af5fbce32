//! Todo store trait
//!
//! Defines the persistence contract shared by every storage backend.

use tracing::warn;

use super::model::Todo;
use crate::Result;

/// Persistence interface for the whole todo list
///
/// Implementors provide the fallible `try_save`/`try_load` pair. The
/// manager goes through the provided `save`/`load` methods, which log
/// failures and never surface them.
pub trait TodoStore: Send + Sync {
    /// Persist the full list, replacing whatever was stored before
    fn try_save(&self, todos: &[Todo]) -> Result<()>;

    /// Retrieve the most recently persisted list, `None` if there is no prior state
    fn try_load(&self) -> Result<Option<Vec<Todo>>>;

    /// Best-effort save: errors are logged and dropped
    fn save(&self, todos: &[Todo]) {
        if let Err(e) = self.try_save(todos) {
            warn!(count = todos.len(), "Failed to save todos: {}", e);
        }
    }

    /// Best-effort load: errors are logged and reported as no prior state
    fn load(&self) -> Option<Vec<Todo>> {
        match self.try_load() {
            Ok(todos) => todos,
            Err(e) => {
                warn!("Failed to load todos: {}", e);
                None
            }
        }
    }
}
