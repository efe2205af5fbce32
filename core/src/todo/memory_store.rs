//! In-memory todo store
//!
//! Keeps the list for the lifetime of the process only.

use std::sync::RwLock;

use super::model::Todo;
use super::store::TodoStore;
use crate::{Error, Result};

/// Volatile store holding the last saved list in memory
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn try_save(&self, todos: &[Todo]) -> Result<()> {
        let mut held = self
            .todos
            .write()
            .map_err(|e| Error::Storage(format!("In-memory store lock poisoned: {}", e)))?;
        *held = todos.to_vec();
        Ok(())
    }

    // An empty list reads back as "never saved".
    fn try_load(&self) -> Result<Option<Vec<Todo>>> {
        let held = self
            .todos
            .read()
            .map_err(|e| Error::Storage(format!("In-memory store lock poisoned: {}", e)))?;
        if held.is_empty() {
            Ok(None)
        } else {
            Ok(Some(held.clone()))
        }
    }
}
