//! Todo model definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry in the todo list
///
/// Serialized with camelCase field names (`id`, `title`, `isCompleted`).
/// Unknown fields are ignored when reading. The id is fixed at creation and
/// only readable through [`Todo::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub(crate) id: Uuid,
    pub title: String,
    pub is_completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
