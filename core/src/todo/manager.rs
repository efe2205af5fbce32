//! Todo list manager
//!
//! Owns the authoritative in-session list and persists a full snapshot
//! through the store after every successful mutation.

use std::sync::Arc;

use tracing::debug;

use super::model::Todo;
use super::store::TodoStore;
use crate::{Error, Result};

/// In-memory todo list kept in sync with a [`TodoStore`]
///
/// Todos are addressed by their 0-based position in the list. Rejected
/// operations leave the list untouched and do not save.
pub struct TodoManager {
    todos: Vec<Todo>,
    store: Arc<dyn TodoStore>,
}

impl TodoManager {
    /// Create a manager, loading the initial list from `store`
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        let todos = store.load().unwrap_or_default();
        debug!(count = todos.len(), "Loaded initial todo list");
        Self { todos, store }
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn count(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append a new todo and persist the list
    ///
    /// The title is taken as-is; rejecting blank titles is up to the caller.
    pub fn add(&mut self, title: impl Into<String>) -> &Todo {
        let todo = Todo::new(title);
        debug!(id = %todo.id, "Adding todo");
        self.todos.push(todo);
        self.persist();
        &self.todos[self.todos.len() - 1]
    }

    /// Flip the completion flag of the todo at `index` and persist the list
    pub fn toggle_completion(&mut self, index: usize) -> Result<&Todo> {
        self.check_index(index)?;

        self.todos[index].toggle();
        debug!(
            index,
            completed = self.todos[index].is_completed,
            "Toggled todo"
        );
        self.persist();
        Ok(&self.todos[index])
    }

    /// Remove the todo at `index` and persist the list
    pub fn delete(&mut self, index: usize) -> Result<Todo> {
        self.check_index(index)?;

        let removed = self.todos.remove(index);
        debug!(index, id = %removed.id, "Deleted todo");
        self.persist();
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.todos.len();
        if index >= len {
            debug!(index, len, "Rejected out-of-range index");
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn persist(&self) {
        self.store.save(&self.todos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{FileTodoStore, InMemoryTodoStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// In-memory store that counts save calls
    #[derive(Default)]
    struct RecordingStore {
        inner: InMemoryTodoStore,
        saves: AtomicUsize,
    }

    impl RecordingStore {
        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl TodoStore for RecordingStore {
        fn try_save(&self, todos: &[Todo]) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.try_save(todos)
        }

        fn try_load(&self) -> Result<Option<Vec<Todo>>> {
            self.inner.try_load()
        }
    }

    fn create_test_manager() -> (TodoManager, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        let manager = TodoManager::new(store.clone());
        (manager, store)
    }

    fn titles(manager: &TodoManager) -> Vec<&str> {
        manager.list().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_new_with_empty_store() {
        let (manager, store) = create_test_manager();
        assert_eq!(manager.count(), 0);
        assert!(manager.is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_new_with_existing_todos() {
        let store = Arc::new(InMemoryTodoStore::new());
        let todos = vec![Todo::new("Existing 1"), Todo::new("Existing 2")];
        store.save(&todos);

        let manager = TodoManager::new(store);

        assert_eq!(manager.list(), todos.as_slice());
    }

    #[test]
    fn test_add_todo() {
        let (mut manager, store) = create_test_manager();

        let added = manager.add("New Todo").clone();

        assert_eq!(manager.count(), 1);
        assert_eq!(added.title, "New Todo");
        assert!(!added.is_completed);
        assert_eq!(manager.list().last(), Some(&added));
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load(), Some(vec![added]));
    }

    #[test]
    fn test_add_multiple_todos_keeps_order() {
        let (mut manager, store) = create_test_manager();

        manager.add("First");
        manager.add("Second");
        manager.add("Third");

        assert_eq!(titles(&manager), vec!["First", "Second", "Third"]);
        assert_eq!(store.saves(), 3);
    }

    #[test]
    fn test_add_accepts_blank_title() {
        let (mut manager, _store) = create_test_manager();
        manager.add("");
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn test_toggle_completion_flips_only_target() {
        let (mut manager, store) = create_test_manager();
        manager.add("A");
        manager.add("B");
        manager.add("C");

        let toggled = manager.toggle_completion(1).unwrap();
        assert_eq!(toggled.title, "B");
        assert!(toggled.is_completed);

        let flags: Vec<bool> = manager.list().iter().map(|t| t.is_completed).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(store.saves(), 4);
        assert!(store.load().unwrap()[1].is_completed);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut manager, _store) = create_test_manager();
        manager.add("A");
        let before = manager.list().to_vec();

        manager.toggle_completion(0).unwrap();
        manager.toggle_completion(0).unwrap();

        assert_eq!(manager.list(), before.as_slice());
    }

    #[test]
    fn test_toggle_invalid_index() {
        let (mut manager, store) = create_test_manager();
        manager.add("Only");
        let before = manager.list().to_vec();

        match manager.toggle_completion(1).unwrap_err() {
            Error::IndexOutOfRange { index, len } => {
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            e => panic!("Expected IndexOutOfRange error, got: {:?}", e),
        }
        assert!(manager.toggle_completion(usize::MAX).is_err());

        assert_eq!(manager.list(), before.as_slice());
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_delete_todo_preserves_order() {
        let (mut manager, store) = create_test_manager();
        manager.add("A");
        manager.add("B");
        manager.add("C");

        let removed = manager.delete(1).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(manager.count(), 2);
        assert_eq!(titles(&manager), vec!["A", "C"]);
        assert_eq!(store.saves(), 4);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_invalid_index() {
        let (mut manager, store) = create_test_manager();
        manager.add("Only");

        assert!(matches!(
            manager.delete(5),
            Err(Error::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(manager.count(), 1);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_delete_from_empty_list() {
        let (mut manager, store) = create_test_manager();

        assert!(matches!(
            manager.delete(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert_eq!(manager.count(), 0);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_delete_all_todos() {
        let (mut manager, store) = create_test_manager();
        manager.add("A");
        manager.add("B");

        manager.delete(0).unwrap();
        manager.delete(0).unwrap();

        assert!(manager.is_empty());
        assert_eq!(store.saves(), 4);
        // the volatile store reports an empty list as no prior state
        assert!(store.load().is_none());
    }

    #[test]
    fn test_complex_workflow() {
        let (mut manager, _store) = create_test_manager();

        manager.add("Buy milk");
        manager.add("Walk dog");
        assert_eq!(manager.count(), 2);

        manager.toggle_completion(1).unwrap();
        assert!(manager.list()[1].is_completed);
        assert!(!manager.list()[0].is_completed);

        manager.delete(0).unwrap();
        assert_eq!(manager.count(), 1);
        assert_eq!(manager.list()[0].title, "Walk dog");
        assert!(manager.list()[0].is_completed);
    }

    #[test]
    fn test_persistence_between_sessions() {
        let temp_dir = TempDir::new().unwrap();

        let expected = {
            let mut manager = TodoManager::new(Arc::new(FileTodoStore::in_dir(temp_dir.path())));
            manager.add("Buy milk");
            manager.add("Walk dog");
            manager.add("Read book");
            manager.toggle_completion(2).unwrap();
            manager.delete(0).unwrap();
            manager.list().to_vec()
        };

        let manager = TodoManager::new(Arc::new(FileTodoStore::in_dir(temp_dir.path())));
        assert_eq!(manager.list(), expected.as_slice());
    }

    #[test]
    fn test_file_store_keeps_empty_list_after_deleting_everything() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FileTodoStore::in_dir(temp_dir.path()));

        let mut manager = TodoManager::new(store.clone());
        manager.add("Temporary");
        manager.delete(0).unwrap();

        assert_eq!(store.load(), Some(Vec::new()));
        assert!(TodoManager::new(store).is_empty());
    }
}
