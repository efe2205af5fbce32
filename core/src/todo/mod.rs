//! Todo module
//!
//! This module contains the todo model, the storage contract with its
//! implementations, and the manager that owns the in-session list.

mod backend;
mod file_store;
mod manager;
mod memory_store;
mod model;
mod store;

pub use backend::StoreBackend;
pub use file_store::{FileTodoStore, FILE_NAME};
pub use manager::TodoManager;
pub use memory_store::InMemoryTodoStore;
pub use model::Todo;
pub use store::TodoStore;
