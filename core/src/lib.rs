//! Core library for the todo CLI
//!
//! This crate contains the core business logic, including:
//! - The todo model
//! - Pluggable persistence (file-backed and in-memory stores)
//! - The todo list manager that routes every mutation through a store

pub mod error;
pub mod todo;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
