//! Storage Adapters
//!
//! Implementations of the `TodoRepository` port.

mod json_todo_repository;
mod memory_todo_repository;

pub use json_todo_repository::JsonTodoRepository;
pub use memory_todo_repository::MemoryTodoRepository;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::TodoRepository;

/// Builds the repository selected by the `storage` configuration section.
pub fn repository_from_config(config: &StorageConfig) -> Arc<dyn TodoRepository> {
    match config.backend {
        StorageBackend::Memory if config.seed_examples => {
            Arc::new(MemoryTodoRepository::with_examples())
        }
        StorageBackend::Memory => Arc::new(MemoryTodoRepository::new()),
        StorageBackend::Json => Arc::new(JsonTodoRepository::new(&config.todos_file)),
    }
}
