//! Todo repository port.
//!
//! Storage is whole-list: handlers load the list, transform it and store it
//! back. Implementations decide where the list lives.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::todo::Todo;

/// Repository port for the todo list.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Load the full list in storage order.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store cannot be read
    async fn load(&self) -> Result<Vec<Todo>, DomainError>;

    /// Replace the full list.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store cannot be written
    async fn store(&self, todos: Vec<Todo>) -> Result<(), DomainError>;
}
