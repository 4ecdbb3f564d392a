//! Message handling port.
//!
//! The single boundary between UI state and business logic. Frontends only
//! see this trait; whether a call is served in-process or over HTTP is up to
//! the injected implementation.
//!
//! # Contract
//!
//! - Commands return `Ok(())` once the backend applied them
//! - The query returns the full list in storage order
//! - Failures are returned as `Err`, never swallowed

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::todo::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, TodosQuery,
    TodosQueryResult, ToggleAllCommand, ToggleCommand,
};

/// Commands and the todos query, all asynchronous.
///
/// Implementations hold no contract-level state; each call is independent.
/// Idempotency is not guaranteed.
#[async_trait]
pub trait MessageHandling: Send + Sync {
    /// Create a todo.
    async fn handle_new_todo_command(&self, command: NewTodoCommand) -> Result<(), DomainError>;

    /// Flip `completed` of the todo with the given id.
    async fn handle_toggle_command(&self, command: ToggleCommand) -> Result<(), DomainError>;

    /// Set `completed` for every todo.
    async fn handle_toggle_all_command(
        &self,
        command: ToggleAllCommand,
    ) -> Result<(), DomainError>;

    /// Replace the title of the todo with the given id.
    async fn handle_edit_command(&self, command: EditCommand) -> Result<(), DomainError>;

    /// Remove the todo with the given id.
    async fn handle_destroy_command(&self, command: DestroyCommand) -> Result<(), DomainError>;

    /// Remove every completed todo.
    async fn handle_clear_completed_command(
        &self,
        command: ClearCompletedCommand,
    ) -> Result<(), DomainError>;

    /// Fetch the current list.
    async fn handle_todos_query(&self, query: TodosQuery) -> Result<TodosQueryResult, DomainError>;
}
