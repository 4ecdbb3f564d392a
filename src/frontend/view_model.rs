//! Todos view-model.
//!
//! Holds the todo list shown by a TodoMVC page and the filter derived from
//! its route. Every user intent is sent as a command; once the command
//! completes the list is re-queried and replaced wholesale. Nothing is
//! updated optimistically.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, TodoId};
use crate::domain::todo::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, Todo, TodoFilter,
    TodoList, TodosQuery, ToggleAllCommand, ToggleCommand,
};
use crate::ports::MessageHandling;

#[derive(Debug, Default)]
struct State {
    todos: TodoList,
    filter: TodoFilter,
}

/// View state and user intents of the todo page.
///
/// Concurrent operations are not serialized. The query that resolves last
/// determines `todos`.
pub struct TodosViewModel {
    message_handling: Arc<dyn MessageHandling>,
    state: RwLock<State>,
}

impl TodosViewModel {
    /// Creates an unmounted view-model. `todos` stays empty until
    /// [`mount`](Self::mount) or another operation has queried.
    pub fn new(message_handling: Arc<dyn MessageHandling>, route: &str) -> Self {
        Self {
            message_handling,
            state: RwLock::new(State {
                todos: TodoList::default(),
                filter: TodoFilter::from_route(route),
            }),
        }
    }

    /// Initial load.
    pub async fn mount(&self) -> Result<(), DomainError> {
        tracing::debug!(filter = %self.filter(), "Mounting todos view");
        self.refresh().await
    }

    /// Queries the todos and replaces the current list with the result.
    ///
    /// On failure the previous list is kept.
    pub async fn refresh(&self) -> Result<(), DomainError> {
        let result = self
            .message_handling
            .handle_todos_query(TodosQuery {})
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Todos query failed");
                e
            })?;

        tracing::debug!(count = result.todos.len(), "Todos query resolved");
        self.write().todos = TodoList::new(result.todos);
        Ok(())
    }

    pub async fn on_toggle_all(&self, completed: bool) -> Result<(), DomainError> {
        tracing::debug!(completed, "Toggle all");
        let result = self
            .message_handling
            .handle_toggle_all_command(ToggleAllCommand { completed })
            .await;
        self.then_refresh("toggle-all", result).await
    }

    pub async fn on_new_todo(&self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        tracing::debug!(title = %title, "New todo");
        let result = self
            .message_handling
            .handle_new_todo_command(NewTodoCommand { title })
            .await;
        self.then_refresh("new-todo", result).await
    }

    pub async fn on_toggle(&self, id: impl Into<TodoId>) -> Result<(), DomainError> {
        let id = id.into();
        tracing::debug!(id = %id, "Toggle");
        let result = self
            .message_handling
            .handle_toggle_command(ToggleCommand { id })
            .await;
        self.then_refresh("toggle", result).await
    }

    pub async fn on_edit(
        &self,
        id: impl Into<TodoId>,
        title: impl Into<String>,
    ) -> Result<(), DomainError> {
        let id = id.into();
        let title = title.into();
        tracing::debug!(id = %id, title = %title, "Edit");
        let result = self
            .message_handling
            .handle_edit_command(EditCommand { id, title })
            .await;
        self.then_refresh("edit", result).await
    }

    pub async fn on_destroy(&self, id: impl Into<TodoId>) -> Result<(), DomainError> {
        let id = id.into();
        tracing::debug!(id = %id, "Destroy");
        let result = self
            .message_handling
            .handle_destroy_command(DestroyCommand { id })
            .await;
        self.then_refresh("destroy", result).await
    }

    pub async fn on_clear_completed(&self) -> Result<(), DomainError> {
        tracing::debug!("Clear completed");
        let result = self
            .message_handling
            .handle_clear_completed_command(ClearCompletedCommand {})
            .await;
        self.then_refresh("clear-completed", result).await
    }

    /// Re-queries after a successful command; a failed command is returned
    /// without querying.
    async fn then_refresh(
        &self,
        command: &str,
        result: Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        if let Err(e) = result {
            tracing::warn!(command, error = %e, "Command failed");
            return Err(e);
        }
        self.refresh().await
    }

    /// Snapshot of the last queried todos, in backend order.
    pub fn todos(&self) -> Vec<Todo> {
        self.read().todos.as_slice().to_vec()
    }

    pub fn filter(&self) -> TodoFilter {
        self.read().filter
    }

    /// Re-derives the filter after a route change.
    pub fn set_route(&self, route: &str) {
        let filter = TodoFilter::from_route(route);
        tracing::debug!(route, filter = %filter, "Route changed");
        self.write().filter = filter;
    }

    /// Todos passing the current filter.
    pub fn visible_todos(&self) -> Vec<Todo> {
        let state = self.read();
        state.todos.filtered(state.filter)
    }

    pub fn active_count(&self) -> usize {
        self.read().todos.active_count()
    }

    pub fn completed_count(&self) -> usize {
        self.read().todos.completed_count()
    }

    pub fn has_todos(&self) -> bool {
        !self.read().todos.is_empty()
    }

    /// `true` only for a non-empty list with every todo completed.
    pub fn all_completed(&self) -> bool {
        self.read().todos.all_completed()
    }

    // The state only ever holds plain values, so a poisoned lock is still
    // consistent.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for TodosViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("TodosViewModel")
            .field("todos", &state.todos)
            .field("filter", &state.filter)
            .finish()
    }
}
