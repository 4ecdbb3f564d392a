//! HTTP routes for todo message endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    clear_completed_command, destroy_command, edit_command, new_todo_command, todos_query,
    toggle_all_command, toggle_command, MessageHandlingState,
};

/// Creates the todo router with one endpoint per message.
pub fn todo_routes(state: MessageHandlingState) -> Router {
    Router::new()
        .route("/new-todo-command", post(new_todo_command))
        .route("/toggle-command", post(toggle_command))
        .route("/toggle-all-command", post(toggle_all_command))
        .route("/edit-command", post(edit_command))
        .route("/destroy-command", post(destroy_command))
        .route("/clear-completed-command", post(clear_completed_command))
        .route("/todos-query", get(todos_query))
        .with_state(state)
}
