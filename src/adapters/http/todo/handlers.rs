//! HTTP handlers for todo message endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::DomainError;
use crate::domain::todo::{ClearCompletedCommand, TodosQuery};
use crate::ports::MessageHandling;

use super::dto::{
    CommandStatusResponse, DestroyRequest, EditRequest, NewTodoRequest, ToggleAllRequest,
    ToggleRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MessageHandlingState {
    message_handling: Arc<dyn MessageHandling>,
}

impl MessageHandlingState {
    pub fn new(message_handling: Arc<dyn MessageHandling>) -> Self {
        Self { message_handling }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /new-todo-command - Create a todo
pub async fn new_todo_command(
    State(state): State<MessageHandlingState>,
    payload: Result<Json<NewTodoRequest>, JsonRejection>,
) -> Response {
    let cmd = match parse(payload).and_then(NewTodoRequest::into_command) {
        Ok(cmd) => cmd,
        Err(status) => return bad_request(status),
    };

    command_status(state.message_handling.handle_new_todo_command(cmd).await)
}

/// POST /toggle-command - Flip one todo
pub async fn toggle_command(
    State(state): State<MessageHandlingState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> Response {
    let cmd = match parse(payload).and_then(ToggleRequest::into_command) {
        Ok(cmd) => cmd,
        Err(status) => return bad_request(status),
    };

    command_status(state.message_handling.handle_toggle_command(cmd).await)
}

/// POST /toggle-all-command - Mark every todo
pub async fn toggle_all_command(
    State(state): State<MessageHandlingState>,
    payload: Result<Json<ToggleAllRequest>, JsonRejection>,
) -> Response {
    let cmd = match parse(payload).and_then(ToggleAllRequest::into_command) {
        Ok(cmd) => cmd,
        Err(status) => return bad_request(status),
    };

    command_status(state.message_handling.handle_toggle_all_command(cmd).await)
}

/// POST /edit-command - Retitle a todo
pub async fn edit_command(
    State(state): State<MessageHandlingState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Response {
    let cmd = match parse(payload).and_then(EditRequest::into_command) {
        Ok(cmd) => cmd,
        Err(status) => return bad_request(status),
    };

    command_status(state.message_handling.handle_edit_command(cmd).await)
}

/// POST /destroy-command - Remove a todo
pub async fn destroy_command(
    State(state): State<MessageHandlingState>,
    payload: Result<Json<DestroyRequest>, JsonRejection>,
) -> Response {
    let cmd = match parse(payload).and_then(DestroyRequest::into_command) {
        Ok(cmd) => cmd,
        Err(status) => return bad_request(status),
    };

    command_status(state.message_handling.handle_destroy_command(cmd).await)
}

/// POST /clear-completed-command - Remove completed todos
///
/// The command has no properties, so the body is not inspected.
pub async fn clear_completed_command(State(state): State<MessageHandlingState>) -> Response {
    command_status(
        state
            .message_handling
            .handle_clear_completed_command(ClearCompletedCommand {})
            .await,
    )
}

/// GET /todos-query - Current todo list
pub async fn todos_query(State(state): State<MessageHandlingState>) -> Response {
    match state.message_handling.handle_todos_query(TodosQuery {}).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, CommandStatusResponse> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| CommandStatusResponse::failure(rejection.body_text()))
}

fn bad_request(status: CommandStatusResponse) -> Response {
    (StatusCode::BAD_REQUEST, Json(status)).into_response()
}

fn command_status(result: Result<(), DomainError>) -> Response {
    match result {
        Ok(()) => (StatusCode::OK, Json(CommandStatusResponse::success())).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = if error.code.is_client_error() {
        tracing::debug!("Rejected message: {}", error);
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("Message handling failed: {}", error);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(CommandStatusResponse::failure(error.message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ValidationError};

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = handle_domain_error(ValidationError::empty_field("title").into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_map_to_internal_error() {
        let response = handle_domain_error(DomainError::new(ErrorCode::StorageError, "disk"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn success_maps_to_ok() {
        assert_eq!(command_status(Ok(())).status(), StatusCode::OK);
    }
}
