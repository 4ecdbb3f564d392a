//! HTTP DTOs for todo message endpoints.
//!
//! Request bodies keep every property optional so a missing property is
//! reported as a bad request naming it, instead of a generic parse error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TodoId;
use crate::domain::todo::{
    DestroyCommand, EditCommand, NewTodoCommand, ToggleAllCommand, ToggleCommand,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /new-todo-command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /toggle-command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub id: Option<String>,
}

/// Body of `POST /toggle-all-command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleAllRequest {
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Body of `POST /edit-command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `POST /destroy-command`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestroyRequest {
    #[serde(default)]
    pub id: Option<String>,
}

impl NewTodoRequest {
    pub fn into_command(self) -> Result<NewTodoCommand, CommandStatusResponse> {
        let title = required(self.title, "title", "new todo")?;
        Ok(NewTodoCommand { title })
    }
}

impl ToggleRequest {
    pub fn into_command(self) -> Result<ToggleCommand, CommandStatusResponse> {
        let id = required_id(self.id, "toggle")?;
        Ok(ToggleCommand { id })
    }
}

impl ToggleAllRequest {
    pub fn into_command(self) -> Result<ToggleAllCommand, CommandStatusResponse> {
        let completed = required(self.completed, "completed", "toggle all")?;
        Ok(ToggleAllCommand { completed })
    }
}

impl EditRequest {
    pub fn into_command(self) -> Result<EditCommand, CommandStatusResponse> {
        let id = required_id(self.id, "edit")?;
        let title = required(self.title, "title", "edit")?;
        Ok(EditCommand { id, title })
    }
}

impl DestroyRequest {
    pub fn into_command(self) -> Result<DestroyCommand, CommandStatusResponse> {
        let id = required_id(self.id, "destroy")?;
        Ok(DestroyCommand { id })
    }
}

fn required<T>(
    value: Option<T>,
    property: &str,
    command: &str,
) -> Result<T, CommandStatusResponse> {
    value.ok_or_else(|| {
        CommandStatusResponse::failure(format!(
            "Missing property `{}` in {} command.",
            property, command
        ))
    })
}

fn required_id(value: Option<String>, command: &str) -> Result<TodoId, CommandStatusResponse> {
    let raw = required(value, "id", command)?;
    TodoId::parse(raw).map_err(|e| CommandStatusResponse::failure(e.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Outcome of a command, returned by every command endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStatusResponse {
    pub success: bool,
    #[serde(
        rename = "errorMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

impl CommandStatusResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
        }
    }
}
