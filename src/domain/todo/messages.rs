//! Message payloads of the `MessageHandling` contract.
//!
//! Commands mutate the list and carry no result; the single query returns
//! the whole list. All payloads serialize to the JSON bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TodoId;

use super::Todo;

/// Create a todo with the given title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodoCommand {
    pub title: String,
}

/// Flip `completed` of one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleCommand {
    pub id: TodoId,
}

/// Set `completed` on every todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleAllCommand {
    pub completed: bool,
}

/// Replace the title of one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCommand {
    pub id: TodoId,
    pub title: String,
}

/// Remove one todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyCommand {
    pub id: TodoId,
}

/// Remove every completed todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCompletedCommand {}

/// Fetch the current list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosQuery {}

/// Result of [`TodosQuery`], in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosQueryResult {
    pub todos: Vec<Todo>,
}

impl TodosQueryResult {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}
