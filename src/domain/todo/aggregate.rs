//! Todo entity.
//!
//! A todo is owned by backend storage. Frontends only ever hold copies
//! obtained from the todos query.

use crate::domain::foundation::{TodoId, ValidationError};
use serde::{Deserialize, Serialize};

/// A single entry of the todo list.
///
/// # Invariants
///
/// - `id` is unique within a list
/// - titles created through [`Todo::new`] or [`Todo::rename`] are trimmed,
///   and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new, active todo with a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the trimmed title is empty
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: TodoId::generate(),
            title: Self::validate_title(title)?,
            completed: false,
        })
    }

    /// Reconstitute a todo from persistence or a peer (no validation).
    pub fn with_id(id: impl Into<TodoId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }

    /// Returns true while the todo is not completed.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Flip the completed flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replace the title.
    ///
    /// # Errors
    ///
    /// Same as [`Todo::new`].
    pub fn rename(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = Self::validate_title(title)?;
        Ok(())
    }

    fn validate_title(title: &str) -> Result<String, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(trimmed.to_string())
    }
}
