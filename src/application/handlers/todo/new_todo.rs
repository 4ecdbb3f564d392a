//! NewTodoHandler - Command handler for creating todos.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError, TodoId};
use crate::domain::todo::{NewTodoCommand, TodoList};
use crate::ports::TodoRepository;

/// Handler for creating todos.
pub struct NewTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl NewTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Appends a new active todo and returns its generated id.
    pub async fn handle(
        &self,
        cmd: NewTodoCommand,
        metadata: CommandMetadata,
    ) -> Result<TodoId, DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        let id = list.add(&cmd.title)?;

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            todo_id = %id,
            "new todo created"
        );
        Ok(id)
    }
}
