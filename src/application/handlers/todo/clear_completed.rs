//! ClearCompletedHandler - Command handler for removing finished todos.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{ClearCompletedCommand, TodoList};
use crate::ports::TodoRepository;

/// Handler for clearing completed todos.
pub struct ClearCompletedHandler {
    repository: Arc<dyn TodoRepository>,
}

impl ClearCompletedHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Removes every completed todo and returns how many were removed.
    pub async fn handle(
        &self,
        _cmd: ClearCompletedCommand,
        metadata: CommandMetadata,
    ) -> Result<usize, DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        let removed = list.clear_completed();

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            removed,
            "completed todos cleared"
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryTodoRepository;
    use crate::domain::todo::Todo;

    #[tokio::test]
    async fn removes_only_completed_todos() {
        let repo = Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("1", "Taste JavaScript", true),
            Todo::with_id("2", "Buy a unicorn", false),
            Todo::with_id("3", "Walk the dog", true),
        ]));
        let handler = ClearCompletedHandler::new(repo.clone());

        let removed = handler
            .handle(ClearCompletedCommand {}, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert_eq!(
            repo.load().await.unwrap(),
            vec![Todo::with_id("2", "Buy a unicorn", false)]
        );
    }
}
