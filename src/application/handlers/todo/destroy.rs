//! DestroyHandler - Command handler for removing a todo.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{DestroyCommand, TodoList};
use crate::ports::TodoRepository;

/// Handler for removing a single todo.
pub struct DestroyHandler {
    repository: Arc<dyn TodoRepository>,
}

impl DestroyHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DestroyCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        let removed = list.destroy(&cmd.id);

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            todo_id = %cmd.id,
            removed,
            "todo destroyed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryTodoRepository;
    use crate::domain::todo::Todo;

    #[tokio::test]
    async fn removes_addressed_todo() {
        let repo = Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("1", "Taste JavaScript", true),
            Todo::with_id("2", "Buy a unicorn", false),
        ]));
        let handler = DestroyHandler::new(repo.clone());

        handler
            .handle(DestroyCommand { id: "2".into() }, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(
            repo.load().await.unwrap(),
            vec![Todo::with_id("1", "Taste JavaScript", true)]
        );
    }
}
