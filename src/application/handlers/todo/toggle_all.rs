//! ToggleAllHandler - Command handler for marking every todo.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{TodoList, ToggleAllCommand};
use crate::ports::TodoRepository;

/// Handler for setting `completed` on the whole list.
pub struct ToggleAllHandler {
    repository: Arc<dyn TodoRepository>,
}

impl ToggleAllHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ToggleAllCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        list.set_all_completed(cmd.completed);
        let count = list.len();

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            completed = cmd.completed,
            count,
            "all todos toggled"
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
    async fn toggle_all() {
        let repo = Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste JavaScript", true),
            Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", false),
        ]));
        let handler = ToggleAllHandler::new(repo.clone());

        let result = handler
            .handle(ToggleAllCommand { completed: true }, CommandMetadata::test_fixture())
            .await;

        assert!(result.is_ok());
        assert_eq!(
            repo.load().await.unwrap(),
            vec![
                Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste JavaScript", true),
                Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", true),
            ]
        );
    }

    #[tokio::test]
    async fn untoggle_all() {
        let repo = Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("1", "Taste JavaScript", true),
            Todo::with_id("2", "Buy a unicorn", false),
        ]));
        let handler = ToggleAllHandler::new(repo.clone());

        handler
            .handle(ToggleAllCommand { completed: false }, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert!(repo.load().await.unwrap().iter().all(|t| t.is_active()));
    }
}
