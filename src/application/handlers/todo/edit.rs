//! EditHandler - Command handler for retitling a todo.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{EditCommand, TodoList};
use crate::ports::TodoRepository;

/// Handler for editing a todo's title.
pub struct EditHandler {
    repository: Arc<dyn TodoRepository>,
}

impl EditHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Replaces the title of the addressed todo. Unknown ids are a no-op,
    /// an invalid title fails before anything is stored.
    pub async fn handle(
        &self,
        cmd: EditCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        let found = list.edit(&cmd.id, &cmd.title)?;

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            todo_id = %cmd.id,
            found,
            "todo edited"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryTodoRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::todo::Todo;

    fn repo() -> Arc<MemoryTodoRepository> {
        Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("1", "Taste JavaScript", true),
            Todo::with_id("2", "Buy a unicorn", false),
        ]))
    }

    #[tokio::test]
    async fn replaces_title() {
        let repo = repo();
        let handler = EditHandler::new(repo.clone());

        let cmd = EditCommand {
            id: "2".into(),
            title: "Buy a horse".to_string(),
        };
        handler.handle(cmd, CommandMetadata::test_fixture()).await.unwrap();

        assert_eq!(
            repo.load().await.unwrap()[1],
            Todo::with_id("2", "Buy a horse", false)
        );
    }

    #[tokio::test]
    async fn rejects_empty_title() {
        let repo = repo();
        let handler = EditHandler::new(repo.clone());

        let cmd = EditCommand {
            id: "2".into(),
            title: String::new(),
        };
        let err = handler
            .handle(cmd, CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(repo.load().await.unwrap()[1].title, "Buy a unicorn");
    }
}
