//! ToggleHandler - Command handler for flipping one todo.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{TodoList, ToggleCommand};
use crate::ports::TodoRepository;

/// Handler for toggling a single todo.
pub struct ToggleHandler {
    repository: Arc<dyn TodoRepository>,
}

impl ToggleHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Flips `completed` of the addressed todo. Unknown ids are a no-op.
    pub async fn handle(
        &self,
        cmd: ToggleCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        let mut list = TodoList::new(self.repository.load().await?);

        let found = list.toggle(&cmd.id);

        self.repository.store(list.into_vec()).await?;

        debug!(
            correlation_id = %metadata.correlation_id(),
            todo_id = %cmd.id,
            found,
            "todo toggled"
        );
        Ok(())
    }
}
