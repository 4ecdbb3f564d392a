//! TodosQueryHandler - Query handler for the todo list.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::todo::{TodosQuery, TodosQueryResult};
use crate::ports::TodoRepository;

/// Handler for reading the current list.
pub struct TodosQueryHandler {
    repository: Arc<dyn TodoRepository>,
}

impl TodosQueryHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: TodosQuery) -> Result<TodosQueryResult, DomainError> {
        let todos = self.repository.load().await?;
        Ok(TodosQueryResult::new(todos))
    }
}
