//! In-Memory Todo Repository Adapter
//!
//! Keeps the list in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::todo::Todo;
use crate::ports::TodoRepository;

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    stores: usize,
}

/// In-memory storage for the todo list
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryTodoRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `todos`
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner { todos, stores: 0 })),
        }
    }

    /// Create a repository seeded with the two example todos
    pub fn with_examples() -> Self {
        Self::with_todos(vec![
            Todo::with_id("119e6785-8ffc-42e0-8df6-dbc64881f2b7", "Taste JavaScript", true),
            Todo::with_id("d2f7760d-8f03-4cb3-9176-06311cb89993", "Buy a unicorn", false),
        ])
    }

    /// Number of `store` calls so far (useful for tests)
    pub async fn store_count(&self) -> usize {
        self.inner.read().await.stores
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn load(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn store(&self, todos: Vec<Todo>) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        inner.todos = todos;
        inner.stores += 1;
        Ok(())
    }
}
