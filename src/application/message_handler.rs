//! MessageHandler - In-process implementation of `MessageHandling`.
//!
//! Composes one handler per message over a shared repository. This is the
//! backend behind the HTTP API and can be handed to a frontend directly when
//! both run in one process.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::todo::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, TodosQuery,
    TodosQueryResult, ToggleAllCommand, ToggleCommand,
};
use crate::ports::{MessageHandling, TodoRepository};

use super::handlers::todo::{
    ClearCompletedHandler, DestroyHandler, EditHandler, NewTodoHandler, TodosQueryHandler,
    ToggleAllHandler, ToggleHandler,
};

/// Source recorded in command metadata when none is configured.
pub const IN_PROCESS_SOURCE: &str = "in-process";

/// Backend facade dispatching each message to its handler.
///
/// Command handlers load, change and store the whole list, so commands run
/// one at a time. Queries are not gated. Build a single `MessageHandler` per
/// repository.
pub struct MessageHandler {
    new_todo: NewTodoHandler,
    toggle: ToggleHandler,
    toggle_all: ToggleAllHandler,
    edit: EditHandler,
    destroy: DestroyHandler,
    clear_completed: ClearCompletedHandler,
    todos_query: TodosQueryHandler,
    source: String,
    writes: Mutex<()>,
}

impl MessageHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            new_todo: NewTodoHandler::new(repository.clone()),
            toggle: ToggleHandler::new(repository.clone()),
            toggle_all: ToggleAllHandler::new(repository.clone()),
            edit: EditHandler::new(repository.clone()),
            destroy: DestroyHandler::new(repository.clone()),
            clear_completed: ClearCompletedHandler::new(repository.clone()),
            todos_query: TodosQueryHandler::new(repository),
            source: IN_PROCESS_SOURCE.to_string(),
            writes: Mutex::new(()),
        }
    }

    /// Builder: Record a different source in command metadata.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Runs one command handler while holding the write gate.
    async fn dispatch<T, F, Fut>(&self, command: &'static str, run: F) -> Result<(), DomainError>
    where
        F: FnOnce(CommandMetadata) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let metadata = CommandMetadata::new(self.source.as_str());
        debug!(
            correlation_id = %metadata.correlation_id(),
            source = %metadata.source(),
            command,
            "dispatching command"
        );

        let correlation_id = metadata.correlation_id().to_string();
        let _write = self.writes.lock().await;
        match run(metadata).await {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(correlation_id = %correlation_id, command, error = %e, "command failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl MessageHandling for MessageHandler {
    async fn handle_new_todo_command(&self, command: NewTodoCommand) -> Result<(), DomainError> {
        self.dispatch("new-todo", |m| self.new_todo.handle(command, m))
            .await
    }

    async fn handle_toggle_command(&self, command: ToggleCommand) -> Result<(), DomainError> {
        self.dispatch("toggle", |m| self.toggle.handle(command, m)).await
    }

    async fn handle_toggle_all_command(
        &self,
        command: ToggleAllCommand,
    ) -> Result<(), DomainError> {
        self.dispatch("toggle-all", |m| self.toggle_all.handle(command, m))
            .await
    }

    async fn handle_edit_command(&self, command: EditCommand) -> Result<(), DomainError> {
        self.dispatch("edit", |m| self.edit.handle(command, m)).await
    }

    async fn handle_destroy_command(&self, command: DestroyCommand) -> Result<(), DomainError> {
        self.dispatch("destroy", |m| self.destroy.handle(command, m))
            .await
    }

    async fn handle_clear_completed_command(
        &self,
        command: ClearCompletedCommand,
    ) -> Result<(), DomainError> {
        self.dispatch("clear-completed", |m| self.clear_completed.handle(command, m))
            .await
    }

    async fn handle_todos_query(&self, query: TodosQuery) -> Result<TodosQueryResult, DomainError> {
        self.todos_query.handle(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{JsonTodoRepository, MemoryTodoRepository};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::todo::Todo;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Repository whose writes fail on demand.
    struct FlakyRepository {
        inner: MemoryTodoRepository,
        fail_store: AtomicBool,
    }

    #[async_trait]
    impl TodoRepository for FlakyRepository {
        async fn load(&self) -> Result<Vec<Todo>, DomainError> {
            self.inner.load().await
        }

        async fn store(&self, todos: Vec<Todo>) -> Result<(), DomainError> {
            if self.fail_store.load(Ordering::SeqCst) {
                return Err(DomainError::storage("Simulated write failure"));
            }
            self.inner.store(todos).await
        }
    }

    fn handler() -> MessageHandler {
        MessageHandler::new(Arc::new(MemoryTodoRepository::with_todos(vec![
            Todo::with_id("1", "Taste JavaScript", true),
            Todo::with_id("2", "Buy a unicorn", false),
        ])))
    }

    #[tokio::test]
    async fn commands_are_visible_through_query() {
        let handling = handler();

        handling
            .handle_new_todo_command(NewTodoCommand {
                title: "Lorem ipsum".to_string(),
            })
            .await
            .unwrap();
        handling
            .handle_toggle_command(ToggleCommand { id: "2".into() })
            .await
            .unwrap();
        handling
            .handle_edit_command(EditCommand {
                id: "1".into(),
                title: "Taste Rust".to_string(),
            })
            .await
            .unwrap();

        let todos = handling.handle_todos_query(TodosQuery {}).await.unwrap().todos;
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0], Todo::with_id("1", "Taste Rust", true));
        assert_eq!(todos[1], Todo::with_id("2", "Buy a unicorn", true));
        assert_eq!(todos[2].title, "Lorem ipsum");
    }

    #[tokio::test]
    async fn clear_completed_after_toggle_all_empties_list() {
        let handling = handler();

        handling
            .handle_toggle_all_command(ToggleAllCommand { completed: true })
            .await
            .unwrap();
        handling
            .handle_clear_completed_command(ClearCompletedCommand {})
            .await
            .unwrap();

        let result = handling.handle_todos_query(TodosQuery {}).await.unwrap();
        assert!(result.todos.is_empty());
    }

    #[tokio::test]
    async fn destroy_removes_todo() {
        let handling = handler();

        handling
            .handle_destroy_command(DestroyCommand { id: "1".into() })
            .await
            .unwrap();

        let result = handling.handle_todos_query(TodosQuery {}).await.unwrap();
        assert_eq!(result.todos, vec![Todo::with_id("2", "Buy a unicorn", false)]);
    }

    #[tokio::test]
    async fn storage_failures_surface_to_caller() {
        let repo = Arc::new(FlakyRepository {
            inner: MemoryTodoRepository::new(),
            fail_store: AtomicBool::new(true),
        });
        let handling = MessageHandler::new(repo);

        let err = handling
            .handle_toggle_all_command(ToggleAllCommand { completed: true })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn source_defaults_to_in_process() {
        let handling = MessageHandler::new(Arc::new(MemoryTodoRepository::new()));
        assert_eq!(handling.source(), IN_PROCESS_SOURCE);
        assert_eq!(handling.with_source("http").source(), "http");
    }

    // === Concurrency ===

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_new_todos_are_all_stored() {
        let repo = Arc::new(MemoryTodoRepository::new());
        let handling = Arc::new(MessageHandler::new(repo.clone()));

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let handling = handling.clone();
                tokio::spawn(async move {
                    handling
                        .handle_new_todo_command(NewTodoCommand {
                            title: format!("todo {}", i),
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(repo.load().await.unwrap().len(), 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_mixed_commands_keep_every_effect() {
        let handling = Arc::new(handler());

        let toggle = {
            let handling = handling.clone();
            tokio::spawn(async move {
                handling
                    .handle_toggle_command(ToggleCommand { id: "2".into() })
                    .await
            })
        };
        let edit = {
            let handling = handling.clone();
            tokio::spawn(async move {
                handling
                    .handle_edit_command(EditCommand {
                        id: "1".into(),
                        title: "Taste Rust".to_string(),
                    })
                    .await
            })
        };
        let add = {
            let handling = handling.clone();
            tokio::spawn(async move {
                handling
                    .handle_new_todo_command(NewTodoCommand {
                        title: "Lorem ipsum".to_string(),
                    })
                    .await
            })
        };
        toggle.await.unwrap().unwrap();
        edit.await.unwrap().unwrap();
        add.await.unwrap().unwrap();

        let todos = handling.handle_todos_query(TodosQuery {}).await.unwrap().todos;
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0], Todo::with_id("1", "Taste Rust", true));
        assert_eq!(todos[1], Todo::with_id("2", "Buy a unicorn", true));
        assert_eq!(todos[2].title, "Lorem ipsum");
    }

    #[tokio::test]
    async fn joined_new_todos_on_json_file_are_both_stored() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(JsonTodoRepository::new(dir.path().join("todos.json")));
        let handling = MessageHandler::new(repo.clone());

        let (first, second) = tokio::join!(
            handling.handle_new_todo_command(NewTodoCommand {
                title: "first".to_string(),
            }),
            handling.handle_new_todo_command(NewTodoCommand {
                title: "second".to_string(),
            }),
        );
        first.unwrap();
        second.unwrap();

        let mut titles: Vec<String> = repo
            .load()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["first", "second"]);
    }
}
