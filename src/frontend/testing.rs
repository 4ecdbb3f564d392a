//! Recording `MessageHandling` double shared by the frontend tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::todo::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, Todo, TodosQuery,
    TodosQueryResult, ToggleAllCommand, ToggleCommand,
};
use crate::ports::MessageHandling;

/// One observed call, with its exact payload.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Query,
    NewTodo(NewTodoCommand),
    Toggle(ToggleCommand),
    ToggleAll(ToggleAllCommand),
    Edit(EditCommand),
    Destroy(DestroyCommand),
    ClearCompleted(ClearCompletedCommand),
}

/// Records every call and answers queries with a fixed todo list.
#[derive(Default)]
pub(crate) struct RecordingMessageHandling {
    calls: Mutex<Vec<Call>>,
    todos: Mutex<Vec<Todo>>,
    fail_commands: AtomicBool,
    fail_queries: AtomicBool,
}

impl RecordingMessageHandling {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_todos(todos: Vec<Todo>) -> Self {
        let handling = Self::default();
        handling.set_todos(todos);
        handling
    }

    pub(crate) fn set_todos(&self, todos: Vec<Todo>) {
        *self.todos.lock().unwrap() = todos;
    }

    pub(crate) fn fail_commands(&self, fail: bool) {
        self.fail_commands.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn query_count(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::Query).count()
    }

    fn command(&self, call: Call) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_commands.load(Ordering::SeqCst) {
            return Err(DomainError::new(ErrorCode::CommandFailed, "command rejected"));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageHandling for RecordingMessageHandling {
    async fn handle_new_todo_command(&self, command: NewTodoCommand) -> Result<(), DomainError> {
        self.command(Call::NewTodo(command))
    }

    async fn handle_toggle_command(&self, command: ToggleCommand) -> Result<(), DomainError> {
        self.command(Call::Toggle(command))
    }

    async fn handle_toggle_all_command(
        &self,
        command: ToggleAllCommand,
    ) -> Result<(), DomainError> {
        self.command(Call::ToggleAll(command))
    }

    async fn handle_edit_command(&self, command: EditCommand) -> Result<(), DomainError> {
        self.command(Call::Edit(command))
    }

    async fn handle_destroy_command(&self, command: DestroyCommand) -> Result<(), DomainError> {
        self.command(Call::Destroy(command))
    }

    async fn handle_clear_completed_command(
        &self,
        command: ClearCompletedCommand,
    ) -> Result<(), DomainError> {
        self.command(Call::ClearCompleted(command))
    }

    async fn handle_todos_query(
        &self,
        _query: TodosQuery,
    ) -> Result<TodosQueryResult, DomainError> {
        self.calls.lock().unwrap().push(Call::Query);
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(DomainError::new(ErrorCode::QueryFailed, "query rejected"));
        }
        Ok(TodosQueryResult::new(self.todos.lock().unwrap().clone()))
    }
}
