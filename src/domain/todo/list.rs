//! Whole-list operations.
//!
//! Storage loads and stores the list as a unit; every command is a pure
//! transformation from one list to the next.

use crate::domain::foundation::{TodoId, ValidationError};

use super::{Todo, TodoFilter};

/// Ordered todo list. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn into_vec(self) -> Vec<Todo> {
        self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append a new todo and return its id.
    pub fn add(&mut self, title: &str) -> Result<TodoId, ValidationError> {
        let todo = Todo::new(title)?;
        let id = todo.id.clone();
        self.todos.push(todo);
        Ok(id)
    }

    /// Flip one todo. Returns false when the id is unknown.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        match self.find_mut(id) {
            Some(todo) => {
                todo.toggle();
                true
            }
            None => false,
        }
    }

    /// Set `completed` on every todo.
    pub fn set_all_completed(&mut self, completed: bool) {
        for todo in &mut self.todos {
            todo.completed = completed;
        }
    }

    /// Retitle one todo. Returns `Ok(false)` when the id is unknown.
    pub fn edit(&mut self, id: &TodoId, title: &str) -> Result<bool, ValidationError> {
        match self.find_mut(id) {
            Some(todo) => {
                todo.rename(title)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove one todo. Returns false when the id is unknown.
    pub fn destroy(&mut self, id: &TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        self.todos.len() != before
    }

    /// Remove every completed todo and return how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(Todo::is_active);
        before - self.todos.len()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// True only for a non-empty list with nothing left to do.
    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }

    /// Todos selected by `filter`, in list order.
    pub fn filtered(&self, filter: TodoFilter) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    fn find_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| &t.id == id)
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self::new(todos)
    }
}
