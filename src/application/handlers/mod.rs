//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod todo;

pub use todo::{
    ClearCompletedHandler, DestroyHandler, EditHandler, NewTodoHandler, TodosQueryHandler,
    ToggleAllHandler, ToggleHandler,
};
