//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from the query
//! handler (read); `MessageHandler` bundles them behind `MessageHandling`.

pub mod handlers;
mod message_handler;

pub use handlers::{
    ClearCompletedHandler, DestroyHandler, EditHandler, NewTodoHandler, TodosQueryHandler,
    ToggleAllHandler, ToggleHandler,
};
pub use message_handler::{MessageHandler, IN_PROCESS_SOURCE};
