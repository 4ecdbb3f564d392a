//! Todo domain module.
//!
//! The todo entity, the whole-list transformations applied by command
//! handlers, the route-derived filter and the message payloads exchanged
//! through the `MessageHandling` contract.

mod aggregate;
mod filter;
mod list;
mod messages;

pub use aggregate::Todo;
pub use filter::TodoFilter;
pub use list::TodoList;
pub use messages::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, TodosQuery,
    TodosQueryResult, ToggleAllCommand, ToggleCommand,
};
