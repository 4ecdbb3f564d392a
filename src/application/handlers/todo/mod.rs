//! Todo command and query handlers.
//!
//! Each handler loads the whole list from the repository, applies one
//! message and stores the result.

mod clear_completed;
mod destroy;
mod edit;
mod new_todo;
mod todos_query;
mod toggle;
mod toggle_all;

pub use clear_completed::ClearCompletedHandler;
pub use destroy::DestroyHandler;
pub use edit::EditHandler;
pub use new_todo::NewTodoHandler;
pub use todos_query::TodosQueryHandler;
pub use toggle::ToggleHandler;
pub use toggle_all::ToggleAllHandler;
