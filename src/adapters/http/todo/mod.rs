//! HTTP adapter for todo messages.
//!
//! Exposes `MessageHandling` as a REST API:
//! - `POST /new-todo-command`
//! - `POST /toggle-command`
//! - `POST /toggle-all-command`
//! - `POST /edit-command`
//! - `POST /destroy-command`
//! - `POST /clear-completed-command`
//! - `GET /todos-query`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::CommandStatusResponse;
pub use handlers::MessageHandlingState;
pub use routes::todo_routes;
