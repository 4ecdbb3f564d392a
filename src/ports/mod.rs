//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MessageHandling` - Commands and the todos query, consumed by frontends
//! - `TodoRepository` - Whole-list persistence, consumed by backend handlers

mod message_handling;
mod todo_repository;

pub use message_handling::MessageHandling;
pub use todo_repository::TodoRepository;
