//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, command metadata and error types
//! that form the vocabulary of the TodoMVC domain.

mod command;
mod errors;
mod ids;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::TodoId;
