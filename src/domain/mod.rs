//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, command metadata, errors)
//! - `todo` - Todo entity, list transformations, filter and contract messages

pub mod foundation;
pub mod todo;
