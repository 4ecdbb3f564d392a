//! TodoMVC - Command/query todo list
//!
//! UI actions are dispatched as commands through the `MessageHandling`
//! contract and the list is re-fetched with a query after every mutation.
//! The crate carries both sides of that contract: the frontend view-model
//! and the backend handlers with their storage and HTTP adapters.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod frontend;
pub mod ports;
