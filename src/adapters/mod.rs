//! Adapters - Implementations of ports.
//!
//! - `storage` - In-memory and JSON file todo repositories
//! - `http` - REST API server routes and the HTTP `MessageHandling` client

pub mod http;
pub mod storage;
