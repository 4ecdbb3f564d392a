//! HTTP adapters - REST API server and client.
//!
//! The server side exposes `MessageHandling` as one endpoint per message;
//! the client side implements `MessageHandling` against those endpoints.

pub mod client;
pub mod router;
pub mod todo;

// Re-export key types for convenience
pub use client::HttpMessageHandling;
pub use router::{api_router, API_PREFIX};
pub use todo::{todo_routes, CommandStatusResponse, MessageHandlingState};
