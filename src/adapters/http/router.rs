//! API router assembly.
//!
//! Nests the todo endpoints under `/api` and wraps them in the tower-http
//! layers every deployment uses: request tracing, a request timeout and CORS.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::MessageHandling;

use super::todo::{todo_routes, MessageHandlingState};

/// Path prefix of every todo endpoint.
pub const API_PREFIX: &str = "/api";

/// Builds the full application router.
pub fn api_router(message_handling: Arc<dyn MessageHandling>, server: &ServerConfig) -> Router {
    let state = MessageHandlingState::new(message_handling);

    Router::new()
        .nest(API_PREFIX, todo_routes(state))
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
