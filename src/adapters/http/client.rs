//! HTTP Message Handling - `MessageHandling` over the REST API.
//!
//! Used by frontends that run apart from the backend. Every command is a
//! `POST` of its JSON payload, the query is a `GET`.
//!
//! # Configuration
//!
//! ```ignore
//! let handling = HttpMessageHandling::new("http://localhost:8080/api", Duration::from_secs(10))?;
//! let view_model = MessageHandlingProvider::new(Arc::new(handling)).todos_view_model("/");
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::todo::{
    ClearCompletedCommand, DestroyCommand, EditCommand, NewTodoCommand, TodosQuery,
    TodosQueryResult, ToggleAllCommand, ToggleCommand,
};
use crate::ports::MessageHandling;

use super::todo::CommandStatusResponse;

/// Backend proxy speaking the todo REST API.
#[derive(Debug, Clone)]
pub struct HttpMessageHandling {
    base_url: String,
    client: Client,
}

impl HttpMessageHandling {
    /// Creates a proxy for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Creates a proxy from the `client` configuration section.
    pub fn from_config(config: &ClientConfig) -> Result<Self, DomainError> {
        config.validate().map_err(|e| {
            DomainError::transport(format!("Invalid client configuration: {}", e))
        })?;
        Self::new(config.base_url.clone(), config.timeout())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send_command<T>(&self, path: &str, command: &T) -> Result<(), DomainError>
    where
        T: Serialize + Sync,
    {
        tracing::debug!("POST {}", path);

        let response = self
            .client
            .post(self.url(path))
            .json(command)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check_status(response, ErrorCode::CommandFailed).await?;
        Ok(())
    }

    /// Passes successful responses through; turns anything else into an
    /// error carrying the server's message when it sent one.
    async fn check_status(response: Response, code: ErrorCode) -> Result<Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<CommandStatusResponse>(&body)
            .ok()
            .and_then(|s| s.error_message)
            .unwrap_or_else(|| format!("Server returned {}", status));

        Err(DomainError::new(code, message).with_detail("status", status.as_u16().to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::transport(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        DomainError::transport(format!("Connection failed: {}", e))
    } else {
        DomainError::transport(e.to_string())
    }
}

#[async_trait]
impl MessageHandling for HttpMessageHandling {
    async fn handle_new_todo_command(&self, command: NewTodoCommand) -> Result<(), DomainError> {
        self.send_command("new-todo-command", &command).await
    }

    async fn handle_toggle_command(&self, command: ToggleCommand) -> Result<(), DomainError> {
        self.send_command("toggle-command", &command).await
    }

    async fn handle_toggle_all_command(
        &self,
        command: ToggleAllCommand,
    ) -> Result<(), DomainError> {
        self.send_command("toggle-all-command", &command).await
    }

    async fn handle_edit_command(&self, command: EditCommand) -> Result<(), DomainError> {
        self.send_command("edit-command", &command).await
    }

    async fn handle_destroy_command(&self, command: DestroyCommand) -> Result<(), DomainError> {
        self.send_command("destroy-command", &command).await
    }

    async fn handle_clear_completed_command(
        &self,
        command: ClearCompletedCommand,
    ) -> Result<(), DomainError> {
        self.send_command("clear-completed-command", &command).await
    }

    async fn handle_todos_query(
        &self,
        _query: TodosQuery,
    ) -> Result<TodosQueryResult, DomainError> {
        tracing::debug!("GET todos-query");

        let response = self
            .client
            .get(self.url("todos-query"))
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::check_status(response, ErrorCode::QueryFailed).await?;

        response.json::<TodosQueryResult>().await.map_err(|e| {
            DomainError::new(ErrorCode::QueryFailed, format!("Invalid query result: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let handling =
            HttpMessageHandling::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            handling.url("todos-query"),
            "http://localhost:8080/api/todos-query"
        );
    }

    #[test]
    fn from_config_uses_base_url() {
        let handling = HttpMessageHandling::from_config(&ClientConfig::default()).unwrap();
        assert_eq!(
            handling.url("toggle-command"),
            "http://localhost:8080/api/toggle-command"
        );
    }

    #[test]
    fn from_config_rejects_invalid_section() {
        let config = ClientConfig {
            base_url: "localhost:8080".to_string(),
            ..Default::default()
        };

        let err = HttpMessageHandling::from_config(&config).unwrap_err();

        assert_eq!(err.code, ErrorCode::TransportError);
        assert!(err.message.contains("Invalid client configuration"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Port 9 (discard) on loopback is expected to refuse connections.
        let handling =
            HttpMessageHandling::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();

        let err = handling.handle_todos_query(TodosQuery {}).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::TransportError);
    }
}
