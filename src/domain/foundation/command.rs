//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` is the context that flows through command processing.
//! Instead of each handler taking loose `correlation_id` and `source`
//! arguments, they accept one struct, so every handler logs the same fields.

use uuid::Uuid;

/// Metadata context for command handlers.
///
/// One value is minted per dispatched command. The dispatcher and the
/// handler both log its correlation id, which ties their events together.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new("http");
///
/// handler.handle(NewTodoCommand { title: "Buy milk".into() }, metadata).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    /// Links the events logged for a single command.
    correlation_id: String,

    /// Source of this command (e.g., "http", "in-process").
    source: String,
}

impl CommandMetadata {
    /// Creates metadata with a fresh correlation id.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            source: source.into(),
        }
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture.
    ///
    /// Only available in test builds.
    pub fn test_fixture() -> Self {
        Self {
            correlation_id: "test-correlation-id".to_string(),
            source: "test".to_string(),
        }
    }
}
