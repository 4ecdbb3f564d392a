//! Todo storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the backend keeps its todo list
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Repository implementation
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file used by the `json` backend
    #[serde(default = "default_todos_file")]
    pub todos_file: PathBuf,

    /// Start the `memory` backend with the two example todos
    #[serde(default)]
    pub seed_examples: bool,
}

/// Repository implementation selector
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    Json,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::Json && self.todos_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.todos_file"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            todos_file: default_todos_file(),
            seed_examples: false,
        }
    }
}

fn default_todos_file() -> PathBuf {
    PathBuf::from("todos.json")
}
