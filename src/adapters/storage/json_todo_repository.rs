//! JSON File Todo Repository Adapter
//!
//! Stores the list as a pretty-printed JSON array in a single file.
//! A missing file reads as an empty list. Writes go to a sibling temp file
//! that is renamed over the target, so readers never see a partial list.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::DomainError;
use crate::domain::todo::Todo;
use crate::ports::TodoRepository;

/// File-based storage for the todo list
#[derive(Debug, Clone)]
pub struct JsonTodoRepository {
    file: PathBuf,
}

impl JsonTodoRepository {
    /// Create a repository backed by `file`
    ///
    /// # Example
    /// ```ignore
    /// let repository = JsonTodoRepository::new("./data/todos.json");
    /// ```
    pub fn new<P: AsRef<Path>>(file: P) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn file(&self) -> &Path {
        &self.file
    }

    fn temp_file(&self) -> PathBuf {
        let mut name = self.file.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn ensure_parent_dir(&self) -> Result<(), DomainError> {
        match self.file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).await.map_err(|e| {
                    DomainError::storage(format!("Cannot create {}: {}", dir.display(), e))
                })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl TodoRepository for JsonTodoRepository {
    async fn load(&self) -> Result<Vec<Todo>, DomainError> {
        let json = match fs::read_to_string(&self.file).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Cannot read {}: {}",
                    self.file.display(),
                    e
                )))
            }
        };

        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&json).map_err(|e| {
            DomainError::storage(format!("Cannot parse {}: {}", self.file.display(), e))
        })
    }

    async fn store(&self, todos: Vec<Todo>) -> Result<(), DomainError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(&todos)
            .map_err(|e| DomainError::storage(format!("Cannot serialize todos: {}", e)))?;

        let temp = self.temp_file();
        fs::write(&temp, json).await.map_err(|e| {
            DomainError::storage(format!("Cannot write {}: {}", temp.display(), e))
        })?;

        if let Err(e) = fs::rename(&temp, &self.file).await {
            let _ = fs::remove_file(&temp).await;
            return Err(DomainError::storage(format!(
                "Cannot replace {}: {}",
                self.file.display(),
                e
            )));
        }
        Ok(())
    }
}
