use thiserror::Error;

use crate::domain::task::TaskId;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{0}' is a default column and cannot be deleted")]
    ProtectedColumn(String),

    #[error("A column with id '{0}' already exists")]
    ColumnExists(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
