//! # Neon Kanban Core
//!
//! Board state, persistence and import/export logic for Neon Kanban task
//! management.
//!
//! This crate provides the fundamental types and operations for managing
//! a single-user kanban board: tasks, columns, snapshot persistence, the
//! JSON export/import protocol and the static suggestion catalog, without
//! any dependency on a specific UI implementation.

pub mod domain;
pub mod error;
pub mod exchange;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardStats},
    column::{Column, ColumnId},
    suggestions::SuggestionCategory,
    task::{Priority, Task, TaskDraft, TaskId, TaskPatch},
    theme::Theme,
};
pub use error::{KanbanError, Result};
pub use exchange::{export_file_name, export_file_name_now, BoardExport, PendingImport};
pub use storage::{Snapshot, Storage};
pub use store::{BoardEvent, BoardObserver, BoardStore};
