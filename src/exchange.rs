//! Export and import of board snapshots as standalone JSON documents.
//!
//! Import is two-phase to preserve the destructive-action confirmation
//! gate: [`PendingImport::parse`] only validates the document, and nothing
//! is replaced until the caller explicitly applies it (see
//! [`crate::store::BoardStore::confirm_import`]). Dropping a parsed import
//! is cancellation and leaves the board untouched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{default_columns, Board, Column, Task},
    error::{KanbanError, Result},
};

/// Schema version written into export documents
pub const EXPORT_VERSION: &str = "1.0";

/// Exported board document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardExport {
    pub tasks: Vec<Task>,
    pub columns: Vec<Column>,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

impl BoardExport {
    pub fn from_board(board: &Board) -> Self {
        Self {
            tasks: board.tasks.clone(),
            columns: board.columns.clone(),
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Suggested download name for an export taken on the given day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("neon-kanban-export-{}.json", date.format("%Y-%m-%d"))
}

/// [`export_file_name`] for the current UTC calendar day
pub fn export_file_name_now() -> String {
    export_file_name(Utc::now().date_naive())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocument {
    #[serde(default)]
    tasks: Vec<Task>,
    // A document without columns gets the built-in five
    #[serde(default = "default_columns")]
    columns: Vec<Column>,
}

/// A parsed import document awaiting user confirmation.
///
/// Parsing never mutates board state; a malformed document fails here and
/// the current board is left unchanged.
#[derive(Debug)]
pub struct PendingImport {
    tasks: Vec<Task>,
    columns: Vec<Column>,
}

impl PendingImport {
    pub fn parse(json: &str) -> Result<Self> {
        let document: ImportDocument =
            serde_json::from_str(json).map_err(|e| KanbanError::InvalidImport(e.to_string()))?;
        Ok(Self {
            tasks: document.tasks,
            columns: document.columns,
        })
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Consumes the pending import into a fresh board, recomputing the id
    /// counter from the imported tasks.
    pub fn into_board(self) -> Board {
        Board::from_import(self.tasks, self.columns)
    }
}
