use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{default_columns, Board, Column, Task, Theme},
    error::Result,
};

pub mod file_storage;
pub mod memory;

/// Storage key for the board snapshot
pub const DATA_KEY: &str = "neon-kanban-data";

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

fn default_next_task_id() -> u64 {
    1
}

/// The persisted form of the board, written back after every mutation.
///
/// Field names match the original local-storage wire format, so snapshots
/// written by earlier versions of the application load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_next_task_id")]
    pub next_task_id: u64,
}

impl Snapshot {
    pub fn from_board(board: &Board, theme: Theme) -> Self {
        Self {
            tasks: board.tasks.clone(),
            columns: board.columns.clone(),
            theme,
            next_task_id: board.next_task_id,
        }
    }

    /// Splits the snapshot back into live state. The board counter is
    /// clamped against the restored task ids.
    pub fn into_board(self) -> (Board, Theme) {
        let theme = self.theme;
        let board = Board::from_parts(self.tasks, self.columns, self.next_task_id);
        (board, theme)
    }
}

/// Storage trait for persisting the board snapshot and theme preference
#[async_trait]
pub trait Storage: Send + Sync {
    /// Saves the full board snapshot
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Loads the board snapshot, or `None` if nothing was persisted yet
    async fn load(&self) -> Result<Option<Snapshot>>;

    /// Saves the theme preference under its own key
    async fn save_theme(&self, theme: Theme) -> Result<()>;

    /// Loads the theme preference, or `None` if never set
    async fn load_theme(&self) -> Result<Option<Theme>>;
}
