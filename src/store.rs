//! The board store: owns the live board state, persists a snapshot after
//! every mutation, and notifies registered observers of changes.
//!
//! The store never assumes a renderer exists; observers are optional and
//! purely reactive. All mutations are methods on the store so there is
//! exactly one owner of board state.

use tracing::{debug, warn};

use crate::{
    domain::{
        draft_from_suggestion, suggestions, Board, BoardStats, Column, ColumnId,
        SuggestionCategory, Task, TaskDraft, TaskId, TaskPatch, Theme,
    },
    error::Result,
    exchange::{BoardExport, PendingImport},
    storage::{Snapshot, Storage},
};

/// A change that was applied to the board
#[derive(Debug, Clone)]
pub enum BoardEvent {
    TaskCreated(Task),
    TaskUpdated(Task),
    TaskDeleted(Task),
    TaskMoved(Task),
    ColumnCreated(Column),
    ColumnDeleted(Column),
    ThemeChanged(Theme),
    BoardImported,
}

/// Receives change notifications along with freshly computed stats
pub trait BoardObserver: Send + Sync {
    fn board_changed(&self, event: &BoardEvent, stats: BoardStats);
}

/// Owns the board state and its persistence.
///
/// Every successful mutation writes the full snapshot back to storage and
/// then notifies observers; failed mutations persist and notify nothing.
pub struct BoardStore {
    board: Board,
    theme: Theme,
    storage: Box<dyn Storage>,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl BoardStore {
    /// Loads the store from persisted state. An absent or unreadable
    /// snapshot falls back to an empty board with the default columns, so
    /// startup never fails on bad data.
    pub async fn load(storage: Box<dyn Storage>) -> Self {
        let (board, snapshot_theme) = match storage.load().await {
            Ok(Some(snapshot)) => snapshot.into_board(),
            Ok(None) => (Board::default(), Theme::default()),
            Err(e) => {
                warn!("discarding unreadable snapshot: {}", e);
                (Board::default(), Theme::default())
            }
        };

        let theme = match storage.load_theme().await {
            Ok(Some(theme)) => theme,
            Ok(None) => snapshot_theme,
            Err(e) => {
                warn!("discarding unreadable theme preference: {}", e);
                snapshot_theme
            }
        };

        Self {
            board,
            theme,
            storage,
            observers: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn stats(&self) -> BoardStats {
        self.board.stats()
    }

    pub fn register_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    async fn commit(&self, event: BoardEvent) -> Result<()> {
        let snapshot = Snapshot::from_board(&self.board, self.theme);
        self.storage.save(&snapshot).await?;

        let stats = self.board.stats();
        debug!(?event, total = stats.total_tasks, "board changed");
        for observer in &self.observers {
            observer.board_changed(&event, stats);
        }
        Ok(())
    }

    pub async fn create_task(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = self.board.create_task(draft)?;
        self.commit(BoardEvent::TaskCreated(task.clone())).await?;
        Ok(task)
    }

    pub async fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        let task = self.board.update_task(id, patch)?;
        self.commit(BoardEvent::TaskUpdated(task.clone())).await?;
        Ok(task)
    }

    pub async fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let task = self.board.delete_task(id)?;
        self.commit(BoardEvent::TaskDeleted(task.clone())).await?;
        Ok(task)
    }

    pub async fn move_task(&mut self, id: TaskId, column_id: ColumnId) -> Result<Task> {
        let task = self.board.move_task(id, column_id)?;
        self.commit(BoardEvent::TaskMoved(task.clone())).await?;
        Ok(task)
    }

    pub async fn create_column(&mut self, name: &str, color: Option<&str>) -> Result<Column> {
        let column = self.board.create_column(name, color)?;
        self.commit(BoardEvent::ColumnCreated(column.clone())).await?;
        Ok(column)
    }

    pub async fn delete_column(&mut self, id: &ColumnId) -> Result<Column> {
        let column = self.board.delete_column(id)?;
        self.commit(BoardEvent::ColumnDeleted(column.clone())).await?;
        Ok(column)
    }

    /// Sets the theme, persisting it both in the snapshot and under the
    /// dedicated theme key
    pub async fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        self.theme = theme;
        self.storage.save_theme(theme).await?;
        self.commit(BoardEvent::ThemeChanged(theme)).await?;
        Ok(theme)
    }

    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggle()).await
    }

    /// Accepts a single suggestion, creating a task in the to-do column
    pub async fn accept_suggestion(&mut self, title: &str) -> Result<Task> {
        self.create_task(draft_from_suggestion(title)).await
    }

    /// Accepts every suggestion in a category in catalog order
    pub async fn accept_all_suggestions(
        &mut self,
        category: SuggestionCategory,
    ) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for title in suggestions(category) {
            tasks.push(self.accept_suggestion(title).await?);
        }
        Ok(tasks)
    }

    pub fn export(&self) -> BoardExport {
        BoardExport::from_board(&self.board)
    }

    pub fn export_json(&self) -> Result<String> {
        self.export().to_json()
    }

    /// Parses an import document without touching board state. The replace
    /// happens only in [`confirm_import`](Self::confirm_import); dropping
    /// the returned value cancels the import.
    pub fn preview_import(&self, json: &str) -> Result<PendingImport> {
        PendingImport::parse(json)
    }

    /// Applies a confirmed import, replacing tasks and columns wholesale
    pub async fn confirm_import(&mut self, pending: PendingImport) -> Result<()> {
        self.board = pending.into_board();
        self.commit(BoardEvent::BoardImported).await
    }
}
