pub mod board;
pub mod column;
pub mod suggestions;
pub mod task;
pub mod theme;

pub use board::{Board, BoardStats};
pub use column::{default_columns, is_default_column, Column, ColumnId, TODO_COLUMN};
pub use suggestions::{draft_from_suggestion, suggestions, SuggestionCategory};
pub use task::{Priority, Task, TaskDraft, TaskId, TaskPatch};
pub use theme::Theme;
