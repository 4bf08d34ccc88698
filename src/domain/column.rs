use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the default column that orphaned tasks fall back to.
pub const TODO_COLUMN: &str = "todo";

/// Icon assigned to user-created columns
const CUSTOM_COLUMN_ICON: &str = "bi-columns";

/// Default color for columns created without an explicit one
const DEFAULT_COLUMN_COLOR: &str = "#00ffff";

/// Identifier for a column, derived from its display name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Derives a column id from a display name: lowercased, with runs of
    /// whitespace collapsed to single hyphens.
    pub fn derive(name: &str) -> Self {
        let mut id = String::with_capacity(name.len());
        let mut in_gap = false;
        for ch in name.trim().chars() {
            if ch.is_whitespace() {
                in_gap = true;
            } else {
                if in_gap {
                    id.push('-');
                    in_gap = false;
                }
                for lower in ch.to_lowercase() {
                    id.push(lower);
                }
            }
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A workflow lane on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Column {
    /// Creates a user-defined column, deriving its id from the name
    pub fn new(name: &str, color: Option<&str>) -> Self {
        Self {
            id: ColumnId::derive(name),
            name: name.trim().to_string(),
            color: color.unwrap_or(DEFAULT_COLUMN_COLOR).to_string(),
            icon: CUSTOM_COLUMN_ICON.to_string(),
        }
    }

    fn builtin(id: &str, name: &str, color: &str, icon: &str) -> Self {
        Self {
            id: ColumnId::from(id),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The five built-in columns every board starts with
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::builtin(TODO_COLUMN, "To Do", "#00ffff", "bi-list-check"),
        Column::builtin("inprogress", "In Progress", "#ffff00", "bi-lightning-charge"),
        Column::builtin("review", "Review", "#ff00ff", "bi-eye"),
        Column::builtin("onhold", "On Hold", "#ff5500", "bi-pause"),
        Column::builtin("done", "Done", "#00ff00", "bi-check-circle"),
    ]
}

/// Checks whether an id belongs to the protected default set
pub fn is_default_column(id: &ColumnId) -> bool {
    matches!(
        id.as_str(),
        TODO_COLUMN | "inprogress" | "review" | "onhold" | "done"
    )
}
