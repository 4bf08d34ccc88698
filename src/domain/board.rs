use chrono::Local;
use serde::Serialize;

use crate::{
    domain::column::{default_columns, is_default_column, Column, ColumnId, TODO_COLUMN},
    domain::task::{Task, TaskDraft, TaskId, TaskPatch},
    error::{KanbanError, Result},
};

/// Counts displayed in the board header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total_tasks: usize,
    pub completed_today: usize,
}

/// In-memory kanban board state: tasks, columns and the task id counter.
///
/// All mutations validate their inputs and keep two invariants: every task
/// references an existing column, and `next_task_id` is strictly greater
/// than every assigned id.
#[derive(Debug, Clone)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub columns: Vec<Column>,
    pub next_task_id: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            columns: default_columns(),
            next_task_id: 1,
        }
    }
}

impl Board {
    /// Restores a board from persisted parts. A stale counter is clamped up
    /// so newly created tasks can never collide with existing ids.
    pub fn from_parts(tasks: Vec<Task>, columns: Vec<Column>, next_task_id: u64) -> Self {
        let max_id = tasks.iter().map(|t| t.id.value()).max().unwrap_or(0);
        Self {
            tasks,
            columns,
            next_task_id: next_task_id.max(max_id + 1),
        }
    }

    /// Builds a board from imported tasks and columns, recomputing the
    /// counter as `max(task ids) + 1`.
    pub fn from_import(tasks: Vec<Task>, columns: Vec<Column>) -> Self {
        let max_id = tasks.iter().map(|t| t.id.value()).max().unwrap_or(0);
        Self {
            tasks,
            columns,
            next_task_id: max_id + 1,
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn has_column(&self, id: &ColumnId) -> bool {
        self.column(id).is_some()
    }

    pub fn tasks_in_column(&self, id: &ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| &t.column_id == id).collect()
    }

    /// Creates a task from a draft and assigns it the next id
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<Task> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(KanbanError::EmptyTitle);
        }

        let column_id = draft.column_id.unwrap_or_else(|| ColumnId::from(TODO_COLUMN));
        if !self.has_column(&column_id) {
            return Err(KanbanError::ColumnNotFound(column_id.to_string()));
        }

        let description = draft
            .description
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let task = Task::new(
            TaskId::new(self.next_task_id),
            title,
            description,
            draft.priority.unwrap_or_default(),
            column_id,
        );
        self.next_task_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Merges a patch into an existing task
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(KanbanError::EmptyTitle);
            }
        }
        if let Some(column_id) = &patch.column_id {
            if !self.has_column(column_id) {
                return Err(KanbanError::ColumnNotFound(column_id.to_string()));
            }
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(KanbanError::TaskNotFound(id))?;

        if let Some(title) = patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            task.description = description.trim().to_string();
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(column_id) = patch.column_id {
            task.column_id = column_id;
            if task.column_id.as_str() == "done" {
                task.mark_completed();
            } else {
                task.mark_incomplete();
            }
        }

        Ok(task.clone())
    }

    /// Removes a task, returning the removed record
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(KanbanError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Moves a task to another column. An unknown destination is rejected
    /// and leaves the task where it was.
    pub fn move_task(&mut self, id: TaskId, column_id: ColumnId) -> Result<Task> {
        self.update_task(id, TaskPatch::default().column_id(column_id))
    }

    /// Creates a column, deriving its id from the name
    pub fn create_column(&mut self, name: &str, color: Option<&str>) -> Result<Column> {
        if name.trim().is_empty() {
            return Err(KanbanError::EmptyTitle);
        }

        let column = Column::new(name, color);
        if self.has_column(&column.id) {
            return Err(KanbanError::ColumnExists(column.id.to_string()));
        }

        self.columns.push(column.clone());
        Ok(column)
    }

    /// Removes a column, reassigning its tasks to the to-do column first.
    /// The five built-in columns cannot be removed.
    pub fn delete_column(&mut self, id: &ColumnId) -> Result<Column> {
        if is_default_column(id) {
            return Err(KanbanError::ProtectedColumn(id.to_string()));
        }

        let index = self
            .columns
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| KanbanError::ColumnNotFound(id.to_string()))?;

        for task in self.tasks.iter_mut().filter(|t| &t.column_id == id) {
            task.column_id = ColumnId::from(TODO_COLUMN);
        }

        Ok(self.columns.remove(index))
    }

    /// Recomputes the header counters: total tasks, and tasks whose
    /// completion timestamp falls on the current local calendar day.
    pub fn stats(&self) -> BoardStats {
        let today = Local::now().date_naive();
        BoardStats {
            total_tasks: self.tasks.len(),
            completed_today: self.tasks.iter().filter(|t| t.completed_on(today)).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    #[test]
    fn test_new_board_has_default_columns() {
        let board = Board::default();
        assert_eq!(board.next_task_id, 1);
        assert!(board.tasks.is_empty());
        assert_eq!(board.columns.len(), 5);
    }

    #[test]
    fn test_create_task_defaults() {
        let mut board = Board::default();

        let task = board.create_task(TaskDraft::new("Write spec")).unwrap();
        assert_eq!(task.id, TaskId::new(1));
        assert_eq!(task.title, "Write spec");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.column_id.as_str(), "todo");
        assert!(task.completed_at.is_none());

        let second = board.create_task(TaskDraft::new("Another")).unwrap();
        assert_eq!(second.id, TaskId::new(2));
    }

    #[test]
    fn test_create_task_ids_strictly_increase() {
        let mut board = Board::default();
        let mut last = 0;
        for n in 0..10 {
            let task = board.create_task(TaskDraft::new(format!("Task {}", n))).unwrap();
            assert!(task.id.value() > last);
            last = task.id.value();
        }
    }

    #[test]
    fn test_create_task_trims_title() {
        let mut board = Board::default();
        let task = board.create_task(TaskDraft::new("  padded  ")).unwrap();
        assert_eq!(task.title, "padded");
    }

    #[test]
    fn test_create_task_rejects_blank_title() {
        let mut board = Board::default();
        assert!(matches!(
            board.create_task(TaskDraft::new("   ")),
            Err(KanbanError::EmptyTitle)
        ));
        assert!(board.tasks.is_empty());
        assert_eq!(board.next_task_id, 1);
    }

    #[test]
    fn test_create_task_rejects_unknown_column() {
        let mut board = Board::default();
        let draft = TaskDraft::new("Task").in_column(ColumnId::from("nowhere"));
        assert!(matches!(
            board.create_task(draft),
            Err(KanbanError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_update_task_merges_fields() {
        let mut board = Board::default();
        let task = board.create_task(TaskDraft::new("Original")).unwrap();

        let updated = board
            .update_task(
                task.id,
                TaskPatch::default().title("Renamed").priority(Priority::High),
            )
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.column_id.as_str(), "todo");
    }

    #[test]
    fn test_update_task_not_found() {
        let mut board = Board::default();
        assert!(matches!(
            board.update_task(TaskId::new(99), TaskPatch::default().title("x")),
            Err(KanbanError::TaskNotFound(_))
        ));
    }

    #[test]
    fn test_delete_task() {
        let mut board = Board::default();
        let task = board.create_task(TaskDraft::new("Doomed")).unwrap();

        let removed = board.delete_task(task.id).unwrap();
        assert_eq!(removed.id, task.id);
        assert!(board.tasks.is_empty());

        assert!(matches!(
            board.delete_task(task.id),
            Err(KanbanError::TaskNotFound(_))
        ));
    }

    #[test]
    fn test_move_task_to_done_stamps_completion() {
        let mut board = Board::default();
        let task = board.create_task(TaskDraft::new("Finish me")).unwrap();

        let moved = board.move_task(task.id, ColumnId::from("done")).unwrap();
        assert_eq!(moved.column_id.as_str(), "done");
        assert!(moved.completed_at.is_some());

        let back = board.move_task(task.id, ColumnId::from("todo")).unwrap();
        assert!(back.completed_at.is_none());
    }

    #[test]
    fn test_move_task_unknown_destination_is_rejected() {
        let mut board = Board::default();
        let task = board.create_task(TaskDraft::new("Stay put")).unwrap();

        assert!(matches!(
            board.move_task(task.id, ColumnId::from("limbo")),
            Err(KanbanError::ColumnNotFound(_))
        ));
        assert_eq!(board.task(task.id).unwrap().column_id.as_str(), "todo");
    }

    #[test]
    fn test_create_column_derives_id() {
        let mut board = Board::default();
        let column = board.create_column("Blocked", Some("#ff0000")).unwrap();
        assert_eq!(column.id.as_str(), "blocked");
        assert_eq!(board.columns.len(), 6);
    }

    #[test]
    fn test_create_column_rejects_collision() {
        let mut board = Board::default();
        board.create_column("Blocked", None).unwrap();
        assert!(matches!(
            board.create_column("blocked", None),
            Err(KanbanError::ColumnExists(_))
        ));
        // Collides with a default column id too
        assert!(matches!(
            board.create_column("Done", None),
            Err(KanbanError::ColumnExists(_))
        ));
    }

    #[test]
    fn test_delete_column_rejects_defaults() {
        let mut board = Board::default();
        for id in ["todo", "inprogress", "review", "onhold", "done"] {
            assert!(matches!(
                board.delete_column(&ColumnId::from(id)),
                Err(KanbanError::ProtectedColumn(_))
            ));
        }
        assert_eq!(board.columns.len(), 5);
    }

    #[test]
    fn test_delete_column_reassigns_tasks_to_todo() {
        let mut board = Board::default();
        board.create_column("Blocked", None).unwrap();
        let task = board
            .create_task(TaskDraft::new("Stuck").in_column(ColumnId::from("blocked")))
            .unwrap();

        board.delete_column(&ColumnId::from("blocked")).unwrap();

        assert_eq!(board.columns.len(), 5);
        assert_eq!(board.task(task.id).unwrap().column_id.as_str(), "todo");
        assert!(board
            .tasks
            .iter()
            .all(|t| board.has_column(&t.column_id)));
    }

    #[test]
    fn test_delete_column_not_found() {
        let mut board = Board::default();
        assert!(matches!(
            board.delete_column(&ColumnId::from("nothing")),
            Err(KanbanError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_stats_counts_completed_today() {
        let mut board = Board::default();
        let a = board.create_task(TaskDraft::new("A")).unwrap();
        board.create_task(TaskDraft::new("B")).unwrap();

        board.move_task(a.id, ColumnId::from("done")).unwrap();

        let stats = board.stats();
        assert_eq!(stats.total_tasks, 2);
        assert_eq!(stats.completed_today, 1);
    }

    #[test]
    fn test_from_parts_clamps_stale_counter() {
        let mut source = Board::default();
        for n in 0..3 {
            source.create_task(TaskDraft::new(format!("Task {}", n))).unwrap();
        }

        let board = Board::from_parts(source.tasks.clone(), source.columns.clone(), 1);
        assert_eq!(board.next_task_id, 4);
    }

    #[test]
    fn test_from_import_recomputes_counter() {
        let mut source = Board::default();
        source.create_task(TaskDraft::new("Only")).unwrap();

        let board = Board::from_import(source.tasks.clone(), source.columns.clone());
        assert_eq!(board.next_task_id, 2);

        let empty = Board::from_import(Vec::new(), default_columns());
        assert_eq!(empty.next_task_id, 1);
    }

    #[test]
    fn test_tasks_in_column() {
        let mut board = Board::default();
        board.create_task(TaskDraft::new("A")).unwrap();
        let b = board.create_task(TaskDraft::new("B")).unwrap();
        board.move_task(b.id, ColumnId::from("review")).unwrap();

        assert_eq!(board.tasks_in_column(&ColumnId::from("todo")).len(), 1);
        assert_eq!(board.tasks_in_column(&ColumnId::from("review")).len(), 1);
        assert!(board.tasks_in_column(&ColumnId::from("done")).is_empty());
    }
}
