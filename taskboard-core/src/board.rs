/// Board state model: the column -> ordered-task-sequence mapping.
///
/// Single-ownership invariant: every task id on the board appears in
/// exactly one column's sequence, with no duplicates. Both mutation
/// contracts (`move_task`, `append`) validate before touching any
/// column, so a failed call leaves the board untouched and intermediate
/// states are never observable.
use serde::{Deserialize, Serialize};

use crate::types::{Column, ColumnId, TaskId};

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("Task not found on board: {0}")]
    TaskNotFound(TaskId),

    #[error("Task already on board: {0}")]
    DuplicateTask(TaskId),

    #[error("Duplicate column id: {0}")]
    DuplicateColumn(ColumnId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Build a board from explicit columns, rejecting duplicate column
    /// ids and task ids that appear more than once across columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        let mut seen_columns: Vec<&ColumnId> = Vec::new();
        let mut seen_tasks: Vec<&TaskId> = Vec::new();
        for col in &columns {
            if seen_columns.contains(&&col.id) {
                return Err(BoardError::DuplicateColumn(col.id.clone()));
            }
            seen_columns.push(&col.id);
            for task in &col.tasks {
                if seen_tasks.contains(&task) {
                    return Err(BoardError::DuplicateTask(task.clone()));
                }
                seen_tasks.push(task);
            }
        }
        Ok(Self { columns })
    }

    /// The default three-stage board a fresh session starts from.
    pub fn seed() -> Self {
        Self {
            columns: vec![
                Column::new("todo", "To Do"),
                Column::new("in-progress", "In Progress"),
                Column::new("done", "Done"),
            ],
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// The column currently holding a task, if any.
    pub fn column_of(&self, task: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.contains(task))
    }

    pub fn contains(&self, task: &TaskId) -> bool {
        self.column_of(task).is_some()
    }

    /// Total task count across all columns.
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Append a task id to the end of a column's sequence.
    ///
    /// Rejects ids already present anywhere on the board -- accepting
    /// one would break single ownership.
    pub fn append(&mut self, column: &ColumnId, task: TaskId) -> Result<(), BoardError> {
        if self.contains(&task) {
            return Err(BoardError::DuplicateTask(task));
        }
        let col = self
            .columns
            .iter_mut()
            .find(|c| &c.id == column)
            .ok_or_else(|| BoardError::ColumnNotFound(column.clone()))?;
        col.tasks.push(task);
        Ok(())
    }

    /// Move a task to `dest`, inserting at `at` (clamped to the
    /// sequence length) or appending when `at` is `None`.
    ///
    /// The task is removed from its current column and inserted into
    /// the destination in one call; both ends are resolved before any
    /// mutation happens.
    pub fn move_task(
        &mut self,
        task: &TaskId,
        dest: &ColumnId,
        at: Option<usize>,
    ) -> Result<(), BoardError> {
        let source_idx = self
            .columns
            .iter()
            .position(|c| c.contains(task))
            .ok_or_else(|| BoardError::TaskNotFound(task.clone()))?;
        let dest_idx = self
            .columns
            .iter()
            .position(|c| &c.id == dest)
            .ok_or_else(|| BoardError::ColumnNotFound(dest.clone()))?;

        let source = &mut self.columns[source_idx];
        let pos = source
            .position_of(task)
            .ok_or_else(|| BoardError::TaskNotFound(task.clone()))?;
        let moved = source.tasks.remove(pos);

        let dest_col = &mut self.columns[dest_idx];
        match at {
            Some(i) => {
                let i = i.min(dest_col.tasks.len());
                dest_col.tasks.insert(i, moved);
            }
            None => dest_col.tasks.push(moved),
        }
        Ok(())
    }
}
