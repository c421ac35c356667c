use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a task on the board.
///
/// Distinct from the task's display text: two cards may share a title
/// without sharing an identity. Board-local ids generated by the
/// add-task gesture are never reconciled with server-side task ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identity of a column, distinct from its display title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named workflow stage holding an ordered sequence of task ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<TaskId>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    pub fn contains(&self, task: &TaskId) -> bool {
        self.tasks.iter().any(|t| t == task)
    }

    /// Position of a task within this column's sequence.
    pub fn position_of(&self, task: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t == task)
    }
}
