/// Drag-gesture state machine and drop reconciliation.
///
/// A gesture runs Idle -> Dragging -> Idle:
/// - drag-start records the dragged task id
/// - drag-over records the hovered column (highlight only, never
///   mutates the board)
/// - drag-end reconciles the drop into a board mutation, then clears
///   the session unconditionally, even when reconciliation no-ops
///
/// Reconciliation rules, given active task A and drop target O:
/// - No target, or O is A itself -> no mutation
/// - A is not on the board -> no-op (session and board already
///   desynchronized; not actionable, so not an error)
/// - O names a column -> that column is the destination
/// - O names a task -> the column holding it is the destination
/// - Same column -> reinsert A at O's position in the post-removal
///   sequence (pure reorder)
/// - Different column -> insert at O's position, or append when O is
///   the column itself (covers drops on an empty column)
use crate::board::Board;
use crate::types::{ColumnId, TaskId};

/// What the pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over another task's card.
    Task(TaskId),
    /// Released over a column container (typically an empty column).
    Column(ColumnId),
}

/// Transient per-gesture state. One session per board owner.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<TaskId>,
    hovered: Option<ColumnId>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter Dragging: remember which task left its slot.
    pub fn start(&mut self, task: TaskId) {
        self.active = Some(task);
        self.hovered = None;
    }

    /// Update the hovered column while Dragging. Ignored when Idle.
    pub fn hover(&mut self, column: Option<ColumnId>) {
        if self.active.is_some() {
            self.hovered = column;
        }
    }

    /// Back to Idle. Always called at drag-end, whatever the outcome.
    pub fn clear(&mut self) {
        self.active = None;
        self.hovered = None;
    }

    pub fn active(&self) -> Option<&TaskId> {
        self.active.as_ref()
    }

    pub fn hovered(&self) -> Option<&ColumnId> {
        self.hovered.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }
}

/// Result of reconciling a completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task changed column and/or position.
    Moved { from: ColumnId, to: ColumnId },
    /// Nothing changed: dropped on itself, outside any target, or the
    /// gesture could not be resolved against the current board.
    NoOp,
}

/// Reconcile a drop into a board mutation.
///
/// Pure with respect to everything but `board`; either fully applies
/// the move or leaves the board byte-for-byte unchanged.
pub fn reconcile(board: &mut Board, active: &TaskId, target: Option<&DropTarget>) -> DropOutcome {
    let Some(target) = target else {
        return DropOutcome::NoOp;
    };
    if matches!(target, DropTarget::Task(o) if o == active) {
        return DropOutcome::NoOp;
    }

    let Some(source) = board.column_of(active).map(|c| c.id.clone()) else {
        log::debug!(
            "[taskboard.drag] Active task {} not on board, dropping gesture",
            active
        );
        return DropOutcome::NoOp;
    };

    let dest = match target {
        DropTarget::Column(col) => {
            if board.column(col).is_none() {
                log::debug!("[taskboard.drag] Drop target column {} unknown", col);
                return DropOutcome::NoOp;
            }
            col.clone()
        }
        DropTarget::Task(o) => match board.column_of(o) {
            Some(col) => col.id.clone(),
            None => {
                log::debug!("[taskboard.drag] Drop target task {} not on board", o);
                return DropOutcome::NoOp;
            }
        },
    };

    // Insertion point: O's index in the destination as it will look
    // after A is removed. Removing A only shifts indices when both live
    // in the same column ahead of O.
    let at = match target {
        DropTarget::Column(_) => None,
        DropTarget::Task(o) => {
            let o_in_dest = board.column(&dest).and_then(|c| c.position_of(o));
            let Some(o_pos) = o_in_dest else {
                return DropOutcome::NoOp;
            };
            if dest == source {
                let a_pos = board
                    .column(&source)
                    .and_then(|c| c.position_of(active))
                    .unwrap_or(0);
                Some(if a_pos < o_pos { o_pos - 1 } else { o_pos })
            } else {
                Some(o_pos)
            }
        }
    };

    if let Err(e) = board.move_task(active, &dest, at) {
        // Both ends resolved above, so this should be unreachable.
        log::debug!("[taskboard.drag] Move rejected: {}", e);
        return DropOutcome::NoOp;
    }

    DropOutcome::Moved { from: source, to: dest }
}
