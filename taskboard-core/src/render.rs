/// Rendering contract: view model + gesture controller.
///
/// `render` projects a board and drag session into plain view records
/// a UI shell can draw from; `BoardController` owns the board and
/// session for one rendering session and translates gestures into the
/// state machine in `drag`. Styling and layout stay in the shell.
use serde::Serialize;

use crate::board::{Board, BoardError};
use crate::drag::{reconcile, DragSession, DropOutcome, DropTarget};
use crate::types::{ColumnId, TaskId};

/// One draggable card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: TaskId,
    /// True for the card currently being dragged; shells usually dim
    /// the in-place card while the overlay tracks the pointer.
    pub dragging: bool,
}

/// One drop-target region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    /// True while the pointer hovers this column during a drag.
    pub highlighted: bool,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    /// Floating card following the pointer; present only while Dragging.
    pub overlay: Option<TaskId>,
}

/// Project board + session into the view model.
pub fn render(board: &Board, session: &DragSession) -> BoardView {
    let columns = board
        .columns()
        .iter()
        .map(|col| ColumnView {
            id: col.id.clone(),
            title: col.title.clone(),
            highlighted: session.hovered() == Some(&col.id),
            cards: col
                .tasks
                .iter()
                .map(|task| CardView {
                    id: task.clone(),
                    dragging: session.active() == Some(task),
                })
                .collect(),
        })
        .collect();

    BoardView {
        columns,
        overlay: session.active().cloned(),
    }
}

/// Owns one board and its drag session for the lifetime of a rendering
/// session. All mutations run synchronously inside a single gesture
/// handler; the next gesture always sees the settled state.
#[derive(Debug)]
pub struct BoardController {
    board: Board,
    session: DragSession,
}

impl BoardController {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            session: DragSession::new(),
        }
    }

    /// Controller over the default seed board.
    pub fn seed() -> Self {
        Self::new(Board::seed())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn view(&self) -> BoardView {
        render(&self.board, &self.session)
    }

    pub fn drag_start(&mut self, task: TaskId) {
        self.session.start(task);
    }

    /// Track the column under the pointer. A task target resolves to
    /// the column holding it; no board mutation happens here.
    pub fn drag_over(&mut self, target: Option<&DropTarget>) {
        let column = match target {
            Some(DropTarget::Column(col)) => Some(col.clone()),
            Some(DropTarget::Task(task)) => self.board.column_of(task).map(|c| c.id.clone()),
            None => None,
        };
        self.session.hover(column);
    }

    /// Finish the gesture: reconcile the drop, then clear the session
    /// whatever happened.
    pub fn drag_end(&mut self, target: Option<DropTarget>) -> DropOutcome {
        let outcome = match self.session.active().cloned() {
            Some(active) => reconcile(&mut self.board, &active, target.as_ref()),
            None => DropOutcome::NoOp,
        };
        self.session.clear();
        outcome
    }

    /// Add-task gesture: append a freshly generated, board-local task
    /// id to a column. The id is a client-side token only and is never
    /// reconciled with server-side task ids.
    pub fn add_task(&mut self, column: &ColumnId) -> Result<TaskId, BoardError> {
        let task = TaskId::new(uuid::Uuid::new_v4().to_string());
        self.board.append(column, task.clone())?;
        Ok(task)
    }
}
