//! Taskboard core: the client-side kanban board model.
//!
//! Everything in this crate is pure, synchronous state transformation.
//! The board (column -> ordered task sequence) lives here, together with
//! the drag-gesture state machine that reconciles drops into board
//! mutations and the view-model contract a rendering shell consumes.
//! Nothing here talks to the network or the task store; the board is a
//! local scratchpad owned by a single rendering session.

pub mod board;
pub mod drag;
pub mod render;
pub mod types;
