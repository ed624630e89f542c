//! # Kanban Core
//!
//! Board state and drag-reorder logic for a single-user kanban board.
//!
//! The crate owns the ordered lists and tasks of one board and turns the
//! start/over/end events of a drag gesture into list reorders, task moves and
//! task reparenting. Rendering, styling and pointer sensing stay outside; views
//! read the board and raise [`Intent`]s.

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-export commonly used types
pub use config::{ConfigSource, FileConfigSource};
pub use domain::{
    board::{Board, BoardConfig},
    drag::{
        ActiveItem, BoardController, DragEnd, DragEvent, DragOver, DragRef, DragStart, DragState,
    },
    id::{IdStrategy, ListId, TaskId},
    list::List,
    task::Task,
};
pub use error::{KanbanError, Result};
pub use presentation::{Intent, Key, ListHeaderState, ListView, TaskCardState};
