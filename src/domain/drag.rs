//! Drag gesture handling.
//!
//! The drag coordinator reports `Start`, any number of `Over`, then `End` (or
//! `Cancel`) for one gesture. [`BoardController`] records the active item on
//! start, turns task drag-over events into board reorders, and relocates lists
//! on drag end.

use crate::domain::{
    board::Board,
    id::{ListId, TaskId},
    list::List,
    task::Task,
};
use crate::presentation::Intent;
use tracing::{debug, trace, warn};

/// Reference to a draggable entity by id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragRef {
    List(ListId),
    Task(TaskId),
}

/// The entity under the pointer
pub type DropTarget = DragRef;

/// Snapshot of the entity being dragged, used to render the floating overlay
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveItem {
    List(List),
    Task(Task),
}

impl ActiveItem {
    pub fn drag_ref(&self) -> DragRef {
        match self {
            Self::List(list) => DragRef::List(list.id.clone()),
            Self::Task(task) => DragRef::Task(task.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    pub active: ActiveItem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOver {
    pub active: DragRef,
    pub over: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: DragRef,
    pub over: Option<DropTarget>,
}

/// Events emitted by the drag coordinator
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Start(DragStart),
    Over(DragOver),
    End(DragEnd),
    Cancel,
}

/// Gesture phase
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveItem),
}

impl DragState {
    fn is_active(&self, item: &DragRef) -> bool {
        matches!(self, Self::Dragging(active) if &active.drag_ref() == item)
    }
}

/// Owns the board and the current gesture; the single mutation surface for
/// views and the drag coordinator.
#[derive(Debug, Clone, Default)]
pub struct BoardController {
    board: Board,
    drag: DragState,
}

impl BoardController {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragState::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// List being dragged, if any
    pub fn active_list(&self) -> Option<&List> {
        match &self.drag {
            DragState::Dragging(ActiveItem::List(list)) => Some(list),
            _ => None,
        }
    }

    /// Task being dragged, if any
    pub fn active_task(&self) -> Option<&Task> {
        match &self.drag {
            DragState::Dragging(ActiveItem::Task(task)) => Some(task),
            _ => None,
        }
    }

    /// Applies one view intent to the board
    pub fn apply(&mut self, intent: Intent) {
        self.board.apply(intent);
    }

    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start(start) => self.on_drag_start(start),
            DragEvent::Over(over) => self.on_drag_over(over),
            DragEvent::End(end) => self.on_drag_end(end),
            DragEvent::Cancel => {
                debug!("Drag cancelled");
                self.drag = DragState::Idle;
            }
        }
    }

    fn on_drag_start(&mut self, start: DragStart) {
        if let DragState::Dragging(current) = &self.drag {
            warn!(
                active = ?current.drag_ref(),
                ignored = ?start.active.drag_ref(),
                "Drag start while another drag is active ignored"
            );
            return;
        }

        debug!(active = ?start.active.drag_ref(), "Drag started");
        self.drag = DragState::Dragging(start.active);
    }

    fn on_drag_over(&mut self, event: DragOver) {
        if !self.drag.is_active(&event.active) {
            trace!(active = ?event.active, "Drag over for inactive item ignored");
            return;
        }

        match (event.active, event.over) {
            (DragRef::Task(active_id), Some(over)) => {
                self.board.reorder_tasks_on_drag_over(&active_id, &over);
            }
            (DragRef::Task(_), None) => {}
            // Lists only move on drag end
            (DragRef::List(_), _) => {}
        }
    }

    fn on_drag_end(&mut self, event: DragEnd) {
        let was_active = self.drag.is_active(&event.active);
        self.drag = DragState::Idle;

        if !was_active {
            trace!(active = ?event.active, "Drag end for inactive item");
            return;
        }

        if let (DragRef::List(active_id), Some(DragRef::List(over_id))) = (event.active, event.over)
        {
            self.board.reorder_lists(&active_id, &over_id);
        }
        debug!("Drag ended");
    }
}
