//! View-facing contract: read-only views of the board, the intents a view may
//! raise, and the per-instance UI flags a view keeps for itself.
//!
//! The flag structs are owned by whatever renders a card or a list header and
//! are dropped with it. They never reach the [`Board`].

use crate::domain::{
    board::Board,
    id::{ListId, TaskId},
    list::List,
    task::Task,
};

/// One column as a view sees it
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub list: &'a List,
    pub tasks: Vec<&'a Task>,
}

/// A single user action, mapped to exactly one board operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddList,
    RenameList { id: ListId, title: String },
    DeleteList(ListId),
    AddTask(ListId),
    RenameTask { id: TaskId, content: String },
    DeleteTask(TaskId),
}

impl Board {
    /// Lists in display order, each with its tasks in board order
    pub fn list_views(&self) -> Vec<ListView<'_>> {
        self.lists()
            .iter()
            .map(|list| ListView {
                list,
                tasks: self.tasks_in(&list.id).collect(),
            })
            .collect()
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::AddList => {
                self.add_list();
            }
            Intent::RenameList { id, title } => self.rename_list(&id, title),
            Intent::DeleteList(id) => self.delete_list(&id),
            Intent::AddTask(list_id) => {
                self.add_task(&list_id);
            }
            Intent::RenameTask { id, content } => self.rename_task(&id, content),
            Intent::DeleteTask(id) => self.delete_task(&id),
        }
    }
}

/// Keys a view reacts to while a field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter { shift: bool },
    Escape,
    Other,
}

impl Key {
    /// Escape, or Enter without Shift (Shift+Enter inserts a newline)
    pub fn ends_editing(self) -> bool {
        matches!(self, Key::Escape | Key::Enter { shift: false })
    }
}

/// Local state of a rendered task card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCardState {
    editing: bool,
    mouse_over: bool,
}

impl TaskCardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_hovered(&self) -> bool {
        self.mouse_over
    }

    /// Double-click handler; hover flips together with editing
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
        self.mouse_over = !self.mouse_over;
    }

    pub fn pointer_enter(&mut self) {
        self.mouse_over = true;
    }

    pub fn pointer_leave(&mut self) {
        self.mouse_over = false;
    }

    pub fn blur(&mut self) {
        if self.editing {
            self.toggle_editing();
        }
    }

    pub fn key(&mut self, key: Key) {
        if self.editing && key.ends_editing() {
            self.toggle_editing();
        }
    }

    pub fn shows_delete_button(&self) -> bool {
        self.mouse_over && !self.editing
    }

    /// Content change from the editor; ignored unless editing
    pub fn edit(&self, task: &Task, content: impl Into<String>) -> Option<Intent> {
        self.editing.then(|| Intent::RenameTask {
            id: task.id.clone(),
            content: content.into(),
        })
    }

    /// Click on the delete button, which only exists while hovered
    pub fn delete(&self, task: &Task) -> Option<Intent> {
        self.shows_delete_button()
            .then(|| Intent::DeleteTask(task.id.clone()))
    }
}

/// Local state of a rendered list header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHeaderState {
    editing: bool,
}

impl ListHeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn blur(&mut self) {
        self.editing = false;
    }

    pub fn key(&mut self, key: Key) {
        if key.ends_editing() {
            self.editing = false;
        }
    }

    pub fn edit(&self, list: &List, title: impl Into<String>) -> Option<Intent> {
        self.editing.then(|| Intent::RenameList {
            id: list.id.clone(),
            title: title.into(),
        })
    }

    pub fn delete(&self, list: &List) -> Intent {
        Intent::DeleteList(list.id.clone())
    }
}
