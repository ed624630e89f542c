use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{ListId, TaskId};

/// A card on the board.
///
/// `list_id` is a non-owning reference; lists keep no reverse collection and
/// membership is computed by filtering the board's task sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub list_id: ListId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task inside the given list
    pub fn new(id: TaskId, list_id: ListId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            list_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Moves the task to another list without touching its position
    pub fn reparent(&mut self, list_id: ListId) {
        if self.list_id != list_id {
            self.list_id = list_id;
            self.updated_at = Utc::now();
        }
    }

    pub fn belongs_to(&self, list_id: &ListId) -> bool {
        &self.list_id == list_id
    }
}
