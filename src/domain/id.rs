use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::KanbanError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            const PREFIX: &'static str = $prefix;

            /// Creates an id from a counter value
            pub fn new(counter: u64) -> Self {
                Self(format!("{}{}", Self::PREFIX, counter))
            }

            /// Creates a collision-resistant random id
            pub fn random() -> Self {
                Self(format!("{}{}", Self::PREFIX, Uuid::new_v4()))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = KanbanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.strip_prefix(Self::PREFIX) {
                    Some(rest) if !rest.is_empty() => Ok(Self::from(s)),
                    _ => Err(KanbanError::$err(s.to_string())),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a list (e.g., list-1, list-7)
    ListId,
    "list-",
    InvalidListId
);

entity_id!(
    /// Unique identifier for a task (e.g., task-2, task-13)
    TaskId,
    "task-",
    InvalidTaskId
);

/// How new identifiers are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Monotonic counter shared by lists and tasks
    #[default]
    Sequential,
    /// UUID v4
    Random,
}

/// Source of identifiers for new lists and tasks.
///
/// The sequential counter is shared between both entity kinds and never
/// rewinds, so ids of deleted entities are not handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, next: 1 }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Generates the next list ID
    pub fn next_list_id(&mut self) -> ListId {
        match self.strategy {
            IdStrategy::Sequential => ListId::new(self.bump()),
            IdStrategy::Random => ListId::random(),
        }
    }

    /// Generates the next task ID
    pub fn next_task_id(&mut self) -> TaskId {
        match self.strategy {
            IdStrategy::Sequential => TaskId::new(self.bump()),
            IdStrategy::Random => TaskId::random(),
        }
    }

    fn bump(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
