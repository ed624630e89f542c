use crate::domain::{
    drag::DropTarget,
    id::{IdGenerator, IdStrategy, ListId, TaskId},
    list::List,
    reorder::{array_move, index_of},
    task::Task,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Title prefix for new lists, rendered as "<prefix> N"
    pub list_title_prefix: String,
    /// Content prefix for new tasks, rendered as "<prefix> N"
    pub task_content_prefix: String,
    pub id_strategy: IdStrategy,
    /// Lists created when the board is built
    pub initial_lists: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban".to_string(),
            list_title_prefix: "List".to_string(),
            task_content_prefix: "Task".to_string(),
            id_strategy: IdStrategy::Sequential,
            initial_lists: Vec::new(),
        }
    }
}

/// Kanban board state.
///
/// Owns the ordered list and task sequences. Every mutation goes through the
/// methods below; an id that cannot be found turns the call into a no-op.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    lists: Vec<List>,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let titles = config.initial_lists.clone();
        Self::with_lists(config, titles)
    }

    /// Builds a board whose lists carry the given titles, in order
    pub fn with_lists<I, S>(config: BoardConfig, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids = IdGenerator::new(config.id_strategy);
        let lists = titles
            .into_iter()
            .map(|title| List::new(ids.next_list_id(), title.into()))
            .collect();

        Self {
            config,
            lists,
            tasks: Vec::new(),
            ids,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.tasks.is_empty()
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// List ids in display order
    pub fn list_ids(&self) -> Vec<ListId> {
        self.lists.iter().map(|list| list.id.clone()).collect()
    }

    /// Tasks of one list, in board order
    pub fn tasks_in(&self, list_id: &ListId) -> impl Iterator<Item = &Task> + '_ {
        let list_id = list_id.clone();
        self.tasks.iter().filter(move |task| task.belongs_to(&list_id))
    }

    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        index_of(&self.lists, |list| &list.id == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        index_of(&self.tasks, |task| &task.id == id)
    }

    /// Appends a list titled "<prefix> N", N being the new list count
    pub fn add_list(&mut self) -> ListId {
        let id = self.ids.next_list_id();
        let title = format!("{} {}", self.config.list_title_prefix, self.lists.len() + 1);
        debug!(list_id = %id, title = %title, "Adding list");
        self.lists.push(List::new(id.clone(), title));
        id
    }

    pub fn rename_list(&mut self, id: &ListId, title: impl Into<String>) {
        match self.lists.iter_mut().find(|list| &list.id == id) {
            Some(list) => {
                list.set_title(title.into());
                debug!(list_id = %id, "Renamed list");
            }
            None => trace!(list_id = %id, "Rename of unknown list ignored"),
        }
    }

    /// Removes the list and every task that belongs to it
    pub fn delete_list(&mut self, id: &ListId) {
        let Some(index) = self.list_index(id) else {
            trace!(list_id = %id, "Delete of unknown list ignored");
            return;
        };

        self.lists.remove(index);
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.belongs_to(id));
        debug!(
            list_id = %id,
            removed_tasks = before - self.tasks.len(),
            "Deleted list"
        );
    }

    /// Appends a task to the end of the task sequence.
    ///
    /// Returns `None` without creating anything when `list_id` does not name
    /// a live list, so no task ever points at a missing list.
    pub fn add_task(&mut self, list_id: &ListId) -> Option<TaskId> {
        if self.list(list_id).is_none() {
            trace!(list_id = %list_id, "Add task to unknown list ignored");
            return None;
        }

        let id = self.ids.next_task_id();
        let content = format!(
            "{} {}",
            self.config.task_content_prefix,
            self.tasks_in(list_id).count() + 1
        );
        debug!(task_id = %id, list_id = %list_id, "Adding task");
        self.tasks.push(Task::new(id.clone(), list_id.clone(), content));
        Some(id)
    }

    pub fn rename_task(&mut self, id: &TaskId, content: impl Into<String>) {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.set_content(content.into());
                debug!(task_id = %id, "Updated task content");
            }
            None => trace!(task_id = %id, "Rename of unknown task ignored"),
        }
    }

    pub fn delete_task(&mut self, id: &TaskId) {
        match self.task_index(id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(task_id = %id, "Deleted task");
            }
            None => trace!(task_id = %id, "Delete of unknown task ignored"),
        }
    }

    /// Moves the active list to the index currently held by `over_id`
    pub fn reorder_lists(&mut self, active_id: &ListId, over_id: &ListId) {
        if active_id == over_id {
            return;
        }

        let (Some(old_index), Some(new_index)) =
            (self.list_index(active_id), self.list_index(over_id))
        else {
            trace!(active = %active_id, over = %over_id, "List reorder with unknown id ignored");
            return;
        };

        array_move(&mut self.lists, old_index, new_index);
        debug!(list_id = %active_id, from = old_index, to = new_index, "Reordered list");
    }

    /// Applies one drag-over step for a dragged task.
    ///
    /// Over another task the active task first takes the target's list, then
    /// moves to the target's index. Over a list only the owning list changes;
    /// the position in the sequence stays where it is.
    pub fn reorder_tasks_on_drag_over(&mut self, active_id: &TaskId, over: &DropTarget) {
        let Some(old_index) = self.task_index(active_id) else {
            trace!(task_id = %active_id, "Drag over for unknown task ignored");
            return;
        };

        match over {
            DropTarget::Task(over_id) => {
                if over_id == active_id {
                    return;
                }
                let Some(new_index) = self.task_index(over_id) else {
                    trace!(over = %over_id, "Drag over unknown task ignored");
                    return;
                };

                let target_list = self.tasks[new_index].list_id.clone();
                self.tasks[old_index].reparent(target_list);
                array_move(&mut self.tasks, old_index, new_index);
                debug!(task_id = %active_id, from = old_index, to = new_index, "Moved task over task");
            }
            DropTarget::List(list_id) => {
                if self.list(list_id).is_none() {
                    trace!(over = %list_id, "Drag over unknown list ignored");
                    return;
                }
                self.tasks[old_index].reparent(list_id.clone());
                debug!(task_id = %active_id, list_id = %list_id, "Moved task over list");
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn titles(board: &Board) -> Vec<&str> {
        board.lists().iter().map(|list| list.title.as_str()).collect()
    }

    fn board_with(lists: &[&str]) -> Board {
        Board::with_lists(BoardConfig::default(), lists.iter().copied())
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.is_empty());
        assert_eq!(board.config().name, "Kanban");
    }

    #[test]
    fn test_initial_lists_from_config() {
        let config = BoardConfig {
            initial_lists: vec!["Todo".to_string(), "Doing".to_string()],
            ..BoardConfig::default()
        };
        let board = Board::new(config);
        assert_eq!(titles(&board), vec!["Todo", "Doing"]);
    }

    #[test]
    fn test_add_list_default_titles() {
        let mut board = Board::default();
        let first = board.add_list();
        board.add_list();

        assert_eq!(titles(&board), vec!["List 1", "List 2"]);
        assert_eq!(board.lists()[0].id, first);
    }

    #[test]
    fn test_add_list_title_follows_count_after_delete() {
        let mut board = Board::default();
        let first = board.add_list();
        board.add_list();
        board.delete_list(&first);
        let third = board.add_list();

        assert_eq!(titles(&board), vec!["List 2", "List 2"]);
        assert_ne!(board.lists()[0].id, third);
    }

    #[test]
    fn test_rename_list() {
        let mut board = board_with(&["Backlog"]);
        let id = board.lists()[0].id.clone();

        board.rename_list(&id, "Icebox");
        assert_eq!(titles(&board), vec!["Icebox"]);
    }

    #[test]
    fn test_rename_unknown_list_is_noop() {
        let mut board = board_with(&["Backlog"]);
        let before = board.lists().to_vec();

        board.rename_list(&ListId::from("list-99"), "Nope");
        assert_eq!(board.lists(), before.as_slice());
    }

    #[test]
    fn test_add_task_default_content() {
        let mut board = board_with(&["Backlog", "Done"]);
        let backlog = board.lists()[0].id.clone();
        let done = board.lists()[1].id.clone();

        board.add_task(&backlog).unwrap();
        board.add_task(&done).unwrap();
        board.add_task(&backlog).unwrap();

        let contents: Vec<&str> = board
            .tasks_in(&backlog)
            .map(|task| task.content.as_str())
            .collect();
        assert_eq!(contents, vec!["Task 1", "Task 2"]);
        assert_eq!(board.tasks_in(&done).count(), 1);
    }

    #[test]
    fn test_tasks_in_with_temporary_id() {
        let mut board = board_with(&["Backlog", "Done"]);
        let backlog = board.lists()[0].id.clone();
        board.add_task(&backlog);
        board.add_task(&backlog);

        let tasks: Vec<&Task> = board.tasks_in(&ListId::new(1)).collect();
        assert_eq!(tasks.len(), 2);
        assert_eq!(board.tasks_in(&ListId::from("list-2")).count(), 0);
    }

    #[test]
    fn test_add_task_to_unknown_list_creates_nothing() {
        let mut board = board_with(&["Backlog"]);
        assert!(board.add_task(&ListId::from("list-42")).is_none());
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_rename_and_delete_task() {
        let mut board = board_with(&["Backlog"]);
        let backlog = board.lists()[0].id.clone();
        let id = board.add_task(&backlog).unwrap();

        board.rename_task(&id, "Ship it");
        assert_eq!(board.task(&id).unwrap().content, "Ship it");

        board.delete_task(&id);
        assert!(board.task(&id).is_none());

        // Already gone
        board.delete_task(&id);
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_ids_unique_across_mixed_operations() {
        let mut board = Board::default();
        let a = board.add_list();
        let b = board.add_list();
        for _ in 0..5 {
            board.add_task(&a);
            board.add_task(&b);
        }
        board.delete_list(&a);
        let c = board.add_list();
        board.add_task(&c);

        let list_ids: HashSet<_> = board.lists().iter().map(|l| l.id.clone()).collect();
        let task_ids: HashSet<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(list_ids.len(), board.lists().len());
        assert_eq!(task_ids.len(), board.tasks().len());
        assert!(!list_ids.contains(&a));
    }

    #[test]
    fn test_delete_list_cascades() {
        let mut board = board_with(&["Backlog", "Done"]);
        let backlog = board.lists()[0].id.clone();
        let done = board.lists()[1].id.clone();

        for _ in 0..3 {
            board.add_task(&backlog);
        }
        let kept = board.add_task(&done).unwrap();
        let done_tasks: Vec<Task> = board.tasks_in(&done).cloned().collect();

        board.delete_list(&backlog);

        assert_eq!(titles(&board), vec!["Done"]);
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, kept);
        assert_eq!(board.tasks(), done_tasks.as_slice());
    }

    #[test]
    fn test_delete_unknown_list_is_noop() {
        let mut board = board_with(&["Backlog"]);
        let backlog = board.lists()[0].id.clone();
        board.add_task(&backlog);
        let lists = board.lists().to_vec();
        let tasks = board.tasks().to_vec();

        board.delete_list(&ListId::from("list-77"));
        board.delete_task(&TaskId::from("task-77"));
        board.rename_task(&TaskId::from("task-77"), "x");

        assert_eq!(board.lists(), lists.as_slice());
        assert_eq!(board.tasks(), tasks.as_slice());
    }

    #[test]
    fn test_reorder_lists_onto_last() {
        let mut board = board_with(&["A", "B", "C"]);
        let a = board.lists()[0].id.clone();
        let c = board.lists()[2].id.clone();

        board.reorder_lists(&a, &c);
        assert_eq!(titles(&board), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_reorder_lists_backwards() {
        let mut board = board_with(&["A", "B", "C", "D"]);
        let d = board.lists()[3].id.clone();
        let b = board.lists()[1].id.clone();

        board.reorder_lists(&d, &b);
        assert_eq!(titles(&board), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_reorder_lists_same_or_unknown_is_noop() {
        let mut board = board_with(&["A", "B", "C"]);
        let a = board.lists()[0].id.clone();
        let before = board.lists().to_vec();

        board.reorder_lists(&a, &a);
        board.reorder_lists(&a, &ListId::from("list-404"));
        board.reorder_lists(&ListId::from("list-404"), &a);

        assert_eq!(board.lists(), before.as_slice());
    }

    #[test]
    fn test_drag_task_over_task_in_other_list() {
        let mut board = board_with(&["Backlog", "Done"]);
        let backlog = board.lists()[0].id.clone();
        let done = board.lists()[1].id.clone();

        let t = board.add_task(&backlog).unwrap();
        let other = board.add_task(&backlog).unwrap();
        let target = board.add_task(&done).unwrap();
        let target_index = board.task_index(&target).unwrap();

        board.reorder_tasks_on_drag_over(&t, &DropTarget::Task(target.clone()));

        assert_eq!(board.task(&t).unwrap().list_id, done);
        assert_eq!(board.task_index(&t), Some(target_index));
        assert_eq!(board.tasks().len(), 3);

        let order: Vec<&TaskId> = board.tasks().iter().map(|task| &task.id).collect();
        assert_eq!(order, vec![&other, &target, &t]);
    }

    #[test]
    fn test_drag_task_over_task_same_list_moves_up() {
        let mut board = board_with(&["Backlog"]);
        let backlog = board.lists()[0].id.clone();
        let first = board.add_task(&backlog).unwrap();
        let second = board.add_task(&backlog).unwrap();
        let third = board.add_task(&backlog).unwrap();

        board.reorder_tasks_on_drag_over(&third, &DropTarget::Task(first.clone()));

        let order: Vec<&TaskId> = board.tasks().iter().map(|task| &task.id).collect();
        assert_eq!(order, vec![&third, &first, &second]);
        assert!(board.tasks().iter().all(|task| task.belongs_to(&backlog)));
    }

    #[test]
    fn test_drag_task_over_list_keeps_position() {
        let mut board = board_with(&["Backlog", "Done"]);
        let backlog = board.lists()[0].id.clone();
        let done = board.lists()[1].id.clone();
        board.add_task(&backlog);
        let moved = board.add_task(&backlog).unwrap();
        board.add_task(&backlog);

        board.reorder_tasks_on_drag_over(&moved, &DropTarget::List(done.clone()));

        assert_eq!(board.task(&moved).unwrap().list_id, done);
        assert_eq!(board.task_index(&moved), Some(1));
    }

    #[test]
    fn test_drag_over_with_unknown_ids_is_noop() {
        let mut board = board_with(&["Backlog"]);
        let backlog = board.lists()[0].id.clone();
        let t = board.add_task(&backlog).unwrap();
        let before = board.tasks().to_vec();

        board.reorder_tasks_on_drag_over(&t, &DropTarget::Task(TaskId::from("task-9")));
        board.reorder_tasks_on_drag_over(&t, &DropTarget::List(ListId::from("list-9")));
        board.reorder_tasks_on_drag_over(&TaskId::from("task-9"), &DropTarget::List(backlog));
        board.reorder_tasks_on_drag_over(&t, &DropTarget::Task(t.clone()));

        assert_eq!(board.tasks(), before.as_slice());
    }
}
