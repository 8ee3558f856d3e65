//! State container for the task list.
//!
//! The completed subset is derived from the task collection whenever the
//! collection is replaced; it is never mutated on its own.

use shared::{Task, TaskPayload};

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    completed: Vec<Task>,
    pub loading: bool,
    pub editing: bool,
    pub selected_id: Option<String>,
    pub draft: TaskPayload,
}

impl TaskStore {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn completed_tasks(&self) -> &[Task] {
        &self.completed
    }

    /// Replace the collection with what the remote returned, preserving its
    /// ordering, and re-derive the completed subset.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.completed = tasks.iter().filter(|t| t.completed).cloned().collect();
        self.tasks = tasks;
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Empty-name guard shared by create and update.
    pub fn draft_is_blank(&self) -> bool {
        self.draft.name.is_empty()
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft.name = name;
    }

    /// Clears only the name after a successful create. The draft's
    /// completed flag carries over into the next draft unchanged.
    pub fn clear_draft_name(&mut self) {
        self.draft.name.clear();
    }

    /// Copies the task's name into the draft and records its id. The
    /// draft's completed flag is always reset to false here, whatever the
    /// task's actual value.
    pub fn begin_edit(&mut self, task: &Task) {
        self.draft = TaskPayload {
            name: task.name.clone(),
            completed: false,
        };
        self.selected_id = Some(task.id.clone());
        self.editing = true;
    }

    pub fn finish_edit(&mut self) {
        self.draft.name.clear();
        self.selected_id = None;
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, name: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            completed,
        }
    }

    #[test]
    fn completed_subset_tracks_the_collection() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![
            task("1", "A", false),
            task("2", "B", true),
            task("3", "C", true),
        ]);
        let completed: Vec<&str> = store
            .completed_tasks()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(completed, ["2", "3"]);

        store.set_tasks(vec![task("1", "A", false)]);
        assert!(store.completed_tasks().is_empty());
    }

    #[test]
    fn ordering_is_whatever_the_remote_returned() {
        let mut store = TaskStore::default();
        store.set_tasks(vec![task("9", "Z", false), task("1", "A", false)]);
        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["9", "1"]);
    }

    #[test]
    fn begin_edit_forces_completed_false_in_the_draft() {
        let mut store = TaskStore::default();
        let done = task("7", "Ship it", true);
        store.begin_edit(&done);
        assert!(store.editing);
        assert_eq!(store.selected_id.as_deref(), Some("7"));
        assert_eq!(store.draft.name, "Ship it");
        assert!(!store.draft.completed);
    }

    #[test]
    fn clear_draft_name_leaves_the_completed_flag_alone() {
        let mut store = TaskStore::default();
        store.draft = TaskPayload {
            name: "Leftover".to_string(),
            completed: true,
        };
        store.clear_draft_name();
        assert!(store.draft.name.is_empty());
        assert!(store.draft.completed);
    }

    #[test]
    fn finish_edit_resets_the_editing_state() {
        let mut store = TaskStore::default();
        store.begin_edit(&task("4", "Rename me", false));
        store.finish_edit();
        assert!(!store.editing);
        assert!(store.selected_id.is_none());
        assert!(store.draft.name.is_empty());
    }

    #[test]
    fn blank_guard_only_checks_the_name() {
        let mut store = TaskStore::default();
        assert!(store.draft_is_blank());
        store.set_draft_name("x".to_string());
        assert!(!store.draft_is_blank());
    }
}
