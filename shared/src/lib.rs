use serde::{Deserialize, Serialize};

/// A to-do item as the remote store returns it. Ids are assigned by the
/// store and treated as opaque strings on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// Body for `POST /api/tasks` and `PUT /api/tasks/{id}`. The frontend also
/// uses it as the form draft, so the two always agree on shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub name: String,
    pub completed: bool,
}

impl TaskPayload {
    /// Full replacement record that marks `task` as completed.
    pub fn completing(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            completed: true,
        }
    }
}
