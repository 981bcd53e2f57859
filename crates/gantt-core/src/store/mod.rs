//! Task and dependency storage.
//!
//! The chart and resolver never hold on to store data; they read a snapshot,
//! compute and write back through [`TaskStore`]. [`MemoryStore`] is the
//! in-process backing used by the CLI and tests.

mod memory;
mod sample;

pub use memory::MemoryStore;
pub use sample::sample_snapshot;

use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;
use crate::error::{Result, StoreError};
use crate::task::{Task, TaskPatch};

/// Tasks and dependencies as one serializable value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl Snapshot {
    /// Parse a snapshot file's contents. Missing lists default to empty.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Create/read/update/delete capability over the ordered task list and the
/// dependency list.
///
/// Reads return owned copies; mutating them does not affect the store.
pub trait TaskStore {
    /// All tasks in insertion order.
    fn list_tasks(&self) -> Vec<Task>;

    fn get_task(&self, id: &str) -> Option<Task>;

    /// Append a task. Fails if the id is already taken.
    fn create_task(&mut self, task: Task) -> Result<(), StoreError>;

    /// Apply a partial update. Returns the updated task, or `None` (and does
    /// nothing) when the id is unknown.
    fn update_task(&mut self, id: &str, patch: &TaskPatch) -> Option<Task>;

    /// Remove a task and every dependency that references it.
    /// Returns whether the task existed.
    fn delete_task(&mut self, id: &str) -> bool;

    fn list_dependencies(&self) -> Vec<Dependency>;

    /// Append a dependency. Fails if the id is already taken.
    fn add_dependency(&mut self, dependency: Dependency) -> Result<(), StoreError>;

    /// Returns whether the dependency existed.
    fn remove_dependency(&mut self, id: &str) -> bool;

    /// Dependencies whose target is `task_id`.
    fn dependencies_targeting(&self, task_id: &str) -> Vec<Dependency> {
        self.list_dependencies()
            .into_iter()
            .filter(|dep| dep.to_task_id == task_id)
            .collect()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.list_tasks(),
            dependencies: self.list_dependencies(),
        }
    }
}
