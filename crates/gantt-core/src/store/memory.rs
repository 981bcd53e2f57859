use tracing::debug;

use super::{Snapshot, TaskStore};
use crate::dependency::Dependency;
use crate::error::StoreError;
use crate::task::{Task, TaskPatch};

/// `Vec`-backed store living in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    dependencies: Vec<Dependency>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing snapshot, keeping its order.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            tasks: snapshot.tasks,
            dependencies: snapshot.dependencies,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn get_task(&self, id: &str) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    fn create_task(&mut self, task: Task) -> Result<(), StoreError> {
        if self.tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::DuplicateTask(task.id));
        }
        debug!("Created task {} ({})", task.id, task.title);
        self.tasks.push(task);
        Ok(())
    }

    fn update_task(&mut self, id: &str, patch: &TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        patch.apply(task);
        debug!("Updated task {}", id);
        Some(task.clone())
    }

    fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }

        let deps_before = self.dependencies.len();
        self.dependencies.retain(|dep| !dep.involves(id));
        debug!(
            "Deleted task {} and {} dependencies",
            id,
            deps_before - self.dependencies.len()
        );
        true
    }

    fn list_dependencies(&self) -> Vec<Dependency> {
        self.dependencies.clone()
    }

    fn add_dependency(&mut self, dependency: Dependency) -> Result<(), StoreError> {
        if self.dependencies.iter().any(|d| d.id == dependency.id) {
            return Err(StoreError::DuplicateDependency(dependency.id));
        }
        debug!(
            "Added dependency {}: {} -> {} ({})",
            dependency.id, dependency.from_task_id, dependency.to_task_id, dependency.kind
        );
        self.dependencies.push(dependency);
        Ok(())
    }

    fn remove_dependency(&mut self, id: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|d| d.id != id);
        self.dependencies.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::DependencyKind;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, d, 0, 0, 0).unwrap()
    }

    fn store_with(ids: &[&str]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (i, id) in ids.iter().enumerate() {
            let d = i as u32 + 1;
            store.create_task(Task::new(*id, id.to_uppercase(), day(d), day(d + 1))).unwrap();
        }
        store
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = store_with(&["c", "a", "b"]);
        let ids: Vec<_> = store.list_tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn listed_tasks_are_copies() {
        let store = store_with(&["a"]);
        let mut listed = store.list_tasks();
        listed[0].title = "changed".into();
        listed.clear();
        assert_eq!(store.get_task("a").unwrap().title, "A");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = store_with(&["a"]);
        let err = store.create_task(Task::new("a", "Again", day(1), day(1))).unwrap_err();
        assert_eq!(err, StoreError::DuplicateTask("a".into()));

        store.add_dependency(Dependency::new("d", "a", "a", DependencyKind::StartToStart)).unwrap();
        assert!(store
            .add_dependency(Dependency::new("d", "a", "a", DependencyKind::StartToStart))
            .is_err());
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = store_with(&["a"]);
        let patch = TaskPatch {
            title: Some("x".into()),
            ..TaskPatch::default()
        };
        assert!(store.update_task("missing", &patch).is_none());
        assert_eq!(store.list_tasks()[0].title, "A");

        let updated = store.update_task("a", &patch).unwrap();
        assert_eq!(updated.title, "x");
    }

    #[test]
    fn delete_cascades_to_dependencies() {
        let mut store = store_with(&["a", "b", "c"]);
        store.add_dependency(Dependency::new("ab", "a", "b", DependencyKind::FinishToStart)).unwrap();
        store.add_dependency(Dependency::new("bc", "b", "c", DependencyKind::FinishToStart)).unwrap();
        store.add_dependency(Dependency::new("ac", "a", "c", DependencyKind::StartToStart)).unwrap();

        assert!(store.delete_task("b"));
        let remaining: Vec<_> = store.list_dependencies().into_iter().map(|d| d.id).collect();
        assert_eq!(remaining, vec!["ac"]);
        assert!(!store.delete_task("b"));
    }

    #[test]
    fn dependencies_targeting_filters_by_target() {
        let mut store = store_with(&["a", "b", "c"]);
        store.add_dependency(Dependency::new("ac", "a", "c", DependencyKind::FinishToStart)).unwrap();
        store.add_dependency(Dependency::new("bc", "b", "c", DependencyKind::FinishToFinish)).unwrap();
        store.add_dependency(Dependency::new("ab", "a", "b", DependencyKind::FinishToStart)).unwrap();

        let into_c: Vec<_> = store.dependencies_targeting("c").into_iter().map(|d| d.id).collect();
        assert_eq!(into_c, vec!["ac", "bc"]);
        assert!(store.dependencies_targeting("a").is_empty());

        assert!(store.remove_dependency("ac"));
        assert!(!store.remove_dependency("ac"));
        assert_eq!(store.dependencies_targeting("c").len(), 1);
    }

    #[test]
    fn snapshot_round_trips_through_store() {
        let mut store = store_with(&["a", "b"]);
        store.add_dependency(Dependency::new("ab", "a", "b", DependencyKind::FinishToStart)).unwrap();
        let copy = MemoryStore::from_snapshot(store.snapshot());
        assert_eq!(copy.snapshot(), store.snapshot());
    }
}
