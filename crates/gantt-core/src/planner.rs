//! Planner service tying the store to the chart and the resolver.
//!
//! Every operation reads a fresh snapshot from the store, computes on it and
//! writes results back by task id. Nothing is cached between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::conflict::{changed_tasks, count_conflicts, find_overlapping_tasks, resolve_task_conflicts, ConflictPair};
use crate::dependency::{layout_arrows, ArrowGeometry, Dependency, DependencyKind};
use crate::drag::{DateSpan, DragGesture};
use crate::error::Result;
use crate::geometry::{
    chart_date_range, chart_date_range_at, layout_bars, BarGeometry, DateRange, ZoomLevel, TIMELINE_HEADER_HEIGHT,
};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::store::{MemoryStore, TaskStore};
use crate::task::{Task, TaskDraft, TaskPatch};
use crate::timeline::{header_cells, timeline_width, HeaderCell};

/// Outcome of an automatic conflict resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Ids of tasks that were moved, in resolution order.
    pub shifted: Vec<String>,
    /// Conflicts left after resolution.
    pub remaining_conflicts: usize,
}

/// Everything a shell needs to draw the chart at one zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub zoom: ZoomLevel,
    pub range: DateRange,
    pub width: f64,
    /// Rows start this far below the top of the chart.
    pub header_height: f64,
    pub header: Vec<HeaderCell>,
    pub bars: Vec<BarGeometry>,
    pub arrows: Vec<ArrowGeometry>,
}

/// Owns one store and one id generator.
pub struct Planner<S = MemoryStore, G = UuidGenerator> {
    store: S,
    ids: G,
}

impl Planner {
    /// In-memory planner with random ids.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), UuidGenerator)
    }
}

impl<S: TaskStore, G: IdGenerator> Planner<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.list_tasks()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.store.list_dependencies()
    }

    /// Store a new task under a freshly generated id.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = draft.into_task(self.ids.next_id());
        self.store.create_task(task.clone())?;
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, patch: &TaskPatch) -> Option<Task> {
        self.store.update_task(id, patch)
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        self.store.delete_task(id)
    }

    /// Declare a dependency from `from` to `to`.
    ///
    /// Task ids are not checked; a dependency on a missing task is simply
    /// never drawn.
    pub fn link(&mut self, from: &str, to: &str, kind: DependencyKind) -> Result<Dependency> {
        let dependency = Dependency::new(self.ids.next_id(), from, to, kind);
        self.store.add_dependency(dependency.clone())?;
        Ok(dependency)
    }

    pub fn unlink(&mut self, dependency_id: &str) -> bool {
        self.store.remove_dependency(dependency_id)
    }

    pub fn conflicts(&self) -> Vec<ConflictPair> {
        find_overlapping_tasks(&self.store.list_tasks())
    }

    pub fn conflict_count(&self) -> usize {
        count_conflicts(&self.store.list_tasks())
    }

    /// Push overlapping tasks forward and write the moved ones back by id.
    pub fn resolve_conflicts(&mut self) -> ResolutionSummary {
        let before = self.store.list_tasks();
        let resolved = resolve_task_conflicts(&before);

        let mut shifted = Vec::new();
        for task in changed_tasks(&before, &resolved) {
            let patch = TaskPatch::dates(task.start_date, task.end_date);
            if self.store.update_task(&task.id, &patch).is_some() {
                shifted.push(task.id.clone());
            }
        }

        let summary = ResolutionSummary {
            remaining_conflicts: count_conflicts(&self.store.list_tasks()),
            shifted,
        };
        info!(
            "Resolved conflicts: {} tasks shifted, {} remaining",
            summary.shifted.len(),
            summary.remaining_conflicts
        );
        summary
    }

    /// Current chart range, using the wall clock when there are no tasks.
    pub fn date_range(&self) -> DateRange {
        chart_date_range(&self.store.list_tasks())
    }

    /// Apply a drop at `x` pixels, measured against the current chart range.
    ///
    /// Returns the updated task, or `None` if the drop was rejected or the
    /// task no longer exists.
    pub fn apply_drop(&mut self, gesture: &DragGesture, x: f64, zoom: ZoomLevel) -> Option<Task> {
        let range = self.date_range();
        let DateSpan { start_date, end_date } = gesture.drop_at(x, range.start, zoom)?;
        debug!(
            "Drop {} on task {} at x={}: {} -> {}",
            gesture.kind, gesture.task.id, x, start_date, end_date
        );
        self.store
            .update_task(&gesture.task.id, &TaskPatch::dates(start_date, end_date))
    }

    /// Full layout using the wall clock for an empty chart.
    pub fn chart(&self, zoom: ZoomLevel, label_every: usize) -> ChartLayout {
        self.chart_at(zoom, label_every, Utc::now())
    }

    pub fn chart_at(&self, zoom: ZoomLevel, label_every: usize, now: DateTime<Utc>) -> ChartLayout {
        let tasks = self.store.list_tasks();
        let dependencies = self.store.list_dependencies();
        let range = chart_date_range_at(&tasks, now);

        ChartLayout {
            zoom,
            range,
            width: timeline_width(&range, zoom),
            header_height: TIMELINE_HEADER_HEIGHT,
            header: header_cells(&range, zoom, label_every),
            bars: layout_bars(&tasks, range.start, zoom),
            arrows: layout_arrows(&dependencies, &tasks, range.start, zoom),
        }
    }
}
