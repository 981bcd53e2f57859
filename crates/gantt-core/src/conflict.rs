//! Overlap detection and greedy push-forward resolution.
//!
//! Two tasks overlap when `a.start < b.end && a.end > b.start`. Tasks that
//! only touch at a boundary do not overlap, so back-to-back scheduling is
//! legal.
//!
//! Resolution is a single left-to-right sweep over the tasks sorted by start
//! date. Each task is pushed to the day after the latest end among the
//! earlier tasks it overlaps, keeping its duration. It is an order-dependent
//! heuristic: it does not reflow globally or minimize total displacement.
//! Detection is quadratic in the number of tasks, which is fine for the
//! dozens of tasks a chart shows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{add_days, days_between};
use crate::task::Task;

/// Two tasks whose date ranges overlap, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub first: Task,
    pub second: Task,
}

/// Strict overlap test. Symmetric in its arguments.
pub fn tasks_overlap(a: &Task, b: &Task) -> bool {
    a.start_date < b.end_date && a.end_date > b.start_date
}

/// Every unordered pair of distinct tasks that overlap.
pub fn find_overlapping_tasks(tasks: &[Task]) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();
    for (i, first) in tasks.iter().enumerate() {
        for second in &tasks[i + 1..] {
            if tasks_overlap(first, second) {
                pairs.push(ConflictPair {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }
    pairs
}

/// Number of overlapping pairs.
pub fn count_conflicts(tasks: &[Task]) -> usize {
    let mut count = 0;
    for (i, first) in tasks.iter().enumerate() {
        count += tasks[i + 1..]
            .iter()
            .filter(|second| tasks_overlap(first, second))
            .count();
    }
    count
}

/// Latest end among `earlier` tasks that overlap `task`.
fn latest_overlapping_end(earlier: &[Task], task: &Task) -> Option<DateTime<Utc>> {
    earlier
        .iter()
        .filter(|other| tasks_overlap(other, task))
        .map(|other| other.end_date)
        .max()
}

/// Return a copy of `tasks` with overlaps removed by pushing later tasks
/// forward.
///
/// The output is ordered by original start date, not by input order; ties
/// keep their input order. Callers write results back by id. Each task keeps
/// its whole-day duration. A task is re-checked after every shift until no
/// earlier task overlaps it, so the output has no overlapping pairs and a
/// second call changes nothing.
pub fn resolve_task_conflicts(tasks: &[Task]) -> Vec<Task> {
    let mut resolved = tasks.to_vec();
    // Stable: equal start dates keep their original order.
    resolved.sort_by_key(|t| t.start_date);

    for i in 1..resolved.len() {
        let (earlier, rest) = resolved.split_at_mut(i);
        let current = &mut rest[0];
        let duration = days_between(current.start_date, current.end_date);
        let original_start = current.start_date;

        while let Some(latest_end) = latest_overlapping_end(earlier, current) {
            if current.start_date >= latest_end {
                break;
            }
            current.start_date = add_days(latest_end, 1);
            current.end_date = add_days(current.start_date, duration);
        }

        if current.start_date != original_start {
            tracing::debug!(
                "Pushed task {} from {} to {}",
                current.id, original_start, current.start_date
            );
        }
    }

    resolved
}

/// Ids of tasks in `after` whose dates differ from the same id in `before`.
///
/// Tasks missing from `before` are reported as changed.
pub fn changed_tasks<'a>(before: &[Task], after: &'a [Task]) -> Vec<&'a Task> {
    after
        .iter()
        .filter(|task| {
            before
                .iter()
                .find(|b| b.id == task.id)
                .map_or(true, |b| b.start_date != task.start_date || b.end_date != task.end_date)
        })
        .collect()
}
