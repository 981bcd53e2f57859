use chrono::{DateTime, Utc};

use super::Snapshot;
use crate::geometry::add_days;
use crate::task::Task;

/// Four-task demo project starting on `today`.
pub fn sample_snapshot(today: DateTime<Utc>) -> Snapshot {
    let tomorrow = add_days(today, 1);
    let next_week = add_days(today, 7);
    let two_weeks = add_days(today, 14);

    let tasks = vec![
        Task::new("1", "Project Planning", today, tomorrow)
            .with_assignee("Alice")
            .with_progress(50)
            .with_color("#3b82f6"),
        Task::new("2", "Design System", tomorrow, next_week)
            .with_assignee("Bob")
            .with_progress(25)
            .with_color("#10b981"),
        Task::new("3", "Development", next_week, two_weeks)
            .with_assignee("Charlie")
            .with_color("#f59e0b"),
        Task::new("4", "Testing", two_weeks, add_days(two_weeks, 3))
            .with_assignee("Diana")
            .with_color("#ef4444"),
    ];

    Snapshot {
        tasks,
        dependencies: Vec::new(),
    }
}
