//! Task records shown as bars on the chart.
//!
//! Dates use inclusive-day semantics: a task whose start and end fall on the
//! same calendar day occupies one full day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A scheduled unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub assignee: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Bar color as a CSS-style string, e.g. `#3b82f6`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Ids of tasks this task depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Task {
    /// Create a task with no color, no progress and no dependencies.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_date,
            end_date,
            assignee: String::new(),
            progress: 0,
            color: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Length in whole days between start and end (0 for a single-day task).
    pub fn duration_days(&self) -> i64 {
        crate::geometry::days_between(self.start_date, self.end_date)
    }

    /// Form-level checks a shell runs before handing the task to the store.
    ///
    /// The chart and resolver never call this; they treat invalid input as
    /// a caller contract violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title".into()));
        }
        if self.end_date < self.start_date {
            return Err(ValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.progress > 100 {
            return Err(ValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}

/// A task as submitted by a create form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            start_date,
            end_date,
            assignee: String::new(),
            progress: 0,
            color: None,
            dependencies: Vec::new(),
        }
    }

    /// Attach an id, producing a storable task.
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            assignee: self.assignee,
            progress: self.progress,
            color: self.color,
            dependencies: self.dependencies,
        }
    }
}

/// Partial-field update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// `Some(None)` clears the color; `null` in JSON does the same.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TaskPatch {
    /// Patch that only moves the task to new dates.
    pub fn dates(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields of `task` that this patch sets.
    pub fn apply(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(start) = self.start_date {
            task.start_date = start;
        }
        if let Some(end) = self.end_date {
            task.end_date = end;
        }
        if let Some(ref assignee) = self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(progress) = self.progress {
            task.progress = progress;
        }
        if let Some(ref color) = self.color {
            task.color = color.clone();
        }
        if let Some(ref deps) = self.dependencies {
            task.dependencies = deps.clone();
        }
    }
}
