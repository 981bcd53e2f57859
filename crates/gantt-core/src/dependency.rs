//! Dependencies between tasks and the arrows that draw them.
//!
//! Dependencies are visual only. They decide which two x-coordinates an
//! arrow connects and never constrain scheduling.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::{bar_left, bar_width, row_top, ZoomLevel, TASK_ROW_HEIGHT};
use crate::task::Task;

/// Which endpoints of the two tasks an arrow joins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    #[default]
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::FinishToStart => "finish-to-start",
            DependencyKind::StartToStart => "start-to-start",
            DependencyKind::FinishToFinish => "finish-to-finish",
            DependencyKind::StartToFinish => "start-to-finish",
        }
    }

    fn leaves_from_finish(&self) -> bool {
        matches!(self, DependencyKind::FinishToStart | DependencyKind::FinishToFinish)
    }

    fn arrives_at_finish(&self) -> bool {
        matches!(self, DependencyKind::FinishToFinish | DependencyKind::StartToFinish)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finish-to-start" | "fs" => Ok(DependencyKind::FinishToStart),
            "start-to-start" | "ss" => Ok(DependencyKind::StartToStart),
            "finish-to-finish" | "ff" => Ok(DependencyKind::FinishToFinish),
            "start-to-finish" | "sf" => Ok(DependencyKind::StartToFinish),
            _ => Err(ValidationError::UnknownDependencyKind(s.to_string())),
        }
    }
}

/// A declared relationship from one task to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub from_task_id: String,
    pub to_task_id: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new(
        id: impl Into<String>,
        from_task_id: impl Into<String>,
        to_task_id: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            id: id.into(),
            from_task_id: from_task_id.into(),
            to_task_id: to_task_id.into(),
            kind,
        }
    }

    /// True if `task_id` is the source or the target.
    pub fn involves(&self, task_id: &str) -> bool {
        self.from_task_id == task_id || self.to_task_id == task_id
    }
}

/// Endpoints and curve control points of one dependency arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowGeometry {
    pub dependency_id: String,
    pub start_x: f64,
    pub end_x: f64,
    pub from_y: f64,
    pub to_y: f64,
    pub control1_y: f64,
    pub control2_y: f64,
}

impl ArrowGeometry {
    /// Cubic bezier path in SVG syntax.
    pub fn svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start_x,
            self.from_y,
            self.start_x,
            self.control1_y,
            self.end_x,
            self.control2_y,
            self.end_x,
            self.to_y
        )
    }
}

/// Arrow for `dependency`, or `None` when either task is missing.
///
/// Row positions come from each task's index in `tasks`, matching the bar
/// layout.
pub fn arrow_for(
    dependency: &Dependency,
    tasks: &[Task],
    chart_start: DateTime<Utc>,
    zoom: ZoomLevel,
) -> Option<ArrowGeometry> {
    let from_index = tasks.iter().position(|t| t.id == dependency.from_task_id)?;
    let to_index = tasks.iter().position(|t| t.id == dependency.to_task_id)?;
    let (from, to) = (&tasks[from_index], &tasks[to_index]);

    let from_left = bar_left(from.start_date, chart_start, zoom);
    let to_left = bar_left(to.start_date, chart_start, zoom);

    let start_x = if dependency.kind.leaves_from_finish() {
        from_left + bar_width(from.start_date, from.end_date, zoom)
    } else {
        from_left
    };
    let end_x = if dependency.kind.arrives_at_finish() {
        to_left + bar_width(to.start_date, to.end_date, zoom)
    } else {
        to_left
    };

    let from_y = row_top(from_index) + TASK_ROW_HEIGHT / 2.0;
    let to_y = row_top(to_index) + TASK_ROW_HEIGHT / 2.0;
    let rise = to_y - from_y;

    Some(ArrowGeometry {
        dependency_id: dependency.id.clone(),
        start_x,
        end_x,
        from_y,
        to_y,
        control1_y: from_y + rise * 0.3,
        control2_y: to_y - rise * 0.3,
    })
}

/// Arrows for every renderable dependency. Dangling ones are skipped.
pub fn layout_arrows(
    dependencies: &[Dependency],
    tasks: &[Task],
    chart_start: DateTime<Utc>,
    zoom: ZoomLevel,
) -> Vec<ArrowGeometry> {
    dependencies
        .iter()
        .filter_map(|dep| {
            let arrow = arrow_for(dep, tasks, chart_start, zoom);
            if arrow.is_none() {
                tracing::warn!(
                    "Skipping dangling dependency {}: {} -> {}",
                    dep.id, dep.from_task_id, dep.to_task_id
                );
            }
            arrow
        })
        .collect()
}
