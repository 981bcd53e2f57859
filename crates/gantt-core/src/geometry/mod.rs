//! Chart geometry: conversions between calendar dates and pixel positions.
//!
//! Every function here is pure and total. All three zoom levels share one
//! horizontal pixel budget per bucket, so zooming is a scale change rather
//! than a re-layout:
//! - day: 40 px per day
//! - week: 40/7 px per day
//! - month: 40/30 px per day
//!
//! Callers guarantee `start <= end`; invalid input yields geometrically
//! meaningless output (e.g. a negative width), never an error.

mod dates;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::Task;

pub use dates::{add_days, checked_add_days, days_between, start_of_day};

/// Base pixels per day in the day view.
pub const PIXELS_PER_DAY: f64 = 40.0;
/// Height of each task row.
pub const TASK_ROW_HEIGHT: f64 = 40.0;
/// Height of the timeline header above the rows.
pub const TIMELINE_HEADER_HEIGHT: f64 = 60.0;
/// Days of padding on each side of the task span.
pub const RANGE_PADDING_DAYS: i64 = 7;
/// Window shown when there are no tasks.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Calendar-unit-to-pixel scale selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    #[default]
    Day,
    Week,
    Month,
}

impl ZoomLevel {
    pub const ALL: [ZoomLevel; 3] = [ZoomLevel::Day, ZoomLevel::Week, ZoomLevel::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomLevel::Day => "day",
            ZoomLevel::Week => "week",
            ZoomLevel::Month => "month",
        }
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoomLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ZoomLevel::Day),
            "week" => Ok(ZoomLevel::Week),
            "month" => Ok(ZoomLevel::Month),
            _ => Err(ValidationError::UnknownZoomLevel(s.to_string())),
        }
    }
}

/// Visible date span of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Position and size of one task bar, in pixels relative to the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub task_id: String,
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

impl BarGeometry {
    /// X coordinate of the bar's right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

pub fn pixels_per_day(zoom: ZoomLevel) -> f64 {
    match zoom {
        ZoomLevel::Day => PIXELS_PER_DAY,
        ZoomLevel::Week => PIXELS_PER_DAY / 7.0,
        ZoomLevel::Month => PIXELS_PER_DAY / 30.0,
    }
}

/// Left offset of a bar. Both dates are normalized to midnight so bars sit
/// on calendar-day boundaries regardless of time of day.
pub fn bar_left(task_start: DateTime<Utc>, chart_start: DateTime<Utc>, zoom: ZoomLevel) -> f64 {
    let offset = days_between(start_of_day(chart_start), start_of_day(task_start));
    offset as f64 * pixels_per_day(zoom)
}

/// Width of a bar. Day ranges are inclusive, so a single-day task is one
/// full day wide.
pub fn bar_width(start: DateTime<Utc>, end: DateTime<Utc>, zoom: ZoomLevel) -> f64 {
    (days_between(start, end) + 1) as f64 * pixels_per_day(zoom)
}

/// Top offset of the row at `index`. Rows follow collection order.
pub fn row_top(index: usize) -> f64 {
    index as f64 * TASK_ROW_HEIGHT
}

/// Inverse of [`bar_left`]: snaps to the nearest day boundary.
///
/// Offsets beyond the representable calendar clamp to its first or last
/// day; NaN maps to the chart start.
pub fn pixel_to_date(pixels: f64, chart_start: DateTime<Utc>, zoom: ZoomLevel) -> DateTime<Utc> {
    let days = (pixels / pixels_per_day(zoom)).round() as i64;
    start_of_day(add_days(chart_start, days))
}

/// [`pixel_to_date`] that returns `None` instead of clamping, for
/// non-finite offsets and dates chrono cannot represent.
pub fn checked_pixel_to_date(pixels: f64, chart_start: DateTime<Utc>, zoom: ZoomLevel) -> Option<DateTime<Utc>> {
    let days = (pixels / pixels_per_day(zoom)).round();
    if !days.is_finite() || days.abs() >= i64::MAX as f64 {
        return None;
    }
    checked_add_days(chart_start, days as i64).map(start_of_day)
}

/// Date range covering every task with a week of padding on both ends,
/// or the next 30 days from now when there are no tasks.
pub fn chart_date_range(tasks: &[Task]) -> DateRange {
    chart_date_range_at(tasks, Utc::now())
}

/// [`chart_date_range`] with an explicit clock value for the empty case.
pub fn chart_date_range_at(tasks: &[Task], now: DateTime<Utc>) -> DateRange {
    let dates = tasks.iter().flat_map(|t| [t.start_date, t.end_date]);
    let (Some(min), Some(max)) = (dates.clone().min(), dates.max()) else {
        return DateRange {
            start: now,
            end: add_days(now, DEFAULT_RANGE_DAYS),
        };
    };

    DateRange {
        start: add_days(min, -RANGE_PADDING_DAYS),
        end: add_days(max, RANGE_PADDING_DAYS),
    }
}

/// Bar geometry for every task, in collection order.
pub fn layout_bars(tasks: &[Task], chart_start: DateTime<Utc>, zoom: ZoomLevel) -> Vec<BarGeometry> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| BarGeometry {
            task_id: task.id.clone(),
            left: bar_left(task.start_date, chart_start, zoom),
            width: bar_width(task.start_date, task.end_date, zoom),
            top: row_top(index),
            height: TASK_ROW_HEIGHT,
        })
        .collect()
}
