//! Turning drag gestures on the chart into new task dates.
//!
//! A gesture captures the task and what is being dragged when it starts.
//! When it ends, the shell hands over the drop x-coordinate relative to the
//! timeline and gets back the dates to write, or `None` if the drop would
//! produce an empty or inverted task or land outside the calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::{checked_add_days, checked_pixel_to_date, days_between, ZoomLevel};
use crate::task::Task;

/// What part of the bar is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragKind {
    /// The whole bar; duration is kept.
    Move,
    /// The left edge; changes the start date.
    ResizeLeft,
    /// The right edge; changes the end date.
    ResizeRight,
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DragKind::Move => "move",
            DragKind::ResizeLeft => "resize-left",
            DragKind::ResizeRight => "resize-right",
        })
    }
}

impl FromStr for DragKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move" => Ok(DragKind::Move),
            "resize-left" => Ok(DragKind::ResizeLeft),
            "resize-right" => Ok(DragKind::ResizeRight),
            _ => Err(ValidationError::UnknownDragKind(s.to_string())),
        }
    }
}

/// New dates produced by a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// A drag in progress.
#[derive(Debug, Clone)]
pub struct DragGesture {
    pub task: Task,
    pub kind: DragKind,
}

impl DragGesture {
    pub fn new(task: Task, kind: DragKind) -> Self {
        Self { task, kind }
    }

    /// Interpret a drop at `x` pixels from the timeline origin.
    pub fn drop_at(&self, x: f64, chart_start: DateTime<Utc>, zoom: ZoomLevel) -> Option<DateSpan> {
        let dropped = checked_pixel_to_date(x, chart_start, zoom)?;
        let task = &self.task;

        match self.kind {
            DragKind::Move => {
                let duration = days_between(task.start_date, task.end_date);
                Some(DateSpan {
                    start_date: dropped,
                    end_date: checked_add_days(dropped, duration)?,
                })
            }
            DragKind::ResizeLeft => (dropped < task.end_date).then_some(DateSpan {
                start_date: dropped,
                end_date: task.end_date,
            }),
            DragKind::ResizeRight => (dropped > task.start_date).then_some(DateSpan {
                start_date: task.start_date,
                end_date: dropped,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, d, 0, 0, 0).unwrap()
    }

    fn gesture(kind: DragKind) -> DragGesture {
        DragGesture::new(Task::new("t", "T", day(5), day(8)), kind)
    }

    #[test]
    fn move_keeps_duration() {
        let span = gesture(DragKind::Move).drop_at(395.0, day(1), ZoomLevel::Day).unwrap();
        assert_eq!(span.start_date, day(11));
        assert_eq!(span.end_date, day(14));
    }

    #[test]
    fn move_at_week_zoom_scales_pixels() {
        // 40 px is one week at week zoom
        let span = gesture(DragKind::Move).drop_at(40.0, day(1), ZoomLevel::Week).unwrap();
        assert_eq!(span.start_date, day(8));
        assert_eq!(span.end_date, day(11));
    }

    #[test]
    fn resize_left_changes_start_only() {
        let span = gesture(DragKind::ResizeLeft).drop_at(40.0, day(1), ZoomLevel::Day).unwrap();
        assert_eq!(span, DateSpan { start_date: day(2), end_date: day(8) });
    }

    #[test]
    fn resize_left_past_end_is_ignored() {
        let g = gesture(DragKind::ResizeLeft);
        assert!(g.drop_at(280.0, day(1), ZoomLevel::Day).is_none());
        assert!(g.drop_at(400.0, day(1), ZoomLevel::Day).is_none());
    }

    #[test]
    fn resize_right_changes_end_only() {
        let span = gesture(DragKind::ResizeRight).drop_at(400.0, day(1), ZoomLevel::Day).unwrap();
        assert_eq!(span, DateSpan { start_date: day(5), end_date: day(11) });
    }

    #[test]
    fn resize_right_before_start_is_ignored() {
        let g = gesture(DragKind::ResizeRight);
        assert!(g.drop_at(160.0, day(1), ZoomLevel::Day).is_none());
        assert!(g.drop_at(0.0, day(1), ZoomLevel::Day).is_none());
    }

    #[test]
    fn drop_outside_the_calendar_is_ignored() {
        for kind in [DragKind::Move, DragKind::ResizeLeft, DragKind::ResizeRight] {
            let g = gesture(kind);
            assert!(g.drop_at(f64::INFINITY, day(1), ZoomLevel::Day).is_none(), "{kind}");
            assert!(g.drop_at(f64::NEG_INFINITY, day(1), ZoomLevel::Day).is_none(), "{kind}");
            assert!(g.drop_at(f64::NAN, day(1), ZoomLevel::Day).is_none(), "{kind}");
            assert!(g.drop_at(1e13, day(1), ZoomLevel::Day).is_none(), "{kind}");
        }
    }

    #[test]
    fn move_to_the_last_calendar_day_is_ignored() {
        // The start fits but the end would run past the calendar
        let last = DateTime::<Utc>::MAX_UTC;
        let x = days_between(day(1), last) as f64 * 40.0;
        assert!(gesture(DragKind::Move).drop_at(x, day(1), ZoomLevel::Day).is_none());
        assert!(gesture(DragKind::ResizeRight).drop_at(x, day(1), ZoomLevel::Day).is_some());
    }

    #[test]
    fn drag_kind_parses_from_cli_names() {
        assert_eq!("resize-left".parse::<DragKind>().unwrap(), DragKind::ResizeLeft);
        assert_eq!(DragKind::ResizeRight.to_string(), "resize-right");
        assert!("shrink".parse::<DragKind>().is_err());
    }
}
