//! Timeline header above the chart.
//!
//! The header is split into buckets of one day, one week or one calendar
//! month depending on the zoom level. Every bucket is the same number of
//! pixels wide at its zoom level, but only every n-th bucket gets a label
//! so the header stays readable.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{checked_add_days, pixels_per_day, DateRange, ZoomLevel};

/// Default spacing between labelled buckets.
pub const DEFAULT_LABEL_EVERY: usize = 3;

/// A labelled header cell covering one or more buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub date: DateTime<Utc>,
    pub left: f64,
    pub width: f64,
    /// Short weekday, e.g. `Mon`
    pub weekday: String,
    /// Short month and day, e.g. `May 6`
    pub label: String,
    /// Date in the zoom level's format, e.g. `May 06` or `May 2024`
    pub caption: String,
}

/// Calendar days per bucket.
pub fn bucket_days(zoom: ZoomLevel) -> i64 {
    match zoom {
        ZoomLevel::Day => 1,
        ZoomLevel::Week => 7,
        ZoomLevel::Month => 30,
    }
}

/// Pixel width of one bucket.
pub fn cell_width(zoom: ZoomLevel) -> f64 {
    pixels_per_day(zoom) * bucket_days(zoom) as f64
}

/// chrono format string for dates shown at this zoom level.
pub fn date_format(zoom: ZoomLevel) -> &'static str {
    match zoom {
        ZoomLevel::Day | ZoomLevel::Week => "%b %d",
        ZoomLevel::Month => "%b %Y",
    }
}

pub fn format_date(date: DateTime<Utc>, zoom: ZoomLevel) -> String {
    date.format(date_format(zoom)).to_string()
}

/// Start of every bucket from `start` up to and including `end`.
pub fn date_buckets(start: DateTime<Utc>, end: DateTime<Utc>, zoom: ZoomLevel) -> Vec<DateTime<Utc>> {
    let mut buckets = Vec::new();
    let mut current = start;

    while current <= end {
        buckets.push(current);
        let next = match zoom {
            ZoomLevel::Day => checked_add_days(current, 1),
            ZoomLevel::Week => checked_add_days(current, 7),
            ZoomLevel::Month => current.checked_add_months(Months::new(1)),
        };
        match next {
            Some(next) => current = next,
            None => break,
        }
    }

    buckets
}

/// Total header width for the range.
pub fn timeline_width(range: &DateRange, zoom: ZoomLevel) -> f64 {
    date_buckets(range.start, range.end, zoom).len() as f64 * cell_width(zoom)
}

/// Labelled cells for the header. Every `label_every`-th bucket and the last
/// bucket get a cell, which spans until the next labelled bucket.
pub fn header_cells(range: &DateRange, zoom: ZoomLevel, label_every: usize) -> Vec<HeaderCell> {
    let buckets = date_buckets(range.start, range.end, zoom);
    let step = label_every.max(1);
    let last = buckets.len().saturating_sub(1);
    let width = cell_width(zoom);

    let labelled: Vec<usize> = (0..buckets.len())
        .filter(|i| i % step == 0 || *i == last)
        .collect();

    labelled
        .iter()
        .enumerate()
        .map(|(k, &index)| {
            let next = labelled.get(k + 1).copied().unwrap_or(buckets.len());
            let date = buckets[index];
            HeaderCell {
                date,
                left: index as f64 * width,
                width: (next - index) as f64 * width,
                weekday: date.format("%a").to_string(),
                label: date.format("%b %-d").to_string(),
                caption: format_date(date, zoom),
            }
        })
        .collect()
}
