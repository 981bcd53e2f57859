//! # Gantt Planner Core Library
//!
//! This library provides the core logic for an interactive Gantt chart:
//! where task bars go, how drag gestures turn back into dates, and how
//! overlapping tasks are pushed apart. Shells (the bundled CLI, or any GUI)
//! own rendering and input; everything here is synchronous and works on
//! plain values.
//!
//! ## Architecture
//!
//! - **Geometry**: Pure date <-> pixel conversions for the day, week and
//!   month zoom levels
//! - **Conflict resolution**: Overlap detection and greedy push-forward
//!   rescheduling that keeps every task's duration
//! - **Store**: Create/read/update/delete capability over the task and
//!   dependency lists, with an in-memory backing
//! - **Planner**: Service that reads store snapshots, runs the algorithms
//!   and writes results back by id
//!
//! ## Key Components
//!
//! - [`Planner`]: Entry point for shells
//! - [`TaskStore`]: Storage capability trait
//! - [`resolve_task_conflicts`]: The push-forward resolver
//! - [`Config`]: Application configuration management

pub mod config;
pub mod conflict;
pub mod dependency;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod planner;
pub mod store;
pub mod task;
pub mod timeline;

pub use config::Config;
pub use conflict::{changed_tasks, count_conflicts, find_overlapping_tasks, resolve_task_conflicts, tasks_overlap, ConflictPair};
pub use dependency::{arrow_for, layout_arrows, ArrowGeometry, Dependency, DependencyKind};
pub use drag::{DateSpan, DragGesture, DragKind};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use geometry::{
    bar_left, bar_width, chart_date_range, chart_date_range_at, checked_pixel_to_date, layout_bars, pixel_to_date,
    pixels_per_day, row_top, BarGeometry, DateRange, ZoomLevel,
};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use planner::{ChartLayout, Planner, ResolutionSummary};
pub use store::{sample_snapshot, MemoryStore, Snapshot, TaskStore};
pub use task::{Task, TaskDraft, TaskPatch};
pub use timeline::HeaderCell;
