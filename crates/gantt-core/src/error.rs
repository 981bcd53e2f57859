//! Core error types for gantt-core.
//!
//! The geometry and conflict-resolution functions are total and never
//! return these. They cover the edges of the library instead: configuration
//! files, store integrity and the opt-in form validation used by shells.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gantt-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Task or dependency store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key that does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// End before start
    #[error("Invalid date range: end_date ({end}) must not be before start_date ({start})")]
    InvalidDateRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Progress above 100 percent
    #[error("Progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    /// Required text field left blank
    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    /// Zoom level name not recognised
    #[error("Unknown zoom level '{0}' (expected day, week or month)")]
    UnknownZoomLevel(String),

    /// Dependency kind name not recognised
    #[error("Unknown dependency kind '{0}'")]
    UnknownDependencyKind(String),

    /// Drag kind name not recognised
    #[error("Unknown drag kind '{0}' (expected move, resize-left or resize-right)")]
    UnknownDragKind(String),
}

/// Store integrity errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A task with this id already exists
    #[error("Task '{0}' already exists")]
    DuplicateTask(String),

    /// A dependency with this id already exists
    #[error("Dependency '{0}' already exists")]
    DuplicateDependency(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
