pub mod chart;
pub mod config;
pub mod tasks;

use std::path::Path;

use chrono::Utc;
use gantt_core::{sample_snapshot, Config, MemoryStore, Planner, Snapshot, UuidGenerator};

/// Build a planner from the snapshot file, or from the sample project when
/// no file is given and seeding is enabled.
pub fn load_planner(
    file: Option<&Path>,
    config: &Config,
) -> Result<Planner<MemoryStore, UuidGenerator>, Box<dyn std::error::Error>> {
    let snapshot = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Snapshot::from_json(&content)?
        }
        None if config.data.seed_sample_data => sample_snapshot(Utc::now()),
        None => Snapshot::default(),
    };
    tracing::debug!(
        "Loaded {} tasks and {} dependencies",
        snapshot.tasks.len(),
        snapshot.dependencies.len()
    );
    Ok(Planner::new(MemoryStore::from_snapshot(snapshot), UuidGenerator))
}
