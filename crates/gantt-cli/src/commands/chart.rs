use std::path::Path;

use gantt_core::{Config, DragGesture, DragKind, TaskStore, ZoomLevel};
use serde_json::json;

use super::load_planner;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub fn conflicts(as_json: bool, file: Option<&Path>, config: &Config) -> CmdResult {
    let planner = load_planner(file, config)?;
    let pairs = planner.conflicts();

    if as_json {
        let pairs: Vec<_> = pairs
            .iter()
            .map(|p| json!([p.first.id, p.second.id]))
            .collect();
        let out = json!({ "count": pairs.len(), "pairs": pairs });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} conflicts", pairs.len());
        for p in &pairs {
            println!("  {} ({}) <-> {} ({})", p.first.id, p.first.title, p.second.id, p.second.title);
        }
    }
    Ok(())
}

pub fn resolve(file: Option<&Path>, config: &Config) -> CmdResult {
    let mut planner = load_planner(file, config)?;
    let summary = planner.resolve_conflicts();
    eprintln!(
        "shifted {} tasks, {} conflicts remaining",
        summary.shifted.len(),
        summary.remaining_conflicts
    );
    println!("{}", serde_json::to_string_pretty(&planner.store().snapshot())?);
    Ok(())
}

pub fn range(file: Option<&Path>, config: &Config) -> CmdResult {
    let planner = load_planner(file, config)?;
    println!("{}", serde_json::to_string_pretty(&planner.date_range())?);
    Ok(())
}

pub fn layout(zoom: Option<ZoomLevel>, file: Option<&Path>, config: &Config) -> CmdResult {
    let planner = load_planner(file, config)?;
    let zoom = zoom.unwrap_or(config.chart.zoom);
    let chart = planner.chart(zoom, config.chart.label_every);
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}

pub fn drag(
    task_id: &str,
    kind: DragKind,
    x: f64,
    zoom: Option<ZoomLevel>,
    file: Option<&Path>,
    config: &Config,
) -> CmdResult {
    let mut planner = load_planner(file, config)?;
    let zoom = zoom.unwrap_or(config.chart.zoom);
    let task = planner
        .store()
        .get_task(task_id)
        .ok_or_else(|| format!("task not found: {task_id}"))?;

    let gesture = DragGesture::new(task, kind);
    match planner.apply_drop(&gesture, x, zoom) {
        Some(updated) => println!("{}", serde_json::to_string_pretty(&updated)?),
        None => eprintln!("drop ignored: {kind} of task {task_id} to x={x} gives no valid dates"),
    }
    Ok(())
}
