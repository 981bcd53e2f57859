use std::path::Path;

use clap::Subcommand;
use gantt_core::Config;

use super::load_planner;

#[derive(Subcommand)]
pub enum TasksAction {
    /// List tasks in chart order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List dependencies
    Deps {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TasksAction, file: Option<&Path>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let planner = load_planner(file, config)?;
    match action {
        TasksAction::List { json } => {
            let tasks = planner.tasks();
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks");
            } else {
                for t in tasks {
                    println!(
                        "{}  {} .. {}  {} ({}, {}%)",
                        t.id,
                        t.start_date.format("%Y-%m-%d"),
                        t.end_date.format("%Y-%m-%d"),
                        t.title,
                        t.assignee,
                        t.progress
                    );
                }
            }
        }
        TasksAction::Deps { json } => {
            let deps = planner.dependencies();
            if json {
                println!("{}", serde_json::to_string_pretty(&deps)?);
            } else if deps.is_empty() {
                println!("No dependencies");
            } else {
                for d in deps {
                    println!("{}  {} -> {}  {}", d.id, d.from_task_id, d.to_task_id, d.kind);
                }
            }
        }
    }
    Ok(())
}
