use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gantt_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gantt-cli", version, about = "Gantt Planner CLI")]
struct Cli {
    /// Task snapshot (JSON with `tasks` and `dependencies`) to load instead
    /// of the sample project
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task and dependency listing
    Tasks {
        #[command(subcommand)]
        action: commands::tasks::TasksAction,
    },
    /// Count and list overlapping tasks
    Conflicts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Push overlapping tasks forward and print the resulting snapshot
    Resolve,
    /// Print the chart date range
    Range,
    /// Print bar, arrow and header geometry
    Layout {
        /// Zoom level (day, week, month); defaults to the configured one
        #[arg(long)]
        zoom: Option<gantt_core::ZoomLevel>,
    },
    /// Interpret a drop on the timeline and print the updated task
    Drag {
        /// Task being dragged
        task_id: String,
        /// move, resize-left or resize-right
        kind: gantt_core::DragKind,
        /// Drop x-coordinate in pixels from the timeline origin
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Zoom level (day, week, month); defaults to the configured one
        #[arg(long)]
        zoom: Option<gantt_core::ZoomLevel>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(&config);

    let file = cli.file.as_deref();
    let result = match cli.command {
        Commands::Tasks { action } => commands::tasks::run(action, file, &config),
        Commands::Conflicts { json } => commands::chart::conflicts(json, file, &config),
        Commands::Resolve => commands::chart::resolve(file, &config),
        Commands::Range => commands::chart::range(file, &config),
        Commands::Layout { zoom } => commands::chart::layout(zoom, file, &config),
        Commands::Drag {
            task_id,
            kind,
            x,
            zoom,
        } => commands::chart::drag(&task_id, kind, x, zoom, file, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
