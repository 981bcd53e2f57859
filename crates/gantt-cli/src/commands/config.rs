use clap::Subcommand;
use gantt_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the full configuration as TOML
    Show,
    /// Get a value by dot-separated key (e.g. chart.zoom)
    Get {
        key: String,
    },
    /// Set a value by dot-separated key and save
    Set {
        key: String,
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
