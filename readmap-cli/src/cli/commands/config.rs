use anyhow::Result;
use clap::Subcommand;
use colored::*;
use readmap_core::config::default_config;
use readmap_core::system::describe_paths;
use readmap_core::{save_config, ReadmapError};
use std::path::Path;

use crate::cli::load_config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration and paths
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(command: ConfigCommands, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| {
                ReadmapError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            println!("# {}", config_path.display());
            println!("{}", rendered);
            eprintln!("{}", describe_paths());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                return Err(ReadmapError::Configuration(format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                ))
                .into());
            }
            save_config(config_path, &default_config())?;
            println!(
                "{} {}",
                "Wrote".green().bold(),
                config_path.display()
            );
        }
    }
    Ok(())
}
