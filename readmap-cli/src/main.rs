use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use readmap_core::ReadmapError;

fn main() {
    let cli = Cli::parse();

    // READMAP_LOG wins; otherwise -v raises the level from warn
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("READMAP_LOG").unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ReadmapError>() {
        Some(ReadmapError::Configuration(_)) => 2,
        Some(ReadmapError::Io(_)) => 3,
        Some(ReadmapError::MalformedReport { .. }) | Some(ReadmapError::Parse(_)) => 4,
        Some(ReadmapError::ExternalTool { .. }) | Some(ReadmapError::ToolNotFound(_)) => 5,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path();

    match cli.command {
        Commands::Command(args) => cli::commands::command::run(args, &config_path),
        Commands::Assign(args) => cli::commands::assign::run(args, &config_path),
        Commands::Parse(args) => cli::commands::parse::run(args, &config_path),
        Commands::Config { command } => cli::commands::config::run(command, &config_path),
    }
}
