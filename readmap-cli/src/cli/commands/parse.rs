use anyhow::Result;
use clap::Args;
use colored::*;
use readmap_core::ReadmapError;
use readmap_tools::{parse_report, ParseMode};
use std::path::{Path, PathBuf};

use crate::cli::load_config;

#[derive(Args)]
pub struct ParseArgs {
    /// Tabular report written by BLAT (`-out=blast9`)
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Report malformed lines and keep going
    #[arg(long)]
    pub lenient: bool,

    /// Print one JSON object per record
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ParseArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let mode = ParseMode::from_lenient(args.lenient || config.report.lenient);

    let mut malformed = 0usize;
    for item in parse_report(&args.report, mode)? {
        match item {
            Ok(record) if args.json => println!("{}", serde_json::to_string(&record)?),
            Ok(record) => println!("{}", record),
            Err(e @ ReadmapError::MalformedReport { .. }) if mode == ParseMode::Lenient => {
                eprintln!("{} {}", "Skipped:".yellow().bold(), e);
                malformed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if malformed > 0 {
        eprintln!(
            "{} {} malformed line(s) in {}",
            "Warning:".yellow().bold(),
            malformed,
            args.report.display()
        );
    }
    Ok(())
}
