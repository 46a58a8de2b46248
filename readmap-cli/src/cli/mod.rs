pub mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use readmap_core::{load_or_default, Config, OptionValue};
use readmap_tools::{Blat, OptionMap};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "readmap",
    version,
    about = "Assign sequencing reads to reference sequences with BLAT",
    long_about = "readmap composes BLAT command lines from a flag table, runs the aligner \
                  against a reference database, and parses the tabular report it writes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $READMAP_HOME/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(readmap_core::config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the BLAT command for a run without executing it
    Command(commands::command::CommandArgs),

    /// Run BLAT and summarise hits per query
    Assign(commands::assign::AssignArgs),

    /// Print the records of a BLAT tabular report
    Parse(commands::parse::ParseArgs),

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Inputs shared by every subcommand that drives the aligner
#[derive(Args, Debug)]
pub struct AlignerArgs {
    /// Query FASTA file
    #[arg(short, long, value_name = "FILE")]
    pub query: PathBuf,

    /// Database FASTA file
    #[arg(short, long, value_name = "FILE")]
    pub database: PathBuf,

    /// Report written by the aligner
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Extra aligner flag, e.g. `-p -minScore=30` (repeatable)
    #[arg(short = 'p', long = "param", value_name = "FLAG=VALUE", allow_hyphen_values = true)]
    pub params: Vec<String>,

    /// Translate reads in six frames and search a protein database
    #[arg(long)]
    pub protein: bool,

    /// BLAT binary (overrides the configuration file)
    #[arg(long, value_name = "PATH")]
    pub binary: Option<String>,

    /// Directory the aligner runs in (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}

impl AlignerArgs {
    /// Per-run flags parsed from `--param`
    pub fn option_map(&self) -> Result<OptionMap> {
        self.params.iter().map(|param| parse_param(param)).collect()
    }

    /// Query, database and output resolved against the current directory
    pub fn absolute_paths(&self) -> Result<(PathBuf, PathBuf, PathBuf)> {
        Ok((
            absolute(&self.query)?,
            absolute(&self.database)?,
            absolute(&self.output)?,
        ))
    }

    /// Aligner configured from `config`, then from the command line
    pub fn blat(&self, config: &Config) -> Blat {
        let mut blat = Blat::from_config(&config.blat);
        if let Some(binary) = &self.binary {
            blat = blat.with_binary(binary.clone());
        }
        if let Some(dir) = &self.working_dir {
            blat = blat.with_working_dir(dir.clone());
        }
        blat
    }
}

fn parse_param(param: &str) -> Result<(String, OptionValue)> {
    let (flag, value) = param
        .split_once('=')
        .with_context(|| format!("Invalid parameter '{}': expected FLAG=VALUE", param))?;
    let flag = if flag.starts_with('-') {
        flag.to_string()
    } else {
        format!("-{}", flag)
    };
    Ok((flag, OptionValue::parse_cli(value)))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(cwd.join(path))
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    tracing::debug!("Using configuration file {}", path.display());
    load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}
