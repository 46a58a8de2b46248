use anyhow::Result;
use clap::Args;
use readmap_tools::{Aligner, PositionalArguments, ReadAssigner};
use std::path::Path;

use crate::cli::{load_config, AlignerArgs};

#[derive(Args)]
pub struct CommandArgs {
    #[command(flatten)]
    pub aligner: AlignerArgs,

    /// Use only the configured and given flags, skipping workflow defaults
    /// and validation
    #[arg(long, conflicts_with = "protein")]
    pub raw: bool,
}

pub fn run(args: CommandArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let mut blat = args.aligner.blat(&config).halt_before_exec(true);

    let invocation = if args.raw {
        let (query, database, output) = args.aligner.absolute_paths()?;
        let positionals = PositionalArguments::new(query, database, output)?;
        blat.align(&positionals, &args.aligner.option_map()?)?
    } else {
        let mut assigner = ReadAssigner::new(blat);
        super::run_workflow(&mut assigner, &args.aligner)?
    };

    println!("{}", invocation.command());
    Ok(())
}
