pub mod assign;
pub mod command;
pub mod config;
pub mod parse;

use anyhow::Result;
use readmap_tools::{Aligner, Invocation, ReadAssigner};

use crate::cli::AlignerArgs;

/// Run the workflow selected by `--protein` through `assigner`
pub fn run_workflow<A: Aligner>(
    assigner: &mut ReadAssigner<A>,
    args: &AlignerArgs,
) -> Result<Invocation> {
    let (query, database, output) = args.absolute_paths()?;
    let params = args.option_map()?;

    let invocation = if args.protein {
        assigner.assign_dna_reads_to_protein_database(&query, &database, &output, &params)?
    } else {
        assigner.assign_reads_to_database(&query, &database, &output, &params)?
    };
    Ok(invocation)
}
