use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use readmap_tools::{ParseMode, ReadAssigner, ReportBlock};
use std::path::Path;

use crate::cli::{load_config, AlignerArgs};

#[derive(Args)]
pub struct AssignArgs {
    #[command(flatten)]
    pub aligner: AlignerArgs,

    /// Skip malformed report lines instead of failing
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: AssignArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let mut assigner = ReadAssigner::new(args.aligner.blat(&config));

    let run = super::run_workflow(&mut assigner, &args.aligner)?
        .into_run()
        .context("Aligner halted before execution")?;

    let mode = ParseMode::from_lenient(args.lenient || config.report.lenient);
    let blocks = run.blocks(mode)?;

    println!("{}", "Query\tHits\tBest subject\tBit score".bold());
    for block in &blocks {
        println!("{}", summary_line(block));
    }
    eprintln!(
        "{} {} queries, report at {}",
        "Done:".green().bold(),
        blocks.len(),
        run.output.display()
    );
    Ok(())
}

fn summary_line(block: &ReportBlock) -> String {
    let query = block.query_id.as_deref().unwrap_or("-");
    let best = block
        .records
        .iter()
        .max_by(|a, b| a.bit_score.total_cmp(&b.bit_score));
    match best {
        Some(record) => format!(
            "{}\t{}\t{}\t{:.1}",
            query,
            block.records.len(),
            record.subject_id,
            record.bit_score
        ),
        None => format!("{}\t0\t-\t-", query),
    }
}
