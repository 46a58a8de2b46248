//! BLAT integration for read assignment
//!
//! This crate composes BLAT command lines from option maps, runs the
//! aligner as a subprocess, and parses the tabular report it writes.
//! The `assign` module wraps these pieces into the read-assignment
//! workflows (DNA reads against DNA or protein databases).

// Modules
pub mod assign;
pub mod blat;
pub mod testing;
pub mod traits;
mod utils;

// Re-exports for convenience
pub use assign::{
    assign_dna_reads_to_dna_database, assign_dna_reads_to_protein_database,
    assign_reads_to_database, ReadAssigner,
};
pub use blat::command::{compose, OptionMap, PositionalArguments};
pub use blat::report::{
    parse_report, read_blocks, read_records, AlignmentRecord, ParseMode, ReportBlock,
    ReportRecords,
};
pub use blat::{Blat, BlatRun, BlatState, Invocation};
pub use testing::MockAligner;
pub use traits::Aligner;
