//! Read assignment workflows
//!
//! Each workflow merges the caller's flags over a set of defaults, checks
//! them, and hands the three paths to an [`Aligner`]. The protein workflow
//! first stages a six-frame translation of the reads next to the other
//! scratch files and removes it once the aligner returns.

use crate::blat::command::{OptionMap, PositionalArguments};
use crate::blat::options::{validate_options, DatabaseType, OutputFormat, QueryType};
use crate::blat::{Blat, BlatRun, Invocation};
use crate::traits::Aligner;
use readmap_bio::{read_fasta, six_frame_translations, write_fasta, Sequence};
use readmap_core::config::BlatConfig;
use readmap_core::{workspace_dir, ReadmapError, ReadmapResult, SequenceType};
use std::path::{Path, PathBuf};

/// `-t=dna -q=dna -out=blast9`
pub fn default_params() -> OptionMap {
    OptionMap::new()
        .with("-t", DatabaseType::Dna)
        .with("-q", QueryType::Dna)
        .with("-out", OutputFormat::Blast9)
}

pub struct ReadAssigner<A: Aligner> {
    aligner: A,
    workspace: PathBuf,
    defaults: OptionMap,
}

impl<A: Aligner> ReadAssigner<A> {
    pub fn new(aligner: A) -> Self {
        Self {
            aligner,
            workspace: workspace_dir(),
            defaults: default_params(),
        }
    }

    /// Directory the translated query is staged in
    pub fn with_workspace(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace = dir.into();
        self
    }

    pub fn aligner(&self) -> &A {
        &self.aligner
    }

    fn options(&self, params: &OptionMap, forced: Option<&OptionMap>) -> ReadmapResult<OptionMap> {
        let mut options = self.defaults.merged(params);
        if let Some(forced) = forced {
            options = options.merged(forced);
        }
        validate_options(&options)?;
        Ok(options)
    }

    /// Align reads with the defaults overridden by `params`
    pub fn assign_reads_to_database(
        &mut self,
        query: &Path,
        database: &Path,
        output: &Path,
        params: &OptionMap,
    ) -> ReadmapResult<Invocation> {
        let options = self.options(params, None)?;
        let positionals = PositionalArguments::new(query, database, output)?;
        tracing::info!(
            "Assigning reads in {} against {}",
            query.display(),
            database.display()
        );
        self.aligner.align(&positionals, &options)
    }

    pub fn assign_dna_reads_to_dna_database(
        &mut self,
        query: &Path,
        database: &Path,
        output: &Path,
        params: &OptionMap,
    ) -> ReadmapResult<Invocation> {
        let forced = OptionMap::new()
            .with("-t", DatabaseType::Dna)
            .with("-q", QueryType::Dna);
        let options = self.options(params, Some(&forced))?;
        let positionals = PositionalArguments::new(query, database, output)?;
        self.aligner.align(&positionals, &options)
    }

    /// Translate DNA reads in all six frames and align them as protein
    pub fn assign_dna_reads_to_protein_database(
        &mut self,
        query: &Path,
        database: &Path,
        output: &Path,
        params: &OptionMap,
    ) -> ReadmapResult<Invocation> {
        let forced = OptionMap::new()
            .with("-t", DatabaseType::Prot)
            .with("-q", QueryType::Prot);
        let options = self.options(params, Some(&forced))?;
        // Validate the caller's paths before any file is staged
        PositionalArguments::new(query, database, output)?;

        if self.aligner.halts_before_exec() {
            let placeholder = self.workspace.join(staged_name(query));
            let positionals = PositionalArguments::new(placeholder, database, output)?;
            return self.aligner.align(&positionals, &options);
        }

        let reads = read_fasta(query)?;
        if let Some(read) = reads
            .iter()
            .find(|r| r.detect_type() == SequenceType::Protein)
        {
            return Err(ReadmapError::InvalidArgument(format!(
                "read '{}' in {} is not a nucleotide sequence",
                read.id,
                query.display()
            )));
        }
        let translated: Vec<Sequence> = reads.iter().flat_map(six_frame_translations).collect();
        tracing::debug!(
            "Translated {} reads into {} frames",
            reads.len(),
            translated.len()
        );

        std::fs::create_dir_all(&self.workspace)?;
        let staged = tempfile::Builder::new()
            .prefix("readmap_frames_")
            .suffix(".fasta")
            .tempfile_in(&self.workspace)?;
        write_fasta(staged.path(), &translated)?;

        let positionals = PositionalArguments::new(staged.path(), database, output)?;
        let result = self.aligner.align(&positionals, &options);

        staged.close()?;
        result
    }
}

fn staged_name(query: &Path) -> String {
    let stem = query
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "query".to_string());
    format!("{}_frames.fasta", stem)
}

fn completed(invocation: Invocation) -> ReadmapResult<BlatRun> {
    invocation.into_run().ok_or_else(|| {
        ReadmapError::Other("aligner halted before execution".to_string())
    })
}

fn assigner() -> ReadAssigner<Blat> {
    ReadAssigner::new(Blat::from_config(&BlatConfig::default()))
}

/// Run `blat` on PATH (or `READMAP_BLAT`) with the default flags
pub fn assign_reads_to_database(
    query: &Path,
    database: &Path,
    output: &Path,
    params: &OptionMap,
) -> ReadmapResult<BlatRun> {
    completed(assigner().assign_reads_to_database(query, database, output, params)?)
}

pub fn assign_dna_reads_to_dna_database(
    query: &Path,
    database: &Path,
    output: &Path,
    params: &OptionMap,
) -> ReadmapResult<BlatRun> {
    completed(assigner().assign_dna_reads_to_dna_database(query, database, output, params)?)
}

pub fn assign_dna_reads_to_protein_database(
    query: &Path,
    database: &Path,
    output: &Path,
    params: &OptionMap,
) -> ReadmapResult<BlatRun> {
    completed(assigner().assign_dna_reads_to_protein_database(query, database, output, params)?)
}
