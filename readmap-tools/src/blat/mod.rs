//! BLAT aligner wrapper
//!
//! [`Blat`] holds the configured binary, working directory and default
//! flags. Once the three positional paths are set it composes the shell
//! command and either returns it untouched (halt-before-exec) or runs it
//! through `sh -c` and hands back a [`BlatRun`].

pub mod command;
pub mod locate;
pub mod options;
pub mod report;

use crate::traits::Aligner;
use command::{compose, OptionMap, PositionalArguments};
use readmap_core::config::BlatConfig;
use readmap_core::{blat_override, ReadmapError, ReadmapResult};
use report::{ParseMode, RawLines, ReportBlock, ReportRecords};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_BINARY: &str = "blat";

/// Where a [`Blat`] is in its compose/run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlatState {
    Unconfigured,
    PositionalsSet,
    Composed,
    Executed,
    HaltedBeforeExec,
}

/// Result of a finished aligner process
#[derive(Debug, Clone)]
pub struct BlatRun {
    pub command: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// Report written by the aligner
    pub output: PathBuf,
}

impl BlatRun {
    pub fn raw_lines(&self) -> ReadmapResult<RawLines<BufReader<File>>> {
        report::raw_lines(&self.output)
    }

    pub fn records(&self, mode: ParseMode) -> ReadmapResult<ReportRecords<BufReader<File>>> {
        report::parse_report(&self.output, mode)
    }

    pub fn blocks(&self, mode: ParseMode) -> ReadmapResult<Vec<ReportBlock>> {
        report::read_blocks_from_path(&self.output, mode)
    }
}

/// Outcome of asking the aligner to run
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Command composed but deliberately not executed
    Halted { command: String },
    Completed(BlatRun),
}

impl Invocation {
    pub fn command(&self) -> &str {
        match self {
            Invocation::Halted { command } => command,
            Invocation::Completed(run) => &run.command,
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Invocation::Halted { .. })
    }

    pub fn into_run(self) -> Option<BlatRun> {
        match self {
            Invocation::Halted { .. } => None,
            Invocation::Completed(run) => Some(run),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Blat {
    binary: String,
    working_dir: Option<PathBuf>,
    options: OptionMap,
    positionals: Option<PositionalArguments>,
    halt_exec: bool,
    state: BlatState,
    last_command: Option<String>,
}

impl Default for Blat {
    fn default() -> Self {
        Self::new()
    }
}

impl Blat {
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            working_dir: None,
            options: OptionMap::new(),
            positionals: None,
            halt_exec: false,
            state: BlatState::Unconfigured,
            last_command: None,
        }
    }

    /// Build from the `[blat]` config section; `READMAP_BLAT` wins over the
    /// configured binary
    pub fn from_config(config: &BlatConfig) -> Self {
        let binary = blat_override()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| config.binary.clone());
        let mut blat = Self::new()
            .with_binary(binary)
            .with_options(OptionMap::from(config.options.clone()));
        if let Some(dir) = &config.working_dir {
            blat = blat.with_working_dir(dir);
        }
        blat
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Apply flags on top of the current ones
    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = self.options.merged(&options);
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Compose commands without ever running them
    pub fn halt_before_exec(mut self, halt: bool) -> Self {
        self.halt_exec = halt;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionMap {
        &mut self.options
    }

    pub fn state(&self) -> BlatState {
        self.state
    }

    /// Last command composed, whether or not it ran
    pub fn command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Configured working directory, or the current one at call time
    pub fn working_dir(&self) -> ReadmapResult<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    pub fn set_positionals(&mut self, positionals: PositionalArguments) {
        self.positionals = Some(positionals);
        self.state = BlatState::PositionalsSet;
    }

    /// Set positionals from a `[query, database, output]` list
    pub fn input_as_list<P: AsRef<Path>>(&mut self, paths: &[P]) -> ReadmapResult<()> {
        let positionals = PositionalArguments::from_list(paths)?;
        self.set_positionals(positionals);
        Ok(())
    }

    pub fn compose(&mut self) -> ReadmapResult<String> {
        self.compose_with(&OptionMap::new())
    }

    fn compose_with(&mut self, extra: &OptionMap) -> ReadmapResult<String> {
        let working_dir = self.working_dir()?;
        let options = self.options.merged(extra);
        let command = compose(
            &self.binary,
            &working_dir,
            &options,
            self.positionals.as_ref(),
        )?;

        tracing::debug!("Composed BLAT command: {}", command);
        self.state = BlatState::Composed;
        self.last_command = Some(command.clone());
        Ok(command)
    }

    /// Compose and, unless halted, execute the command
    pub fn run(&mut self) -> ReadmapResult<Invocation> {
        let command = self.compose()?;
        self.execute(command)
    }

    fn execute(&mut self, command: String) -> ReadmapResult<Invocation> {
        if self.halt_exec {
            tracing::debug!("Halting before execution");
            self.state = BlatState::HaltedBeforeExec;
            return Ok(Invocation::Halted { command });
        }

        let output_path = match &self.positionals {
            Some(p) => p.output.clone(),
            None => {
                return Err(ReadmapError::MissingArgument(
                    "output path".to_string(),
                ))
            }
        };

        let working_dir = self.working_dir()?;
        locate::resolve_binary(&self.binary, &working_dir)?;

        tracing::info!("Running {}", command);
        let output = Command::new("sh").arg("-c").arg(&command).output()?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::warn!("{} exited with code {}", self.binary, exit_code);
            return Err(ReadmapError::ExternalTool {
                tool: self.binary.clone(),
                code: exit_code,
                stderr: stderr.trim().to_string(),
            });
        }

        self.state = BlatState::Executed;
        Ok(Invocation::Completed(BlatRun {
            command,
            exit_code,
            stdout,
            stderr,
            output: output_path,
        }))
    }
}

impl Aligner for Blat {
    fn name(&self) -> &str {
        &self.binary
    }

    fn align(
        &mut self,
        positionals: &PositionalArguments,
        options: &OptionMap,
    ) -> ReadmapResult<Invocation> {
        self.set_positionals(positionals.clone());
        let command = self.compose_with(options)?;
        self.execute(command)
    }

    fn version(&self) -> ReadmapResult<String> {
        let binary = locate::resolve_binary(&self.binary, &self.working_dir()?)?;
        locate::blat_version(&binary)
    }

    fn is_available(&self) -> bool {
        self.working_dir()
            .and_then(|dir| locate::resolve_binary(&self.binary, &dir))
            .is_ok()
    }

    fn halts_before_exec(&self) -> bool {
        self.halt_exec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use readmap_core::OptionValue;

    fn positionals(dir: &Path) -> PositionalArguments {
        PositionalArguments::new(
            dir.join("query.fasta"),
            dir.join("db.fasta"),
            dir.join("out.blast9"),
        )
        .unwrap()
    }

    #[test]
    fn test_compose_requires_positionals() {
        let mut blat = Blat::new().with_working_dir("/work");
        assert_eq!(blat.state(), BlatState::Unconfigured);

        let err = blat.compose().unwrap_err();
        assert!(matches!(err, ReadmapError::MissingArgument(_)));
        assert_eq!(blat.state(), BlatState::Unconfigured);
        assert_eq!(blat.command(), None);
    }

    #[test]
    fn test_state_transitions() {
        let mut blat = Blat::new().with_working_dir("/work").halt_before_exec(true);
        blat.input_as_list(&["/q.fa", "/db.fa", "/out.txt"]).unwrap();
        assert_eq!(blat.state(), BlatState::PositionalsSet);

        blat.compose().unwrap();
        assert_eq!(blat.state(), BlatState::Composed);

        let invocation = blat.run().unwrap();
        assert!(invocation.is_halted());
        assert_eq!(blat.state(), BlatState::HaltedBeforeExec);
        assert_eq!(
            invocation.command(),
            r#"cd "/work"; blat /db.fa /q.fa /out.txt"#
        );
    }

    #[test]
    fn test_compose_is_idempotent() {
        let mut blat = Blat::new()
            .with_working_dir("/work")
            .with_options(OptionMap::new().with("-minScore", 30).with("-dots", 5));
        blat.input_as_list(&["/q.fa", "/db.fa", "/out.txt"]).unwrap();

        let first = blat.compose().unwrap();
        let second = blat.compose().unwrap();
        assert_eq!(first, second);
        assert_eq!(blat.command(), Some(first.as_str()));
    }

    #[test]
    fn test_halted_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut blat = Blat::new()
            .with_binary("definitely-not-installed-blat")
            .with_working_dir(dir.path())
            .halt_before_exec(true);
        blat.set_positionals(positionals(dir.path()));

        let invocation = blat.run().unwrap();
        assert!(invocation.into_run().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_align_merges_per_call_options() {
        let mut blat = Blat::new()
            .with_working_dir("/work")
            .with_options(OptionMap::new().with("-out", "psl").with("-minScore", 30))
            .halt_before_exec(true);
        let args = PositionalArguments::new("/q.fa", "/db.fa", "/o.txt").unwrap();

        let invocation = blat
            .align(&args, &OptionMap::new().with("-out", "blast9"))
            .unwrap();
        assert_eq!(
            invocation.command(),
            r#"cd "/work"; blat /db.fa /q.fa -minScore=30 -out=blast9 /o.txt"#
        );
        // Defaults are left as configured
        assert_eq!(
            blat.options().get("-out"),
            Some(&OptionValue::Word("psl".into()))
        );
    }

    #[test]
    fn test_missing_binary_fails_before_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let mut blat = Blat::new()
            .with_binary("definitely-not-installed-blat")
            .with_working_dir(dir.path());
        blat.set_positionals(positionals(dir.path()));

        let err = blat.run().unwrap_err();
        assert!(matches!(err, ReadmapError::ToolNotFound(_)));
        assert_eq!(blat.state(), BlatState::Composed);
        assert!(!blat.is_available());
    }

    #[test]
    fn test_from_config() {
        let mut config = BlatConfig::default();
        config.working_dir = Some("/scratch".to_string());
        config
            .options
            .insert("-tileSize".to_string(), OptionValue::Integer(11));

        let blat = Blat::from_config(&config);
        assert_eq!(blat.working_dir().unwrap(), PathBuf::from("/scratch"));
        assert_eq!(blat.options().get("-tileSize"), Some(&OptionValue::Integer(11)));
    }
}
