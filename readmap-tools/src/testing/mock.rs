//! Mock aligner for testing workflows without the BLAT binary

use crate::blat::command::{compose, OptionMap, PositionalArguments};
use crate::blat::{BlatRun, Invocation};
use crate::traits::Aligner;
use readmap_core::{ReadmapError, ReadmapResult};
use std::path::Path;

/// One call made to [`MockAligner::align`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub positionals: PositionalArguments,
    pub options: OptionMap,
    /// Query file contents at call time, if it could be read
    pub query_contents: Option<String>,
}

/// Aligner that writes a canned report instead of running anything
#[derive(Debug, Default)]
pub struct MockAligner {
    report: String,
    failure: Option<(i32, String)>,
    halt: bool,
    calls: Vec<RecordedCall>,
}

impl MockAligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report text written to the output path on every call
    pub fn with_report(mut self, report: impl Into<String>) -> Self {
        self.report = report.into();
        self
    }

    /// Fail every call as if the tool exited with `code`
    pub fn failing(mut self, code: i32, stderr: impl Into<String>) -> Self {
        self.failure = Some((code, stderr.into()));
        self
    }

    pub fn halting(mut self) -> Self {
        self.halt = true;
        self
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }
}

impl Aligner for MockAligner {
    fn name(&self) -> &str {
        "mock"
    }

    fn align(
        &mut self,
        positionals: &PositionalArguments,
        options: &OptionMap,
    ) -> ReadmapResult<Invocation> {
        self.calls.push(RecordedCall {
            positionals: positionals.clone(),
            options: options.clone(),
            query_contents: std::fs::read_to_string(&positionals.query).ok(),
        });

        let command = compose("mock", Path::new("/"), options, Some(positionals))?;
        if self.halt {
            return Ok(Invocation::Halted { command });
        }
        if let Some((code, stderr)) = &self.failure {
            return Err(ReadmapError::ExternalTool {
                tool: self.name().to_string(),
                code: *code,
                stderr: stderr.clone(),
            });
        }

        std::fs::write(&positionals.output, &self.report)?;
        Ok(Invocation::Completed(BlatRun {
            command,
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
            output: positionals.output.clone(),
        }))
    }

    fn version(&self) -> ReadmapResult<String> {
        Ok("MockAligner 1.0.0".to_string())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn halts_before_exec(&self) -> bool {
        self.halt
    }
}
