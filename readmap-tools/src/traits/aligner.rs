/// Traits for alignment tools
use crate::blat::command::{OptionMap, PositionalArguments};
use crate::blat::Invocation;
use readmap_core::ReadmapResult;

/// An external aligner driven through query, database and output files
pub trait Aligner: Send {
    /// Short tool name used in logs and errors
    fn name(&self) -> &str;

    /// Align `query` against `database`, writing the report to `output`
    ///
    /// `options` are applied on top of whatever flags the aligner was
    /// configured with.
    fn align(
        &mut self,
        positionals: &PositionalArguments,
        options: &OptionMap,
    ) -> ReadmapResult<Invocation>;

    /// Get tool version
    fn version(&self) -> ReadmapResult<String>;

    /// Check if tool is available
    fn is_available(&self) -> bool;

    /// Whether `align` only composes the command
    fn halts_before_exec(&self) -> bool {
        false
    }
}
