//! Locating the aligner binary on disk

use readmap_core::{ReadmapError, ReadmapResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolve a configured binary to an executable path
///
/// Names containing a path separator are taken as paths (relative ones
/// against `working_dir`); bare names are looked up on `PATH`.
pub fn resolve_binary(binary: &str, working_dir: &Path) -> ReadmapResult<PathBuf> {
    if binary.is_empty() {
        return Err(ReadmapError::MissingArgument("aligner binary".to_string()));
    }

    if binary.contains(std::path::MAIN_SEPARATOR) {
        let path = Path::new(binary);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            working_dir.join(path)
        };
        return if path.is_file() {
            Ok(path)
        } else {
            Err(ReadmapError::ToolNotFound(path.display().to_string()))
        };
    }

    which::which(binary).map_err(|e| {
        tracing::debug!("Lookup of {} on PATH failed: {}", binary, e);
        ReadmapError::ToolNotFound(binary.to_string())
    })
}

/// Version reported in the aligner's usage banner, e.g. `36x2`
pub fn blat_version(binary: &Path) -> ReadmapResult<String> {
    // Run without arguments, blat prints its usage and exits non-zero
    let output = Command::new(binary).output()?;
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    parse_version(&text).ok_or_else(|| {
        ReadmapError::Parse(format!(
            "no version found in usage output of {}",
            binary.display()
        ))
    })
}

fn parse_version(usage: &str) -> Option<String> {
    let mut words = usage.split_whitespace();
    while let Some(word) = words.next() {
        if word == "v." {
            return words.next().map(str::to_string);
        }
    }
    None
}
