//! Core error types for readmap

use thiserror::Error;

/// Main error type for readmap operations
#[derive(Error, Debug)]
pub enum ReadmapError {
    /// A required positional argument was never supplied
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The aligner ran and exited unsuccessfully
    #[error("{tool} failed with exit code {code}: {stderr}")]
    ExternalTool {
        tool: String,
        code: i32,
        stderr: String,
    },

    /// A report line violated the tabular layout or held a bad number
    #[error("Malformed report at line {line}{}: {reason}: '{raw}'", field_suffix(.field))]
    MalformedReport {
        line: usize,
        field: Option<&'static str>,
        reason: String,
        raw: String,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Other error: {0}")]
    Other(String),
}

fn field_suffix(field: &Option<&'static str>) -> String {
    match field {
        Some(name) => format!(" (field '{}')", name),
        None => String::new(),
    }
}

impl ReadmapError {
    /// Line number of a malformed report error, if this is one
    pub fn report_line(&self) -> Option<usize> {
        match self {
            ReadmapError::MalformedReport { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for readmap operations
pub type ReadmapResult<T> = Result<T, ReadmapError>;

impl From<serde_json::Error> for ReadmapError {
    fn from(err: serde_json::Error) -> Self {
        ReadmapError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for ReadmapError {
    fn from(err: anyhow::Error) -> Self {
        ReadmapError::Other(err.to_string())
    }
}
