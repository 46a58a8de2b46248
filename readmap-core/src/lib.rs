//! Core utilities and types shared across all readmap crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_or_default, save_config, Config};
pub use error::{ReadmapError, ReadmapResult};
pub use types::{OptionValue, SequenceType};

pub use system::{blat_override, config_path, readmap_home, workspace_dir};

/// Version information for the readmap project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
