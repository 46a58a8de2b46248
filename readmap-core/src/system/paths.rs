use std::path::PathBuf;

/// Environment variable naming the readmap home directory
pub const HOME_ENV: &str = "READMAP_HOME";
/// Environment variable overriding the BLAT binary location
pub const BLAT_ENV: &str = "READMAP_BLAT";
/// Environment variable overriding the scratch directory for staged files
pub const WORKSPACE_ENV: &str = "READMAP_WORKSPACE_DIR";

/// Get the readmap home directory
/// Checks READMAP_HOME environment variable, falls back to ${HOME}/.readmap
pub fn readmap_home() -> PathBuf {
    if let Ok(path) = std::env::var(HOME_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".readmap")
}

/// Location of the user configuration file
pub fn config_path() -> PathBuf {
    readmap_home().join("config.toml")
}

/// Directory for files staged before an aligner run (translated queries)
/// Checks READMAP_WORKSPACE_DIR, falls back to the system temp directory
pub fn workspace_dir() -> PathBuf {
    std::env::var(WORKSPACE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}

/// Binary path forced through READMAP_BLAT, if set
pub fn blat_override() -> Option<PathBuf> {
    std::env::var(BLAT_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Get a human-readable description of the current path configuration
pub fn describe_paths() -> String {
    format!(
        "readmap paths:\n  \
        Home: {}\n  \
        Config: {}\n  \
        Workspace: {}\n  \
        BLAT override: {}",
        readmap_home().display(),
        config_path().display(),
        workspace_dir().display(),
        blat_override()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string())
    )
}
