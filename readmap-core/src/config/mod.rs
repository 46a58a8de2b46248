//! Configuration types for readmap

use crate::types::OptionValue;
use crate::ReadmapError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub blat: BlatConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlatConfig {
    /// Binary name or path; bare names are looked up on PATH
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Directory the aligner is started in (current directory when unset)
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Flags merged under any per-run options, e.g. `"-minScore" = 30`
    #[serde(default)]
    pub options: IndexMap<String, OptionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Keep parsing past malformed lines instead of failing on the first
    #[serde(default)]
    pub lenient: bool,
}

fn default_binary() -> String {
    "blat".to_string()
}

impl Default for BlatConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            working_dir: None,
            options: IndexMap::new(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ReadmapError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| ReadmapError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load the file if it exists, otherwise fall back to defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ReadmapError> {
    let path = path.as_ref();
    if path.exists() {
        tracing::debug!("Loading configuration from {}", path.display());
        load_config(path)
    } else {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ReadmapError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ReadmapError::Configuration(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.blat.binary, "blat");
        assert_eq!(config.blat.working_dir, None);
        assert!(config.blat.options.is_empty());
        assert!(!config.report.lenient);
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[blat]
binary = "/opt/blat/bin/blat"
working_dir = "/scratch"

[blat.options]
"-minScore" = 30
"-minIdentity" = 90.5
"-ooc" = "11.ooc"

[report]
lenient = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.blat.binary, "/opt/blat/bin/blat");
        assert_eq!(config.blat.working_dir, Some("/scratch".to_string()));
        assert_eq!(
            config.blat.options.get("-minScore"),
            Some(&OptionValue::Integer(30))
        );
        assert_eq!(
            config.blat.options.get("-minIdentity"),
            Some(&OptionValue::Float(90.5))
        );
        assert_eq!(
            config.blat.options.get("-ooc"),
            Some(&OptionValue::Word("11.ooc".to_string()))
        );
        assert!(config.report.lenient);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[report]
lenient = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert!(config.report.lenient);
        assert_eq!(config.blat.binary, "blat");
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            ReadmapError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            ReadmapError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.blat.binary, "blat");
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.blat.binary = "blat-34".to_string();
        config.blat.options.insert("-tileSize".to_string(), OptionValue::Integer(11));
        config.blat.options.insert("-out".to_string(), OptionValue::Word("blast9".to_string()));
        config.report.lenient = true;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded.blat.binary, "blat-34");
        assert_eq!(loaded.blat.options, config.blat.options);
        assert!(loaded.report.lenient);
    }
}
