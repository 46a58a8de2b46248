//! Test environment management
//!
//! Provides isolated test environments with automatic cleanup using RAII.

use crate::fixtures;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated directory tree with the fixture inputs written out
///
/// `READMAP_HOME` and `READMAP_WORKSPACE_DIR` point into the tree until the
/// environment is dropped, so tests using it should be `#[serial]`.
pub struct TestEnvironment {
    temp_dir: TempDir,
    saved_env: HashMap<&'static str, Option<String>>,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("readmap-test")
            .context("Failed to create temporary directory")?;
        let root = temp_dir.path();

        std::fs::create_dir_all(root.join("home"))?;
        std::fs::create_dir_all(root.join("workspace"))?;
        std::fs::create_dir_all(root.join("data"))?;
        std::fs::write(root.join("data").join("query.fasta"), fixtures::QUERY_FASTA)?;
        std::fs::write(root.join("data").join("db_dna.fasta"), fixtures::DNA_DATABASE_FASTA)?;
        std::fs::write(
            root.join("data").join("db_prot.fasta"),
            fixtures::PROTEIN_DATABASE_FASTA,
        )?;

        let mut env = Self {
            temp_dir,
            saved_env: HashMap::new(),
        };
        env.set_var("READMAP_HOME", env.home_dir());
        env.set_var("READMAP_WORKSPACE_DIR", env.workspace_dir());
        Ok(env)
    }

    /// Set an environment variable, restoring the old value on drop
    pub fn set_var(&mut self, key: &'static str, value: impl AsRef<std::ffi::OsStr>) {
        self.saved_env
            .entry(key)
            .or_insert_with(|| std::env::var(key).ok());
        std::env::set_var(key, value);
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home_dir(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn workspace_dir(&self) -> PathBuf {
        self.root().join("workspace")
    }

    pub fn query_path(&self) -> PathBuf {
        self.root().join("data").join("query.fasta")
    }

    pub fn dna_database_path(&self) -> PathBuf {
        self.root().join("data").join("db_dna.fasta")
    }

    pub fn protein_database_path(&self) -> PathBuf {
        self.root().join("data").join("db_prot.fasta")
    }

    /// Where a test run should write its report
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write a file under the environment root
    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, content)?;
        Ok(full_path)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        for (key, value) in &self.saved_env {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
