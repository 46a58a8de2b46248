//! Stand-in `blat` executable for process tests
//!
//! The stub records its arguments, copies a canned report to its last
//! argument (the output path) and exits with a chosen code. Run without
//! arguments it prints a usage banner like the real tool.

use anyhow::Result;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const STUB_VERSION: &str = "36x2";

pub struct StubBlat {
    binary: PathBuf,
    args_log: PathBuf,
}

impl StubBlat {
    /// Write an executable stub into `dir` that succeeds with `report`
    pub fn install(dir: &Path, report: &str) -> Result<Self> {
        Self::install_with_exit(dir, report, 0, "")
    }

    /// Write a stub that exits with `code`, printing `stderr`
    pub fn install_with_exit(dir: &Path, report: &str, code: i32, stderr: &str) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let binary = dir.join("blat");
        let report_path = dir.join("stub_report.txt");
        let stderr_path = dir.join("stub_stderr.txt");
        let args_log = dir.join("stub_args.txt");
        std::fs::write(&report_path, report)?;
        std::fs::write(&stderr_path, stderr)?;

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$#\" -eq 0 ]; then\n\
             \x20 echo \"blat - Standalone BLAT v. {version} fast sequence search command line tool\"\n\
             \x20 exit 255\n\
             fi\n\
             printf '%s\\n' \"$@\" > '{args}'\n\
             for last; do :; done\n\
             cat '{report}' > \"$last\"\n\
             cat '{stderr}' >&2\n\
             exit {code}\n",
            version = STUB_VERSION,
            args = args_log.display(),
            report = report_path.display(),
            stderr = stderr_path.display(),
            code = code,
        );
        std::fs::write(&binary, script)?;
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { binary, args_log })
    }

    pub fn path(&self) -> &Path {
        &self.binary
    }

    /// Arguments of the last invocation, one per entry
    pub fn recorded_args(&self) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(&self.args_log)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_stub_copies_report() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubBlat::install(dir.path(), "# Query: r\n").unwrap();
        let out = dir.path().join("out.txt");

        let status = Command::new(stub.path())
            .arg("/db.fa")
            .arg("/q.fa")
            .arg("-out=blast9")
            .arg(&out)
            .status()
            .unwrap();

        assert!(status.success());
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "# Query: r\n");
        assert_eq!(stub.recorded_args().unwrap()[2], "-out=blast9");
    }

    #[test]
    fn test_stub_usage_banner() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubBlat::install(dir.path(), "").unwrap();
        let output = Command::new(stub.path()).output().unwrap();

        assert_eq!(output.status.code(), Some(255));
        assert!(String::from_utf8_lossy(&output.stdout).contains("v. 36x2"));
    }
}
