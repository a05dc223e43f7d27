//! Test support utilities for ghenv integration tests.
//!
//! Remote access is exercised against a fake `gh` shell script placed
//! first on PATH inside a temp dir. The stub logs every argument vector
//! it receives, so tests can assert on exact call sequences.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated project dir and a stubbed `gh`.
///
/// No process-global state is mutated; child processes get their own
/// PATH and working directory, so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary directory holding the fake gh binary
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment (no fake gh installed).
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let bin = TempDir::new().expect("failed to create temp bin dir");

        Self { dir, bin }
    }

    /// Create a test environment with the given fake `gh` installed.
    #[cfg(unix)]
    pub fn with_gh(script: &str) -> Self {
        let t = Self::new();
        t.install_gh(script);
        t
    }

    /// Install a fake `gh` script into the stub bin directory.
    #[cfg(unix)]
    pub fn install_gh(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.gh_path();
        fs::write(&path, script).expect("failed to write gh stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod gh stub");
    }

    /// Path where the fake gh lives.
    pub fn gh_path(&self) -> PathBuf {
        self.bin.path().join("gh")
    }

    /// Create a ghenv command with the stub bin dir first on PATH.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghenv").expect("failed to find ghenv binary");
        let path = match std::env::var("PATH") {
            Ok(existing) => format!("{}:{}", self.bin.path().display(), existing),
            Err(_) => self.bin.path().display().to_string(),
        };
        cmd.env("PATH", path);
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Write a file into the project directory.
    pub fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).expect("failed to write file");
    }

    /// Read a file from the project directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }

    /// Check whether a file exists in the project directory.
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Argument vectors the fake gh was invoked with, in order.
    pub fn gh_calls(&self) -> Vec<String> {
        let log = self.bin.path().join("calls.log");
        if !log.exists() {
            return Vec::new();
        }
        fs::read_to_string(log)
            .expect("failed to read calls log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
