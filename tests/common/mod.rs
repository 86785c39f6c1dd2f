//! Shared testing utilities for urbanenv CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the .env file in the work directory.
    pub fn env_path(&self) -> PathBuf {
        self.work_dir.join(".env")
    }

    /// Write .env content directly, bypassing the CLI.
    pub fn write_env(&self, content: &str) {
        fs::write(self.env_path(), content).expect("Failed to write test .env");
    }

    /// Read the .env file back.
    pub fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("Failed to read test .env")
    }

    /// Build a command for invoking the compiled `urbanenv` binary.
    ///
    /// Every catalog key is scrubbed from the child environment so values
    /// set on the CI host cannot overlay the file under test.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("urbanenv").expect("Failed to locate urbanenv binary");
        cmd.current_dir(&self.work_dir);
        for summary in urbanenv::vars_list().expect("Failed to load catalog") {
            cmd.env_remove(&summary.key);
        }
        cmd
    }

    /// Scaffold a default .env via `urbanenv init`.
    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }

    /// Assert the .env file exists.
    pub fn assert_env_exists(&self) {
        assert!(self.env_path().exists(), ".env file should exist");
    }
}
