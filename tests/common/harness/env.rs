//! Isolated test environment with temp directories.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use super::LintCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated source tree plus an empty config home.
///
/// Both directories are removed when the TestEnv is dropped.
pub struct TestEnv {
    _temp_dir: TempDir,
    source_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates an empty source directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source_dir = temp_dir.path().join("docs");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir(&source_dir).expect("Failed to create source directory");
        std::fs::create_dir(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            source_dir,
            config_home,
        }
    }

    /// Returns the path to the source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the directory used as `XDG_CONFIG_HOME` for commands.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Writes the manifest under its default name.
    pub fn summary(&self, content: &str) -> &Self {
        self.write_file("SUMMARY.md", content)
    }

    /// Writes a file into the source directory.
    pub fn write_file(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.source_dir.join(name), content).expect("Failed to write file");
        self
    }

    /// Writes `booklint/config.toml` into the isolated config home.
    pub fn write_config(&self, content: &str) -> &Self {
        let dir = self.config_home.join("booklint");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
        self
    }

    /// Creates a LintCommand configured for this environment.
    pub fn cmd(&self) -> LintCommand {
        LintCommand::new().config_home(&self.config_home)
    }

    /// Creates a `check` command pointed at the source directory.
    pub fn check(&self) -> LintCommand {
        self.cmd().check().source(&self.source_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
