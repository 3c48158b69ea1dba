//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `booklint` binary.
pub struct LintCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl LintCommand {
    /// Creates a new command for the `booklint` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Points `XDG_CONFIG_HOME` at an isolated directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Adds a path argument.
    pub fn source(self, path: &Path) -> Self {
        let path = path.to_string_lossy().to_string();
        self.args([path])
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("booklint").expect("Failed to find booklint binary");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `check` command.
    pub fn check(self) -> Self {
        self.args(["check"])
    }

    /// Adds `--summary <name>`.
    pub fn with_summary(self, name: &str) -> Self {
        self.args(["--summary", name])
    }

    /// Adds `--strict`.
    pub fn with_strict(self) -> Self {
        self.args(["--strict"])
    }

    /// Adds `--format json`.
    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `-v`.
    pub fn verbose(self) -> Self {
        self.args(["-v"])
    }
}

impl Default for LintCommand {
    fn default() -> Self {
        Self::new()
    }
}
