//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_MANIFEST;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default source directory
    pub source: Option<PathBuf>,

    /// Manifest filename inside the source directory
    pub summary: Option<String>,

    /// Fail the run when bad links are found
    pub strict: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/booklint/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("booklint")
            .join("config.toml")
    }

    /// Resolve the source directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `SOURCE` argument
    /// 2. Config file `source` setting
    /// 3. Current working directory
    pub fn source_dir(&self, cli_source: Option<&PathBuf>) -> PathBuf {
        cli_source
            .cloned()
            .or_else(|| self.source.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the manifest filename: CLI, then config, then `SUMMARY.md`.
    pub fn manifest_name(&self, cli_summary: Option<&str>) -> String {
        cli_summary
            .map(str::to_string)
            .or_else(|| self.summary.clone())
            .unwrap_or_else(|| DEFAULT_MANIFEST.to_string())
    }

    /// Strict mode is on if either the CLI flag or the config enables it.
    pub fn strict(&self, cli_strict: bool) -> bool {
        cli_strict || self.strict.unwrap_or(false)
    }
}
