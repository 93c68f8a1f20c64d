// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison settings from the CLI and an optional TOML config file.

use crate::cli::Cli;
use resultcheck_compare::{BlockLayout, Comparator, RowMatch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dump written by the engine under test
pub const DEFAULT_ACTUAL: &str = "result.txt";
/// Dump written by the reference engine
pub const DEFAULT_EXPECTED: &str = "answer.txt";

/// Errors that can occur when loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a config file
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Candidate dump, relative to the config file
    #[serde(default)]
    pub actual: Option<PathBuf>,

    /// Reference dump, relative to the config file
    #[serde(default)]
    pub expected: Option<PathBuf>,

    #[serde(default)]
    pub layout: Option<BlockLayout>,

    #[serde(default)]
    pub row_match: Option<RowMatch>,
}

impl FileConfig {
    /// Load a config file, resolving its paths against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.display().to_string(),
                source,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.actual = config.actual.map(|p| base.join(p));
        config.expected = config.expected.map(|p| base.join(p));
        Ok(config)
    }
}

/// Fully resolved settings for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub actual: PathBuf,
    pub expected: PathBuf,
    pub layout: BlockLayout,
    pub row_match: RowMatch,
}

impl Settings {
    /// Merge CLI arguments over the config file over built-in defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        Self {
            actual: cli
                .actual
                .clone()
                .or(file.actual)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ACTUAL)),
            expected: cli
                .expected
                .clone()
                .or(file.expected)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPECTED)),
            layout: cli
                .layout
                .map(BlockLayout::from)
                .or(file.layout)
                .unwrap_or_default(),
            row_match: cli
                .row_match
                .map(RowMatch::from)
                .or(file.row_match)
                .unwrap_or_default(),
        }
    }

    /// Load the config file named by the CLI, if any, and resolve.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(cli, file))
    }

    pub fn comparator(&self) -> Comparator {
        Comparator::new()
            .layout(self.layout)
            .row_match(self.row_match)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
