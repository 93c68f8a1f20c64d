// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};
use resultcheck_compare::{BlockLayout, RowMatch};
use std::path::PathBuf;

/// Compare query result dumps from a candidate and a reference engine
#[derive(Parser, Clone, Debug)]
#[command(name = "resultcheck", version, about = "Compare query result dumps")]
pub struct Cli {
    /// Result dump produced by the engine under test [default: result.txt]
    #[arg(long, value_name = "PATH", env = "RESULTCHECK_ACTUAL")]
    pub actual: Option<PathBuf>,

    /// Reference result dump [default: answer.txt]
    #[arg(long, value_name = "PATH", env = "RESULTCHECK_EXPECTED")]
    pub expected: Option<PathBuf>,

    /// How separator lines frame each query block [default: underlined]
    ///
    /// Dumps written as header, rows, then one `-` line per result set need
    /// trailing; with underlined, a query that returns no rows shifts
    /// every later block.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// How rows within a block are matched
    #[arg(long, value_enum)]
    pub row_match: Option<RowMatchArg>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// TOML file with default paths and comparison options
    #[arg(long, value_name = "PATH", env = "RESULTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log block-level progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Header, separator, rows, separator
    Underlined,
    /// Header, rows, separator
    Trailing,
}

impl From<LayoutArg> for BlockLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Underlined => BlockLayout::Underlined,
            LayoutArg::Trailing => BlockLayout::Trailing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RowMatchArg {
    /// Sort rows and compare in order
    Sorted,
    /// Compare row occurrence counts
    Multiset,
}

impl From<RowMatchArg> for RowMatch {
    fn from(arg: RowMatchArg) -> Self {
        match arg {
            RowMatchArg::Sorted => RowMatch::Sorted,
            RowMatchArg::Multiset => RowMatch::Multiset,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
