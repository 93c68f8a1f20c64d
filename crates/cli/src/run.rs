// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Load both dumps, compare them, and report.

use crate::cli::Cli;
use crate::config::{ConfigError, Settings};
use crate::output_diagnostic::write_warning;
use crate::report::Report;
use resultcheck_compare::Lines;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    /// Every query matched
    pub const SUCCESS: i32 = 0;
    /// The dumps differ
    pub const MISMATCH: i32 = 1;
    /// The dumps or config could not be read
    pub const ERROR: i32 = 2;
}

/// Errors that stop a run before a verdict is reached
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read result dump '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Run one comparison and return the process exit code.
pub fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> Result<i32, RunError> {
    let settings = Settings::from_cli(cli)?;
    tracing::debug!(
        actual = %settings.actual.display(),
        expected = %settings.expected.display(),
        layout = ?settings.layout,
        row_match = ?settings.row_match,
        "comparing result dumps"
    );

    let actual = read_dump(&settings.actual)?;
    let expected = read_dump(&settings.expected)?;
    if actual.is_empty() && expected.is_empty() {
        write_warning(
            err,
            "both result dumps are empty",
            io::stderr().is_terminal(),
        );
    }

    let report = Report::new(settings.comparator().compare(&actual, &expected));
    report.write(cli.output_format, out, err)?;
    out.flush()?;

    Ok(if report.matched {
        exit_codes::SUCCESS
    } else {
        exit_codes::MISMATCH
    })
}

fn read_dump(path: &Path) -> Result<Lines, RunError> {
    Lines::read(path).map_err(|source| RunError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
