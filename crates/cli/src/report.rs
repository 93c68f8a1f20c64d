// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison report rendering for text and JSON modes.

use crate::cli::OutputFormat;
use resultcheck_compare::{Mismatch, MismatchKind, Summary};
use serde::Serialize;
use std::io::Write;

/// Success line printed when every query matches
pub const SUCCESS_MESSAGE: &str = "Results Matched Successfully";

/// Outcome of one comparison, as reported to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matched: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MismatchKind>,
    /// One-based number of the failing query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Mismatch>,
}

impl Report {
    pub fn new(outcome: Result<Summary, Mismatch>) -> Self {
        match outcome {
            Ok(summary) => Self {
                matched: true,
                message: SUCCESS_MESSAGE.to_string(),
                kind: None,
                query: None,
                summary: Some(summary),
                mismatch: None,
            },
            Err(mismatch) => Self {
                matched: false,
                message: mismatch.to_string(),
                kind: Some(mismatch.kind()),
                query: mismatch.query_number(),
                summary: None,
                mismatch: Some(mismatch),
            },
        }
    }

    /// Write the report.
    ///
    /// The verdict goes to `out`. In text mode, mismatch details that help
    /// locate the difference go to `err`.
    pub fn write<O: Write, E: Write>(
        &self,
        format: OutputFormat,
        out: &mut O,
        err: &mut E,
    ) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => {
                self.write_text(out)?;
                if let Some(mismatch) = &self.mismatch {
                    write_details(mismatch, err)?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.matched {
            writeln!(out, "{}", self.message)
        } else {
            writeln!(out, "Error: {}", self.message)
        }
    }
}

fn write_details<W: Write>(mismatch: &Mismatch, err: &mut W) -> std::io::Result<()> {
    match mismatch {
        Mismatch::LengthMismatch { actual, expected } => {
            writeln!(err, "  actual lines:   {actual}")?;
            writeln!(err, "  expected lines: {expected}")
        }
        Mismatch::HeaderMismatch {
            actual, expected, ..
        } => {
            writeln!(err, "  actual header:   {actual}")?;
            writeln!(err, "  expected header: {expected}")
        }
        Mismatch::RowSetMismatch {
            missing,
            unexpected,
            ..
        } => {
            for row in missing {
                writeln!(err, "  missing:    {row}")?;
            }
            for row in unexpected {
                writeln!(err, "  unexpected: {row}")?;
            }
            Ok(())
        }
        Mismatch::MalformedAggregationLabel { label, .. } => {
            writeln!(err, "  no parenthesized column in label: {label}")
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
