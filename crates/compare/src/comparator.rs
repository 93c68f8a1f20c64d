// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Block scanner comparing two result dumps.

use crate::header::headers_equal;
use crate::label::LabelError;
use crate::lines::{is_separator, Lines};
use crate::mismatch::Mismatch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How separator lines frame each query block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockLayout {
    /// `header`, separator, rows, separator
    #[default]
    Underlined,
    /// `header`, rows, separator, as written by dumps that emit one `-` line
    /// after each result set
    Trailing,
}

/// How the rows of a block are matched
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowMatch {
    /// Sort both sides and compare as sequences
    #[default]
    Sorted,
    /// Compare per-row occurrence counts
    Multiset,
}

/// Totals for a successful comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of closed query blocks
    pub queries: usize,
    /// Number of data rows compared on each side
    pub rows: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    AtHeader,
    AfterHeader,
    AccumulatingRows,
}

/// Compares dumps block by block, stopping at the first mismatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    layout: BlockLayout,
    row_match: RowMatch,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: BlockLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn row_match(mut self, row_match: RowMatch) -> Self {
        self.row_match = row_match;
        self
    }

    /// Compare `actual` against `expected`.
    ///
    /// Rows in a block that is never closed by a separator are not compared.
    pub fn compare(&self, actual: &Lines, expected: &Lines) -> Result<Summary, Mismatch> {
        if actual.len() != expected.len() {
            return Err(Mismatch::LengthMismatch {
                actual: actual.len(),
                expected: expected.len(),
            });
        }

        let mut state = ScanState::AtHeader;
        let mut bucket_a: Vec<&str> = Vec::new();
        let mut bucket_b: Vec<&str> = Vec::new();
        let mut summary = Summary::default();

        for (a, e) in actual.iter().zip(expected.iter()) {
            let shared_separator = a == e && is_separator(a);
            state = match state {
                ScanState::AtHeader => {
                    check_header(summary.queries, a, e)?;
                    // A shared separator in header position still marks the
                    // next line as a header in the trailing layout.
                    if shared_separator && self.layout == BlockLayout::Trailing {
                        ScanState::AtHeader
                    } else {
                        ScanState::AfterHeader
                    }
                }
                ScanState::AfterHeader
                    if shared_separator && self.layout == BlockLayout::Underlined =>
                {
                    ScanState::AccumulatingRows
                }
                _ if shared_separator => {
                    self.check_rows(summary.queries, &mut bucket_a, &mut bucket_b)?;
                    tracing::debug!(
                        query = summary.queries + 1,
                        rows = bucket_a.len(),
                        "query block matched"
                    );
                    summary.rows += bucket_a.len();
                    summary.queries += 1;
                    bucket_a.clear();
                    bucket_b.clear();
                    ScanState::AtHeader
                }
                _ => {
                    bucket_a.push(a);
                    bucket_b.push(e);
                    ScanState::AccumulatingRows
                }
            };
        }

        if !bucket_a.is_empty() {
            tracing::debug!(
                rows = bucket_a.len(),
                "unterminated trailing block not compared"
            );
        }

        Ok(summary)
    }

    fn check_rows(
        &self,
        query_index: usize,
        bucket_a: &mut [&str],
        bucket_b: &mut [&str],
    ) -> Result<(), Mismatch> {
        let equal = match self.row_match {
            RowMatch::Sorted => {
                bucket_a.sort_unstable();
                bucket_b.sort_unstable();
                bucket_a == bucket_b
            }
            RowMatch::Multiset => row_balance(bucket_a, bucket_b).is_empty(),
        };
        if equal {
            return Ok(());
        }

        let (missing, unexpected) = split_balance(row_balance(bucket_a, bucket_b));
        Err(Mismatch::RowSetMismatch {
            query_index,
            missing,
            unexpected,
        })
    }
}

/// Compare `actual` against `expected` with the default layout and row matching.
pub fn compare(actual: &Lines, expected: &Lines) -> Result<Summary, Mismatch> {
    Comparator::new().compare(actual, expected)
}

fn check_header(query_index: usize, actual: &str, expected: &str) -> Result<(), Mismatch> {
    match headers_equal(actual, expected) {
        Ok(true) => Ok(()),
        Ok(false) => Err(Mismatch::HeaderMismatch {
            query_index,
            actual: actual.to_string(),
            expected: expected.to_string(),
        }),
        Err(LabelError::MissingParenthesizedGroup { label, .. }) => {
            Err(Mismatch::MalformedAggregationLabel { query_index, label })
        }
    }
}

/// Per-row count of expected occurrences minus actual occurrences, zeros dropped.
fn row_balance<'a>(actual: &[&'a str], expected: &[&'a str]) -> BTreeMap<&'a str, isize> {
    let mut balance: BTreeMap<&str, isize> = BTreeMap::new();
    for &row in expected {
        *balance.entry(row).or_default() += 1;
    }
    for &row in actual {
        *balance.entry(row).or_default() -= 1;
    }
    balance.retain(|_, n| *n != 0);
    balance
}

/// Split a row balance into (missing, unexpected) row lists.
fn split_balance(balance: BTreeMap<&str, isize>) -> (Vec<String>, Vec<String>) {
    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (row, n) in balance {
        let target = if n > 0 { &mut missing } else { &mut unexpected };
        target.extend(std::iter::repeat(row.to_string()).take(n.unsigned_abs()));
    }
    (missing, unexpected)
}

#[cfg(test)]
#[path = "comparator_tests.rs"]
mod tests;
