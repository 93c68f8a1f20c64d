// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mismatch taxonomy reported by the comparator.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The first difference found between two dumps
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    #[error("different length")]
    LengthMismatch { actual: usize, expected: usize },

    #[error("[query {}] query header not the same", .query_index + 1)]
    HeaderMismatch {
        query_index: usize,
        actual: String,
        expected: String,
    },

    #[error("[query {}] values not the same", .query_index + 1)]
    RowSetMismatch {
        query_index: usize,
        /// Rows the reference has and the candidate lacks
        missing: Vec<String>,
        /// Rows the candidate has and the reference lacks
        unexpected: Vec<String>,
    },

    #[error("[query {}] malformed aggregation label '{label}'", .query_index + 1)]
    MalformedAggregationLabel { query_index: usize, label: String },
}

/// Fieldless discriminant of [`Mismatch`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    LengthMismatch,
    HeaderMismatch,
    RowSetMismatch,
    MalformedAggregationLabel,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::LengthMismatch => write!(f, "length_mismatch"),
            MismatchKind::HeaderMismatch => write!(f, "header_mismatch"),
            MismatchKind::RowSetMismatch => write!(f, "row_set_mismatch"),
            MismatchKind::MalformedAggregationLabel => write!(f, "malformed_aggregation_label"),
        }
    }
}

impl Mismatch {
    pub fn kind(&self) -> MismatchKind {
        match self {
            Mismatch::LengthMismatch { .. } => MismatchKind::LengthMismatch,
            Mismatch::HeaderMismatch { .. } => MismatchKind::HeaderMismatch,
            Mismatch::RowSetMismatch { .. } => MismatchKind::RowSetMismatch,
            Mismatch::MalformedAggregationLabel { .. } => MismatchKind::MalformedAggregationLabel,
        }
    }

    /// Zero-based index of the failing query, if the mismatch is per-query.
    pub fn query_index(&self) -> Option<usize> {
        match self {
            Mismatch::LengthMismatch { .. } => None,
            Mismatch::HeaderMismatch { query_index, .. }
            | Mismatch::RowSetMismatch { query_index, .. }
            | Mismatch::MalformedAggregationLabel { query_index, .. } => Some(*query_index),
        }
    }

    /// One-based query number as shown in messages.
    pub fn query_number(&self) -> Option<usize> {
        self.query_index().map(|i| i + 1)
    }

    /// The failure category without the query prefix.
    pub fn message(&self) -> &'static str {
        match self {
            Mismatch::LengthMismatch { .. } => "different length",
            Mismatch::HeaderMismatch { .. } => "query header not the same",
            Mismatch::RowSetMismatch { .. } => "values not the same",
            Mismatch::MalformedAggregationLabel { .. } => "malformed aggregation label",
        }
    }
}

#[cfg(test)]
#[path = "mismatch_tests.rs"]
mod tests;
