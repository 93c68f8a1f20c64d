// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Header line equivalence.

use crate::label::{labels_equal, LabelError};

/// Compare two header lines column by column.
///
/// Columns are split on single spaces and compared case-insensitively with
/// [`labels_equal`]. Every column pair is checked so each difference is
/// logged, not just the first one.
pub fn headers_equal(h1: &str, h2: &str) -> Result<bool, LabelError> {
    let columns1: Vec<&str> = h1.split(' ').collect();
    let columns2: Vec<&str> = h2.split(' ').collect();

    if columns1.len() != columns2.len() {
        tracing::warn!(
            actual = columns1.len(),
            expected = columns2.len(),
            "header column count differs"
        );
        return Ok(false);
    }

    let mut equal = true;
    for (c1, c2) in columns1.iter().zip(&columns2) {
        if !labels_equal(&c1.to_lowercase(), &c2.to_lowercase())? {
            tracing::warn!(actual = %c1, expected = %c2, "header label differs");
            equal = false;
        }
    }
    Ok(equal)
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
