// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation-label equivalence.
//!
//! Engines spell aggregate columns differently: one emits `countofsid`, the
//! other `count(sid)`. Labels are equal when they match exactly or when the
//! shorthand form names the same column as the call form.

use thiserror::Error;

/// Shorthand prefix paired with its canonical function name.
const AGGREGATIONS: [(&str, &str); 5] = [
    ("countof", "count"),
    ("avgof", "avg"),
    ("minof", "min"),
    ("maxof", "max"),
    ("sumof", "sum"),
];

/// Errors raised while normalizing a label pair
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("label '{label}' has no parenthesized column for '{function}'")]
    MissingParenthesizedGroup { label: String, function: String },
}

/// Compare two lowercased column labels.
pub fn labels_equal(v1: &str, v2: &str) -> Result<bool, LabelError> {
    if v1 == v2 {
        return Ok(true);
    }

    let Some((prefix, function)) = AGGREGATIONS
        .iter()
        .find(|(prefix, _)| v1.starts_with(prefix))
    else {
        return Ok(false);
    };

    if !v2.contains(function) {
        return Ok(false);
    }

    let column = parenthesized(v2).ok_or_else(|| LabelError::MissingParenthesizedGroup {
        label: v2.to_string(),
        function: (*function).to_string(),
    })?;

    let remainder = &v1[prefix.len()..];
    let remainder = unwrap_parens(remainder).unwrap_or(remainder);
    Ok(remainder == column)
}

/// Content between the first `(` and the last `)`.
fn parenthesized(label: &str) -> Option<&str> {
    let open = label.find('(')?;
    let close = label.rfind(')')?;
    (close > open).then(|| &label[open + 1..close])
}

/// Strip one enclosing pair of parentheses.
fn unwrap_parens(s: &str) -> Option<&str> {
    s.strip_prefix('(')?.strip_suffix(')')
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
