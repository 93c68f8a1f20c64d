// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trimmed line sequences read from result dumps.

use std::ops::Index;
use std::path::Path;

/// Returns true when `line` marks a block boundary.
pub fn is_separator(line: &str) -> bool {
    line.contains('-')
}

/// An immutable sequence of whitespace-trimmed lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lines {
    lines: Vec<String>,
}

impl Lines {
    /// Split `text` into lines, trimming each one.
    ///
    /// A trailing newline does not produce an extra empty line.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    /// Read and split a dump file.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|l| l.as_ref().trim().to_string())
                .collect(),
        }
    }
}

impl Index<usize> for Lines {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
