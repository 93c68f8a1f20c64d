// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Order-insensitive comparison of query result dumps.
//!
//! A dump is a sequence of per-query blocks: a header line naming the
//! columns, the result rows, and separator lines (any line containing `-`)
//! marking block boundaries. Two dumps match when every header matches
//! under aggregation-label normalization (`countof(x)` ~ `count(x)`) and
//! every block holds the same rows, in any order.

mod comparator;
mod header;
mod label;
mod lines;
mod mismatch;

#[cfg(test)]
mod test_capture;

pub use comparator::{compare, BlockLayout, Comparator, RowMatch, Summary};
pub use header::headers_equal;
pub use label::{labels_equal, LabelError};
pub use lines::{is_separator, Lines};
pub use mismatch::{Mismatch, MismatchKind};
