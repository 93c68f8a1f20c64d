// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result dump checker
//!
//! Compares the query result dump written by a database engine under test
//! (`result.txt`) against a reference dump (`answer.txt`). Rows may appear in
//! any order within a query, and aggregate column labels may use either the
//! `countofx` or the `count(x)` spelling. The comparison itself lives in
//! [`resultcheck_compare`]; this crate adds argument parsing, config files,
//! report rendering and exit codes.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output_diagnostic;
pub mod report;
pub mod run;
