// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr, colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RED: &str = "31";
const YELLOW: &str = "33";

/// Print `Error: <msg>` to stderr.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_diagnostic(writer, "Error", RED, msg, is_terminal);
}

/// Write `Warning: <msg>` to `writer`, colored when stderr is a terminal.
pub fn write_warning<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_diagnostic(writer, "Warning", YELLOW, msg, is_terminal);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    msg: impl Display,
    is_terminal: bool,
) {
    let _ = if is_terminal {
        writeln!(writer, "\x1b[{color}m{label}: {msg}\x1b[0m")
    } else {
        writeln!(writer, "{label}: {msg}")
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
