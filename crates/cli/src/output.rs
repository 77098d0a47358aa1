// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Per-entry extraction diagnostics go to stdout alongside the
//! report echo; errors and warnings go to stderr with ANSI color
//! when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

/// ANSI color codes used for stderr diagnostics.
const RED: &str = "31";
const YELLOW: &str = "33";

/// Print an error message to stderr (red on a terminal).
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Error", RED, msg, is_tty);
}

/// Print a warning message to stderr (yellow on a terminal).
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Warning", YELLOW, msg, is_tty);
}

/// Write a labeled diagnostic line with explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    label: &str,
    color: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", color, label, msg);
    } else {
        let _ = writeln!(writer, "{}: {}", label, msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
