// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal diagnostics raised while resolving a configuration.
//!
//! Warnings go to stderr by default, in yellow when stderr is a terminal.
//! Embedders can route them elsewhere with a [`DiagnosticSink`].

use std::io::{self, IsTerminal, Write};
use thiserror::Error;

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;

/// Usage-pattern problems detected at resolution time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    #[error(
        "a controlled `current` page was provided without an `on_change` listener; \
         the pagination control will be read-only"
    )]
    ReadOnlyControlledCurrent,
}

/// Receiver for diagnostics emitted by a controller.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Sink that prints each diagnostic as a warning on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        print_warning(diagnostic);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

/// Write a warning message to a writer with explicit terminal flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}
