// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View formatting and diagnostic output.

use crate::cli::{CliError, OutputFormat};
use paginate::{PageWindow, PaginationView};
use std::io::{self, IsTerminal, Write};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Write one view as a line in the requested format.
pub fn write_view<W: Write>(
    writer: &mut W,
    view: &PaginationView,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", format_view(view))?,
        OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(view)?)?,
    }
    Ok(())
}

/// One-line summary, e.g. `page 15/25 size 10 [10 11 12 13 14 (15) 16 17 18 19] prev next`.
pub fn format_view(view: &PaginationView) -> String {
    let mut line = format!(
        "page {}/{} size {}",
        view.current_page, view.max_page, view.page_size
    );
    if view.hidden {
        line.push_str(" hidden");
        return line;
    }

    let pagers = match &view.window {
        PageWindow::Simple { current } => format!("page {current}"),
        PageWindow::Empty => "-".to_string(),
        PageWindow::Populated { entries } => entries
            .iter()
            .map(|e| {
                if e.active {
                    format!("({})", e.page)
                } else {
                    e.page.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    };
    line.push_str(&format!(" [{pagers}]"));

    if view.prev.enabled {
        line.push_str(" prev");
    }
    if view.next.enabled {
        line.push_str(" next");
    }
    if view.disabled {
        line.push_str(" disabled");
    }
    line
}

/// Echo a change notification to stderr.
pub fn print_change(page: u64, page_size: u64) {
    let _ = writeln!(io::stderr(), "onChange({}, {})", page, page_size);
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}
