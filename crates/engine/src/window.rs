// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Page window calculation.
//!
//! Decides which page numbers a renderer offers as clickable pagers. Small
//! page counts show every page; larger counts show a fixed-width contiguous
//! window that tracks the current page and snaps to the first or last pages
//! near either boundary instead of shrinking.

use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;

/// Default number of pagers shown at once.
pub const DEFAULT_WINDOW_SIZE: u64 = 10;
/// Default number of pagers kept after the current page.
pub const DEFAULT_BUFFER_SIZE: u64 = 4;

/// Errors for window policies that cannot produce a fixed-width window.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("window size must be at least 1")]
    ZeroWindow,

    #[error("buffer size {buffer_size} must be smaller than window size {window_size}")]
    BufferTooLarge { window_size: u64, buffer_size: u64 },
}

/// Sizing of the sliding page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowPolicy {
    window_size: u64,
    buffer_size: u64,
}

impl WindowPolicy {
    pub fn new(window_size: u64, buffer_size: u64) -> Result<Self, PolicyError> {
        if window_size == 0 {
            return Err(PolicyError::ZeroWindow);
        }
        if buffer_size >= window_size {
            return Err(PolicyError::BufferTooLarge {
                window_size,
                buffer_size,
            });
        }
        Ok(Self {
            window_size,
            buffer_size,
        })
    }

    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    pub fn buffer_size(&self) -> u64 {
        self.buffer_size
    }

    /// Pages shown before the current page when the window is centered.
    fn lead(&self) -> u64 {
        self.window_size - 1 - self.buffer_size
    }

    /// Inclusive window bounds for `max_page > window_size`.
    fn bounds(&self, current: u64, max_page: u64) -> (u64, u64) {
        let lead = self.lead();
        if current <= lead + 1 {
            (1, self.window_size)
        } else if max_page.saturating_sub(current) <= self.buffer_size {
            (max_page - self.window_size + 1, max_page)
        } else {
            (current - lead, current + self.buffer_size)
        }
    }
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// How the page list is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Numbered pagers in a sliding window
    #[default]
    Numbered,
    /// A "page N" label with prev/next only
    Simple,
}

/// A single numbered pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub page: u64,
    pub active: bool,
}

/// The pagers a renderer should display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageWindow {
    /// Simple mode: no numbered pagers, only a label for `current`
    Simple { current: u64 },
    /// No pages exist; render one disabled placeholder pager
    Empty,
    /// Consecutive numbered pagers
    Populated { entries: Vec<PageEntry> },
}

impl PageWindow {
    /// Compute the window for `current` out of `max_page` pages.
    pub fn compute(current: u64, max_page: u64, mode: DisplayMode, policy: WindowPolicy) -> Self {
        if mode == DisplayMode::Simple {
            return PageWindow::Simple { current };
        }
        if max_page == 0 {
            return PageWindow::Empty;
        }

        let (left, right) = if max_page <= policy.window_size {
            (1, max_page)
        } else {
            policy.bounds(current, max_page)
        };

        let entries = (left..=right)
            .map(|page| PageEntry {
                page,
                active: page == current,
            })
            .collect();
        PageWindow::Populated { entries }
    }

    /// Numbered entries, empty for simple and placeholder windows.
    pub fn entries(&self) -> &[PageEntry] {
        match self {
            PageWindow::Populated { entries } => entries,
            PageWindow::Simple { .. } | PageWindow::Empty => &[],
        }
    }

    /// Page numbers in display order.
    pub fn pages(&self) -> Vec<u64> {
        self.entries().iter().map(|e| e.page).collect()
    }

    /// The entry marked active, if the current page is in the window.
    pub fn active(&self) -> Option<u64> {
        self.entries().iter().find(|e| e.active).map(|e| e.page)
    }

    /// Number of pager slots a renderer draws (the placeholder counts as one).
    pub fn slot_count(&self) -> usize {
        match self {
            PageWindow::Populated { entries } => entries.len(),
            PageWindow::Empty => 1,
            PageWindow::Simple { .. } => 0,
        }
    }
}
