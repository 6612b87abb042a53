// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine-owned pagination state.

use serde::Serialize;
use std::ops::Range;

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

/// Current page and derived bounds.
///
/// `current_page` is within `1..=max_page`, or `0` when there are no pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub current_page: u64,
    pub max_page: u64,
    pub page_size: u64,
    pub total: u64,
}

impl PaginationState {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.max_page
    }

    /// True when there are no pages to show.
    pub fn is_empty(&self) -> bool {
        self.max_page == 0
    }

    /// Item indices (0-based, end exclusive) shown on the current page.
    pub fn item_range(&self) -> Range<u64> {
        if self.current_page == 0 {
            return 0..0;
        }
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total);
        let end = start.saturating_add(self.page_size).min(self.total);
        start..end
    }
}

/// Clamp an arbitrary requested page into `1..=max_page` (`0` when there are no pages).
pub fn clamp_target(target: i64, max_page: u64) -> u64 {
    if max_page == 0 {
        return 0;
    }
    u64::try_from(target).map_or(1, |page| page.clamp(1, max_page))
}

/// Clamp a resolved current page into `1..=max_page` (`0` when there are no pages).
pub fn clamp_current(current: u64, max_page: u64) -> u64 {
    if max_page == 0 {
        return 0;
    }
    current.clamp(1, max_page)
}
