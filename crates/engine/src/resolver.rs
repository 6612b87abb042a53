// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns a configuration into a clamped pagination state.

use crate::config::PaginationConfig;
use crate::diagnostic::Diagnostic;
use crate::page_count::max_page;
use crate::state::{clamp_current, PaginationState};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Result of resolving a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub state: PaginationState,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve the initial state for `config`.
///
/// The current page is the controlled value when one is supplied, else the
/// configured initial page, clamped into the page bounds.
pub fn resolve(config: &PaginationConfig, has_listener: bool) -> Resolution {
    let mut diagnostics = Vec::new();
    if is_read_only(config, has_listener) {
        diagnostics.push(Diagnostic::ReadOnlyControlledCurrent);
    }
    Resolution {
        state: settle(config, config.current.value()),
        diagnostics,
    }
}

/// Recompute bounds for `config` and clamp `current` into them.
///
/// A page size of `0` is treated as `1` everywhere downstream.
pub fn settle(config: &PaginationConfig, current: u64) -> PaginationState {
    let page_size = config.page_size.value().max(1);
    let max_page = max_page(config.total, page_size);
    PaginationState {
        current_page: clamp_current(current, max_page),
        max_page,
        page_size,
        total: config.total,
    }
}

/// A controlled current page with nobody listening for changes can never move.
pub fn is_read_only(config: &PaginationConfig, has_listener: bool) -> bool {
    config.current.is_controlled() && !has_listener
}
