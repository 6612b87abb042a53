// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer-facing snapshot of a pagination control.

use crate::config::{PaginationConfig, Presentation};
use crate::state::PaginationState;
use crate::window::{DisplayMode, PageWindow};
use serde::Serialize;
use std::ops::Range;

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

/// Whether a prev/next control is drawn, and whether it reacts to input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub visible: bool,
    pub enabled: bool,
}

/// Everything a renderer needs to draw the control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: u64,
    pub max_page: u64,
    pub page_size: u64,
    pub total: u64,
    pub window: PageWindow,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev: Affordance,
    pub next: Affordance,
    pub disabled: bool,
    /// Set when `hide_on_single_page` applies
    pub hidden: bool,
    /// Item indices shown on the current page
    pub items: Range<u64>,
    pub presentation: Presentation,
}

impl PaginationView {
    pub fn new(state: &PaginationState, config: &PaginationConfig) -> Self {
        let mode = config.display_mode();
        let window = PageWindow::compute(state.current_page, state.max_page, mode, config.window);
        let has_prev = state.has_prev();
        let has_next = state.has_next();
        let live = !config.disabled && !state.is_empty();

        Self {
            current_page: state.current_page,
            max_page: state.max_page,
            page_size: state.page_size,
            total: state.total,
            window,
            has_prev,
            has_next,
            prev: Affordance {
                visible: has_prev || mode == DisplayMode::Simple,
                enabled: has_prev && live,
            },
            next: Affordance {
                visible: true,
                enabled: has_next && live,
            },
            disabled: config.disabled,
            hidden: config.hide_on_single_page && state.max_page <= 1,
            items: state.item_range(),
            presentation: config.presentation.clone(),
        }
    }
}
