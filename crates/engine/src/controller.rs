// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Navigation controller: owns the current page and validates page changes.
//!
//! All operations run to completion synchronously. Every accepted navigation
//! and every reconfiguration recomputes the state through the resolver, so a
//! read of [`NavigationController::state`] always reflects the last completed
//! operation.

use crate::config::{Ownership, PaginationConfig};
use crate::diagnostic::{Diagnostic, DiagnosticSink, StderrSink};
use crate::resolver::{is_read_only, resolve, settle};
use crate::state::{clamp_target, PaginationState};
use crate::view::PaginationView;
use crate::window::PageWindow;

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

/// Receives `(page, page_size)` for every accepted navigation.
pub trait ChangeListener {
    fn on_change(&mut self, page: u64, page_size: u64);
}

impl<F> ChangeListener for F
where
    F: FnMut(u64, u64),
{
    fn on_change(&mut self, page: u64, page_size: u64) {
        self(page, page_size)
    }
}

/// What a navigation request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// The target was the current page, or the direction was unavailable
    Ignored,
    /// Self-managed: the current page is now `page`
    Changed { page: u64 },
    /// Self-managed: the target clamped back onto the current page `page`;
    /// the listener was still notified
    Settled { page: u64 },
    /// Controlled: `page` was proposed to the listener; awaiting reconfiguration
    Proposed { page: u64 },
}

/// Builder for [`NavigationController`].
pub struct ControllerBuilder {
    config: PaginationConfig,
    listener: Option<Box<dyn ChangeListener>>,
    sink: Box<dyn DiagnosticSink>,
}

impl ControllerBuilder {
    /// Attach the change listener.
    pub fn on_change(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Route diagnostics somewhere other than stderr.
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn build(mut self) -> NavigationController {
        let resolution = resolve(&self.config, self.listener.is_some());
        for diagnostic in &resolution.diagnostics {
            self.sink.report(diagnostic);
        }
        NavigationController {
            read_only: !resolution.diagnostics.is_empty(),
            config: self.config,
            state: resolution.state,
            listener: self.listener,
            sink: self.sink,
        }
    }
}

/// Stateful coordinator for one pagination control.
pub struct NavigationController {
    config: PaginationConfig,
    state: PaginationState,
    listener: Option<Box<dyn ChangeListener>>,
    sink: Box<dyn DiagnosticSink>,
    read_only: bool,
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl NavigationController {
    pub fn builder(config: PaginationConfig) -> ControllerBuilder {
        ControllerBuilder {
            config,
            listener: None,
            sink: Box::new(StderrSink),
        }
    }

    /// Controller with a change listener and stderr diagnostics.
    pub fn new(config: PaginationConfig, listener: impl ChangeListener + 'static) -> Self {
        Self::builder(config).on_change(listener).build()
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn current_page(&self) -> u64 {
        self.state.current_page
    }

    pub fn max_page(&self) -> u64 {
        self.state.max_page
    }

    pub fn has_prev(&self) -> bool {
        self.state.has_prev()
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::compute(
            self.state.current_page,
            self.state.max_page,
            self.config.display_mode(),
            self.config.window,
        )
    }

    pub fn view(&self) -> PaginationView {
        PaginationView::new(&self.state, &self.config)
    }

    /// Request a move to `target`.
    ///
    /// Out-of-range targets are clamped into `1..=max_page`. The listener is
    /// notified with the clamped page whenever `target` differs from the
    /// current page, including while the control is disabled.
    pub fn request_page(&mut self, target: i64) -> Navigation {
        if i64::try_from(self.state.current_page).is_ok_and(|current| current == target) {
            return Navigation::Ignored;
        }
        let page = clamp_target(target, self.state.max_page);

        let outcome = match self.config.current {
            Ownership::Controlled(_) => Navigation::Proposed { page },
            Ownership::SelfManaged { .. } => {
                let previous = self.state.current_page;
                self.state = settle(&self.config, page);
                if self.state.current_page == previous {
                    Navigation::Settled { page }
                } else {
                    Navigation::Changed { page }
                }
            }
        };

        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(page, self.state.page_size);
        }
        outcome
    }

    pub fn go_prev(&mut self) -> Navigation {
        if !self.has_prev() {
            return Navigation::Ignored;
        }
        self.request_page(step(self.state.current_page, -1))
    }

    pub fn go_next(&mut self) -> Navigation {
        if !self.has_next() {
            return Navigation::Ignored;
        }
        self.request_page(step(self.state.current_page, 1))
    }

    /// Apply a fresh configuration.
    ///
    /// A controlled current page is taken from `config`; a self-managed one
    /// keeps its value. Either way it is clamped into the new bounds without
    /// notifying the listener.
    pub fn reconfigure(&mut self, config: PaginationConfig) {
        let current = match config.current {
            Ownership::Controlled(page) => page,
            Ownership::SelfManaged { .. } => self.state.current_page,
        };
        self.state = settle(&config, current);
        self.config = config;
        self.check_read_only();
    }

    /// Replace or remove the change listener.
    pub fn set_on_change(&mut self, listener: Option<Box<dyn ChangeListener>>) {
        self.listener = listener;
        self.check_read_only();
    }

    /// Report the read-only warning only when the condition newly appears.
    fn check_read_only(&mut self) {
        let read_only = is_read_only(&self.config, self.listener.is_some());
        if read_only && !self.read_only {
            self.sink.report(&Diagnostic::ReadOnlyControlledCurrent);
        }
        self.read_only = read_only;
    }
}

fn step(page: u64, delta: i64) -> i64 {
    i64::try_from(page).map_or(i64::MAX, |page| page.saturating_add(delta))
}
