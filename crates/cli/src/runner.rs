// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drives a navigation controller through a sequence of actions.

use crate::action::Action;
use crate::cli::{CliError, OutputFormat};
use crate::output::write_view;
use paginate::{Navigation, NavigationController, PaginationView};
use std::io::Write;

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

/// Applies actions to one controller, standing in for a renderer.
#[derive(Debug)]
pub struct Runner {
    controller: NavigationController,
}

impl Runner {
    pub fn new(controller: NavigationController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn view(&self) -> PaginationView {
        self.controller.view()
    }

    /// Apply one action. Reconfigurations return `None`.
    pub fn apply(&mut self, action: Action) -> Option<Navigation> {
        let config = self.controller.config().clone();
        match action {
            Action::Next => Some(self.controller.go_next()),
            Action::Prev => Some(self.controller.go_prev()),
            Action::Goto(page) => Some(self.controller.request_page(page)),
            Action::Total(total) => {
                self.controller.reconfigure(config.with_total(total));
                None
            }
            Action::Current(page) => {
                self.controller.reconfigure(config.with_current(page));
                None
            }
            Action::PageSize(size) => {
                self.controller.reconfigure(config.with_page_size(size));
                None
            }
        }
    }

    /// Write the initial view, then the view after each action.
    pub fn run<W: Write>(
        &mut self,
        actions: &[Action],
        format: OutputFormat,
        writer: &mut W,
    ) -> Result<(), CliError> {
        write_view(writer, &self.view(), format)?;
        for &action in actions {
            self.apply(action);
            write_view(writer, &self.view(), format)?;
        }
        Ok(())
    }
}
