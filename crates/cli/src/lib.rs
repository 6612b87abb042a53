// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless pagination driver.
//!
//! Loads a pagination configuration from flags and/or a TOML or JSON file,
//! applies navigation and reconfiguration actions to a
//! [`paginate::NavigationController`], and prints the renderer view after
//! every step.

pub mod action;
pub mod cli;
pub mod output;
pub mod runner;

/// Re-exported capture types from paginate-capture crate.
pub mod capture {
    pub use paginate_capture::{CapturedChange, ChangeLog};
}
