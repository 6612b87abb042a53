// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use crate::action::Action;
use clap::{Parser, ValueEnum};
use paginate::{ConfigError, PaginationConfig, PolicyError, WindowPolicy};
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

/// Errors that stop a run before or while it executes
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid window: {0}")]
    Policy(#[from] PolicyError),

    #[error("Failed to open capture file '{path}': {source}")]
    Capture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize view: {0}")]
    Json(#[from] serde_json::Error),
}

/// Headless pagination driver
#[derive(Parser, Debug, Clone)]
#[command(name = "pagectl", version, about = "Headless driver for the paginate engine")]
pub struct Cli {
    /// Actions applied in order: next, prev, goto=N, total=N, current=N, page-size=N
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,

    /// TOML or JSON configuration file
    #[arg(long, env = "PAGECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Total number of items
    #[arg(long)]
    pub total: Option<u64>,

    /// Controlled current page (only moves through current=N actions)
    #[arg(long, conflicts_with = "default_current")]
    pub current: Option<u64>,

    /// Initial page for a self-managed control
    #[arg(long)]
    pub default_current: Option<u64>,

    /// Controlled page size
    #[arg(long, conflicts_with = "default_page_size")]
    pub page_size: Option<u64>,

    /// Page size for a self-managed control
    #[arg(long)]
    pub default_page_size: Option<u64>,

    /// Show a "page N" label instead of numbered pagers
    #[arg(long)]
    pub simple: bool,

    /// Mark the control disabled
    #[arg(long)]
    pub disabled: bool,

    /// Hide the control when there is at most one page
    #[arg(long)]
    pub hide_on_single_page: bool,

    /// Number of numbered pagers shown at once
    #[arg(long)]
    pub window_size: Option<u64>,

    /// Pagers kept after the current page before the window pins to an edge
    #[arg(long)]
    pub buffer_size: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Capture file for recording change notifications (JSONL)
    #[arg(long, env = "PAGECTL_CAPTURE")]
    pub capture: Option<PathBuf>,

    /// Run without a change listener
    #[arg(long)]
    pub read_only: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary line per state
    #[default]
    Text,
    /// One serialized view per line
    Json,
}

impl Cli {
    /// Build the starting configuration: file values first, then flags.
    pub fn build_config(&self) -> Result<PaginationConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => PaginationConfig::load(path)?,
            None => PaginationConfig::default(),
        };

        if let Some(total) = self.total {
            config = config.with_total(total);
        }
        if let Some(page) = self.current {
            config = config.with_current(page);
        } else if let Some(page) = self.default_current {
            config = config.with_default_current(page);
        }
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        } else if let Some(size) = self.default_page_size {
            config = config.with_default_page_size(size);
        }
        if self.simple {
            config = config.with_simple(true);
        }
        if self.disabled {
            config = config.with_disabled(true);
        }
        if self.hide_on_single_page {
            config = config.with_hide_on_single_page(true);
        }
        if self.window_size.is_some() || self.buffer_size.is_some() {
            let window = WindowPolicy::new(
                self.window_size.unwrap_or(config.window.window_size()),
                self.buffer_size.unwrap_or(config.window.buffer_size()),
            )?;
            config = config.with_window(window);
        }

        Ok(config)
    }
}
