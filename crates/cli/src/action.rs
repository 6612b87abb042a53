// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Positional actions: navigation requests and reconfigurations.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;

/// Errors from parsing a positional action
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("unknown action '{0}' (expected next, prev, goto=N, total=N, current=N or page-size=N)")]
    Unknown(String),

    #[error("invalid number '{value}' for {action}")]
    InvalidNumber { action: String, value: String },
}

/// One step applied to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    /// Request an arbitrary page; out-of-range values are clamped
    Goto(i64),
    /// Reconfigure with a new item count
    Total(u64),
    /// Reconfigure with a controlled current page
    Current(u64),
    /// Reconfigure with a controlled page size
    PageSize(u64),
}

fn number<T: FromStr>(action: &str, value: &str) -> Result<T, ActionParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ActionParseError::InvalidNumber {
            action: action.to_string(),
            value: value.to_string(),
        })
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            None => match s {
                "next" => Ok(Action::Next),
                "prev" => Ok(Action::Prev),
                _ => Err(ActionParseError::Unknown(s.to_string())),
            },
            Some((name, value)) => match name {
                "goto" => number(name, value).map(Action::Goto),
                "total" => number(name, value).map(Action::Total),
                "current" => number(name, value).map(Action::Current),
                "page-size" => number(name, value).map(Action::PageSize),
                _ => Err(ActionParseError::Unknown(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Next => write!(f, "next"),
            Action::Prev => write!(f, "prev"),
            Action::Goto(page) => write!(f, "goto={page}"),
            Action::Total(total) => write!(f, "total={total}"),
            Action::Current(page) => write!(f, "current={page}"),
            Action::PageSize(size) => write!(f, "page-size={size}"),
        }
    }
}
