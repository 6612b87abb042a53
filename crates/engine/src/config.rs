// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative pagination configuration, loadable from TOML or JSON.

use crate::window::{
    DisplayMode, PolicyError, WindowPolicy, DEFAULT_BUFFER_SIZE, DEFAULT_WINDOW_SIZE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default current page for self-managed controls
pub const DEFAULT_CURRENT: u64 = 1;
/// Default page size for self-managed controls
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Default class-name prefix handed to renderers
pub const DEFAULT_PREFIX_CLS: &str = "pagination";

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Who owns a value: the engine, or the caller supplying each configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership<T> {
    /// The engine starts from `initial` and mutates the value itself
    SelfManaged { initial: T },
    /// The caller's value is authoritative on every reconfiguration
    Controlled(T),
}

impl<T: Copy> Ownership<T> {
    /// The configured value, whichever side owns it.
    pub fn value(&self) -> T {
        match *self {
            Ownership::SelfManaged { initial } => initial,
            Ownership::Controlled(value) => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Ownership::Controlled(_))
    }
}

/// Cosmetic options passed through to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub prefix_cls: String,
    pub class_name: String,
    pub style: BTreeMap<String, String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            class_name: String::new(),
            style: BTreeMap::new(),
        }
    }
}

/// Pagination configuration, supplied fresh on every reconfiguration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct PaginationConfig {
    pub total: u64,
    pub current: Ownership<u64>,
    pub page_size: Ownership<u64>,
    pub simple: bool,
    pub disabled: bool,
    pub hide_on_single_page: bool,
    pub window: WindowPolicy,
    pub presentation: Presentation,
}

impl PaginationConfig {
    /// Self-managed configuration over `total` items with default options.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            current: Ownership::SelfManaged {
                initial: DEFAULT_CURRENT,
            },
            page_size: Ownership::SelfManaged {
                initial: DEFAULT_PAGE_SIZE,
            },
            simple: false,
            disabled: false,
            hide_on_single_page: false,
            window: WindowPolicy::default(),
            presentation: Presentation::default(),
        }
    }

    /// Load a configuration from a TOML or JSON file (by extension).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|e| e == "json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    pub fn with_default_current(mut self, page: u64) -> Self {
        self.current = Ownership::SelfManaged { initial: page };
        self
    }

    pub fn with_current(mut self, page: u64) -> Self {
        self.current = Ownership::Controlled(page);
        self
    }

    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.page_size = Ownership::SelfManaged { initial: size };
        self
    }

    pub fn with_page_size(mut self, size: u64) -> Self {
        self.page_size = Ownership::Controlled(size);
        self
    }

    pub fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_hide_on_single_page(mut self, hide: bool) -> Self {
        self.hide_on_single_page = hide;
        self
    }

    pub fn with_window(mut self, window: WindowPolicy) -> Self {
        self.window = window;
        self
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.simple {
            DisplayMode::Simple
        } else {
            DisplayMode::Numbered
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

fn default_current() -> u64 {
    DEFAULT_CURRENT
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_window_size() -> u64 {
    DEFAULT_WINDOW_SIZE
}

fn default_buffer_size() -> u64 {
    DEFAULT_BUFFER_SIZE
}

fn default_prefix_cls() -> String {
    DEFAULT_PREFIX_CLS.to_string()
}

/// Flat on-disk shape. A controlled key (`current`, `page_size`) wins over
/// its `default_*` counterpart.
#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    total: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<u64>,

    #[serde(default = "default_current")]
    default_current: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<u64>,

    #[serde(default = "default_page_size")]
    default_page_size: u64,

    #[serde(default)]
    simple: bool,

    #[serde(default)]
    disabled: bool,

    #[serde(default)]
    hide_on_single_page: bool,

    #[serde(default = "default_window_size")]
    window_size: u64,

    #[serde(default = "default_buffer_size")]
    buffer_size: u64,

    #[serde(default = "default_prefix_cls")]
    prefix_cls: String,

    #[serde(default)]
    class_name: String,

    #[serde(default)]
    style: BTreeMap<String, String>,
}

impl TryFrom<RawConfig> for PaginationConfig {
    type Error = PolicyError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let current = match raw.current {
            Some(page) => Ownership::Controlled(page),
            None => Ownership::SelfManaged {
                initial: raw.default_current,
            },
        };
        let page_size = match raw.page_size {
            Some(size) => Ownership::Controlled(size),
            None => Ownership::SelfManaged {
                initial: raw.default_page_size,
            },
        };
        Ok(Self {
            total: raw.total,
            current,
            page_size,
            simple: raw.simple,
            disabled: raw.disabled,
            hide_on_single_page: raw.hide_on_single_page,
            window: WindowPolicy::new(raw.window_size, raw.buffer_size)?,
            presentation: Presentation {
                prefix_cls: raw.prefix_cls,
                class_name: raw.class_name,
                style: raw.style,
            },
        })
    }
}

impl From<PaginationConfig> for RawConfig {
    fn from(config: PaginationConfig) -> Self {
        let (current, default_current) = match config.current {
            Ownership::Controlled(page) => (Some(page), DEFAULT_CURRENT),
            Ownership::SelfManaged { initial } => (None, initial),
        };
        let (page_size, default_page_size) = match config.page_size {
            Ownership::Controlled(size) => (Some(size), DEFAULT_PAGE_SIZE),
            Ownership::SelfManaged { initial } => (None, initial),
        };
        Self {
            total: config.total,
            current,
            default_current,
            page_size,
            default_page_size,
            simple: config.simple,
            disabled: config.disabled,
            hide_on_single_page: config.hide_on_single_page,
            window_size: config.window.window_size(),
            buffer_size: config.window.buffer_size(),
            prefix_cls: config.presentation.prefix_cls,
            class_name: config.presentation.class_name,
            style: config.presentation.style,
        }
    }
}
