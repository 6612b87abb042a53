// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination state and page-window engine.
//!
//! Given a total item count, a page size and a current page, the engine
//! derives the page count, decides which page numbers a renderer should offer,
//! and validates page-change requests, notifying a listener of the new page.
//! It never draws anything: renderers consume [`PaginationView`] snapshots.
//!
//! ```
//! use paginate::{NavigationController, PaginationConfig};
//!
//! let config = PaginationConfig::new(250).with_default_current(15);
//! let mut pager = NavigationController::new(config, |page: u64, size: u64| {
//!     println!("load items {}..{}", (page - 1) * size, page * size);
//! });
//! assert_eq!(pager.window().pages(), (10..=19).collect::<Vec<_>>());
//!
//! pager.go_next();
//! assert_eq!(pager.current_page(), 16);
//! ```

pub mod config;
pub mod controller;
pub mod diagnostic;
pub mod page_count;
pub mod resolver;
pub mod state;
pub mod view;
pub mod window;

pub use config::{ConfigError, Ownership, PaginationConfig, Presentation};
pub use controller::{ChangeListener, ControllerBuilder, Navigation, NavigationController};
pub use diagnostic::{print_warning, Diagnostic, DiagnosticSink, StderrSink};
pub use page_count::max_page;
pub use resolver::{resolve, Resolution};
pub use state::PaginationState;
pub use view::{Affordance, PaginationView};
pub use window::{DisplayMode, PageEntry, PageWindow, PolicyError, WindowPolicy};
