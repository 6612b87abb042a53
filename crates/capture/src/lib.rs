// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change-notification capture and recording for test assertions.
//!
//! A [`ChangeLog`] records every `(page, page_size)` notification a
//! pagination control emits, optionally mirroring them to a JSONL file.

mod duration_serde;
mod log;
mod notification;

pub use log::ChangeLog;
pub use notification::CapturedChange;
