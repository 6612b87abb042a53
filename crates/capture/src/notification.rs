// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured change-notification record.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One `on_change(page, page_size)` call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedChange {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since capture started
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Page the listener was told about
    pub page: u64,

    /// Page size at the time of the change
    pub page_size: u64,
}
