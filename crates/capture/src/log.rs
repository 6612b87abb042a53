// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change log implementation.

use crate::notification::CapturedChange;
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Shared log of change notifications. Clones share the same records.
pub struct ChangeLog {
    start: Instant,
    changes: Arc<Mutex<Vec<CapturedChange>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ChangeLog {
    /// Create a new in-memory change log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            changes: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a change log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            changes: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a change notification
    pub fn record(&self, page: u64, page_size: u64) {
        let mut changes = self.changes.lock();
        let change = CapturedChange {
            seq: changes.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            page,
            page_size,
        };

        changes.push(change.clone());

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&change) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// A listener closure that records into this log
    pub fn listener(&self) -> impl FnMut(u64, u64) + Send + 'static {
        let log = self.clone();
        move |page, page_size| log.record(page, page_size)
    }

    /// Get all captured changes
    pub fn changes(&self) -> Vec<CapturedChange> {
        self.changes.lock().clone()
    }

    /// Pages reported, in order
    pub fn pages(&self) -> Vec<u64> {
        self.changes.lock().iter().map(|c| c.page).collect()
    }

    /// Get the last N changes
    pub fn last(&self, n: usize) -> Vec<CapturedChange> {
        let all = self.changes.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count changes matching a predicate
    pub fn count<F: Fn(&CapturedChange) -> bool>(&self, pred: F) -> usize {
        self.changes.lock().iter().filter(|c| pred(c)).count()
    }

    /// Get the total number of changes
    pub fn len(&self) -> usize {
        self.changes.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.changes.lock().is_empty()
    }

    /// Clear all recorded changes
    pub fn clear(&self) {
        self.changes.lock().clear();
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ChangeLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            changes: Arc::clone(&self.changes),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl std::fmt::Debug for ChangeLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeLog")
            .field("len", &self.len())
            .field("file", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
