// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Page count derivation.

#[cfg(test)]
#[path = "page_count_tests.rs"]
mod tests;

/// Number of pages needed to show `total` items at `page_size` items per page.
///
/// Zero items means zero pages, not one empty page. A page size of `0` is
/// treated as `1`.
pub fn max_page(total: u64, page_size: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (total - 1) / page_size.max(1) + 1
}
