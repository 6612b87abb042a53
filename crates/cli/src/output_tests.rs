// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use paginate::{resolve, PaginationConfig};
use rstest::rstest;

fn view_of(config: PaginationConfig) -> PaginationView {
    PaginationView::new(&resolve(&config, true).state, &config)
}

#[rstest]
#[case(
    PaginationConfig::new(250).with_default_current(15),
    "page 15/25 size 10 [10 11 12 13 14 (15) 16 17 18 19] prev next"
)]
#[case(
    PaginationConfig::new(95),
    "page 1/10 size 10 [(1) 2 3 4 5 6 7 8 9 10] next"
)]
#[case(PaginationConfig::new(0), "page 0/0 size 10 [-]")]
#[case(
    PaginationConfig::new(95).with_default_current(3).with_simple(true),
    "page 3/10 size 10 [page 3] prev next"
)]
#[case(
    PaginationConfig::new(30).with_default_current(2).with_disabled(true),
    "page 2/3 size 10 [1 (2) 3] disabled"
)]
#[case(
    PaginationConfig::new(4).with_hide_on_single_page(true),
    "page 1/1 size 10 hidden"
)]
fn text_lines(#[case] config: PaginationConfig, #[case] expected: &str) {
    assert_eq!(format_view(&view_of(config)), expected);
}

#[test]
fn json_line_is_a_serialized_view() {
    let view = view_of(PaginationConfig::new(250).with_default_current(2));
    let mut buf = Vec::new();
    write_view(&mut buf, &view, OutputFormat::Json).unwrap();
    let line = String::from_utf8(buf).unwrap();
    assert!(line.ends_with('\n'));

    let json: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["max_page"], 25);
    assert_eq!(json["window"]["entries"].as_array().unwrap().len(), 10);
}

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "bad config", false);
    assert_eq!(String::from_utf8(buf).unwrap(), "Error: bad config\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "bad config", true);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\x1b[31mError: bad config\x1b[0m\n"
    );
}
