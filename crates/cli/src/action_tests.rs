// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use yare::parameterized;

#[parameterized(
    next = { "next", Action::Next },
    prev = { "prev", Action::Prev },
    goto = { "goto=15", Action::Goto(15) },
    goto_negative = { "goto=-3", Action::Goto(-3) },
    goto_zero = { "goto=0", Action::Goto(0) },
    total = { "total=250", Action::Total(250) },
    current = { "current=4", Action::Current(4) },
    page_size = { "page-size=20", Action::PageSize(20) },
)]
fn parses(input: &str, expected: Action) {
    assert_eq!(input.parse::<Action>().unwrap(), expected);
}

#[parameterized(
    next = { Action::Next },
    goto = { Action::Goto(-3) },
    page_size = { Action::PageSize(20) },
)]
fn display_parses_back(action: Action) {
    assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
}

#[test]
fn unknown_action() {
    assert_eq!(
        "jump".parse::<Action>(),
        Err(ActionParseError::Unknown("jump".to_string()))
    );
    assert_eq!(
        "first=1".parse::<Action>(),
        Err(ActionParseError::Unknown("first=1".to_string()))
    );
}

#[test]
fn fractional_page_is_rejected() {
    assert_eq!(
        "goto=2.5".parse::<Action>(),
        Err(ActionParseError::InvalidNumber {
            action: "goto".to_string(),
            value: "2.5".to_string(),
        })
    );
}

#[test]
fn negative_total_is_rejected() {
    assert!("total=-1".parse::<Action>().is_err());
}
