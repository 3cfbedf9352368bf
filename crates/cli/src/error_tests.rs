// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    not_initialized = { Error::NotInitialized, "not initialized: run 'procat init' first" },
    already = { Error::AlreadyInitialized("/p/.procat".into()), "already initialized at /p/.procat" },
    config = { Error::Config("bad".into()), "config error: bad" },
)]
fn error_messages(err: Error, expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn invalid_mapping_has_hint() {
    let msg = Error::InvalidMapping("Task".into()).to_string();
    assert!(msg.starts_with("invalid type mapping 'Task'"));
    assert!(msg.contains("hint:"));
}

#[test]
fn core_errors_pass_through_unchanged() {
    let core = procat_core::Error::ModelNotFound("abc".into());
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
}
