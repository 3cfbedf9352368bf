// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn paint_wraps_text_in_escape_codes() {
    assert_eq!(header("Examples:"), "\x1b[38;5;74mExamples:\x1b[0m");
    assert_eq!(literal("procat"), "\x1b[38;5;250mprocat\x1b[0m");
    assert_eq!(context("<id>"), "\x1b[38;5;245m<id>\x1b[0m");
}

#[parameterized(
    simple = { "procat list    List models", Some(("procat list", "    List models")) },
    no_description = { "procat list", None },
    trailing_spaces = { "procat list   ", None },
)]
fn split_description_cases(line: &str, expected: Option<(&str, &str)>) {
    assert_eq!(split_description(line), expected);
}

#[test]
fn colorize_command_dims_placeholders() {
    let out = colorize_command("procat show <id>");
    assert!(out.contains(&literal("procat")));
    assert!(out.contains(&literal("show")));
    assert!(out.contains(&context("<id>")));
}

#[test]
fn colorize_examples_colors_headers_and_commands() {
    let out = colorize_examples("Examples:\n  procat tree <id>    Show the hierarchy");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], header("Examples:"));
    assert!(lines[1].starts_with("  "));
    assert!(lines[1].ends_with("    Show the hierarchy"));
    assert!(lines[1].contains(&context("<id>")));
}

#[test]
fn colorize_examples_leaves_prose_alone() {
    let out = colorize_examples("Plain sentence without columns");
    assert_eq!(out, "Plain sentence without columns");
}
