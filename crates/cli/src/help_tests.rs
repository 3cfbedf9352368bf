// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in text.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => out.push(c),
        }
    }
    out
}

#[test]
fn commands_lists_every_subcommand() {
    let text = strip_ansi(&commands());
    for (name, about) in CATALOG_COMMANDS
        .iter()
        .chain(EDIT_COMMANDS)
        .chain(SETUP_COMMANDS)
    {
        assert!(text.contains(&format!("  {name}")), "missing {name}");
        assert!(text.contains(about), "missing about for {name}");
    }
}

#[test]
fn section_aligns_descriptions() {
    let text = strip_ansi(&section("Test:", &[("a", "first"), ("long", "second")]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Test:");
    assert_eq!(lines[1], "  a     first");
    assert_eq!(lines[2], "  long  second");
}

#[test]
fn template_has_placeholders() {
    let t = template();
    assert!(t.contains("{usage}"));
    assert!(t.contains("{before-help}"));
    assert!(t.contains("{after-help}"));
}
