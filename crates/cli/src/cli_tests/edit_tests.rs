// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn replace_takes_four_positionals() {
    let cli = parse(&["procat", "replace", "m1", "state", "New", "Active"]).unwrap();
    match cli.command {
        Command::Replace {
            id,
            field,
            old,
            new,
            ..
        } => {
            assert_eq!(id, "m1");
            assert_eq!(field, "state");
            assert_eq!(old, "New");
            assert_eq!(new, "Active");
        }
        _ => panic!("Expected Replace command"),
    }
}

#[test]
fn replace_allows_empty_values() {
    let cli = parse(&["procat", "replace", "m1", "Owner", "", "Ann"]).unwrap();
    match cli.command {
        Command::Replace { old, .. } => assert_eq!(old, ""),
        _ => panic!("Expected Replace command"),
    }
}

#[test]
fn replace_rejects_blank_field() {
    assert!(parse(&["procat", "replace", "m1", " ", "a", "b"]).is_err());
}

#[test]
fn delete_parses_field_and_value() {
    let cli = parse(&["procat", "delete", "m1", "type", "Task"]).unwrap();
    match cli.command {
        Command::Delete { field, value, .. } => {
            assert_eq!(field, "type");
            assert_eq!(value, "Task");
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn retype_requires_a_mapping() {
    assert!(parse(&["procat", "retype", "m1"]).is_err());
    let cli = parse(&["procat", "retype", "m1", "Task=Subtask", "Epic=Feature"]).unwrap();
    match cli.command {
        Command::Retype { mappings, .. } => assert_eq!(mappings, vec!["Task=Subtask", "Epic=Feature"]),
        _ => panic!("Expected Retype command"),
    }
}

#[test]
fn merge_collects_ids_and_name() {
    let cli = parse(&["procat", "merge", "a", "b", "c", "--name", "All"]).unwrap();
    match cli.command {
        Command::Merge { ids, name, .. } => {
            assert_eq!(ids, vec!["a", "b", "c"]);
            assert_eq!(name, "All");
        }
        _ => panic!("Expected Merge command"),
    }
}

#[test]
fn merge_requires_name() {
    assert!(parse(&["procat", "merge", "a", "b"]).is_err());
}
