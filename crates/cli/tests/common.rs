// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Shared across test binaries; not every file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const CATALOG_CSV: &str = "\
Title 1,Title 2,Title 3,Work Item Type,State,Owner
Finance,,,,,Ann
,Accounts Payable,,,Active,Ann
,,Invoice Entry,User Story,,Bob
,,Invoice Approval,Task,Closed,
,Accounts Receivable,,,,Bob
";

pub const PEOPLE_CSV: &str = "\
Title 1,Title 2
People,
,Hiring
";

pub fn procat() -> Command {
    cargo_bin_cmd!("procat")
}

/// Temp directory with an initialized project.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    procat()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Ingests `content` as `name` and returns the new model id.
pub fn ingest(temp: &TempDir, name: &str, content: &str) -> String {
    write_file(temp, name, content);
    let output = procat()
        .arg("ingest")
        .arg(name)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "ingest failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().last())
        .unwrap()
        .to_string()
}
