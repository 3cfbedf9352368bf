// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    assert_eq!(work_dir, temp.path().join(".procat"));
    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log_level(), "warn");
    assert_eq!(config.ingest_options().max_title_levels, 5);
}

#[test]
fn test_init_writes_gitignore() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    let gitignore = std::fs::read_to_string(work_dir.join(".gitignore")).unwrap();
    assert!(gitignore.contains("models.db"));
    assert!(gitignore.contains("exports/"));
    assert!(!gitignore.contains("config.toml"));
}

#[test]
fn test_already_initialized() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path()).unwrap();

    let result = init_work_dir(temp.path());
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("already initialized"));
    }
}

#[test]
fn test_init_succeeds_with_empty_procat_dir() {
    let temp = TempDir::new().unwrap();
    let work_dir = temp.path().join(".procat");
    std::fs::create_dir_all(&work_dir).unwrap();

    assert!(init_work_dir(temp.path()).is_ok());
    assert!(work_dir.join("config.toml").exists());
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(Config::load(temp.path()).is_err());
}

#[test]
fn test_config_parses_all_keys() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "database = \"data/catalog.db\"\nexports = \"/tmp/out\"\nlog_level = \"debug\"\n\n[ingest]\nmax_title_levels = 3\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.database.as_deref(), Some("data/catalog.db"));
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.ingest.max_title_levels, 3);
}

#[parameterized(
    zero = { 0 },
    above_limit = { MAX_TITLE_LEVELS as u64 + 1 },
    huge = { i64::MAX as u64 },
)]
fn test_config_rejects_out_of_range_title_levels(levels: u64) {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        format!("[ingest]\nmax_title_levels = {levels}\n"),
    )
    .unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("max_title_levels"));
}

#[test]
fn test_config_accepts_title_level_limit() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        format!("[ingest]\nmax_title_levels = {MAX_TITLE_LEVELS}\n"),
    )
    .unwrap();
    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config.ingest_options().max_title_levels, MAX_TITLE_LEVELS);
}

#[test]
fn test_config_rejects_invalid_toml() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "database = [").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let config = Config {
        exports: Some("out".to_string()),
        ..Config::default()
    };
    config.save(temp.path()).unwrap();
    assert_eq!(Config::load(temp.path()).unwrap(), config);
}

#[test]
fn test_default_paths() {
    let work_dir = PathBuf::from("/project/.procat");
    let config = Config::default();
    assert_eq!(get_db_path(&work_dir, &config), PathBuf::from("/project/.procat/models.db"));
    assert_eq!(
        get_exports_dir(&work_dir, &config),
        PathBuf::from("/project/.procat/exports")
    );
    assert_eq!(get_log_path(&work_dir), PathBuf::from("/project/.procat/procat.log"));
}

#[test]
fn test_relative_paths_resolve_against_project_root() {
    let work_dir = PathBuf::from("/project/.procat");
    let config = Config {
        database: Some("data/catalog.db".to_string()),
        exports: Some("/abs/exports".to_string()),
        ..Config::default()
    };
    assert_eq!(
        get_db_path(&work_dir, &config),
        PathBuf::from("/project/data/catalog.db")
    );
    assert_eq!(get_exports_dir(&work_dir, &config), PathBuf::from("/abs/exports"));
}
