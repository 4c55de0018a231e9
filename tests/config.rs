//
//  qiita-cli
//  tests/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use qiita::api::common::PaginationStyle;
use qiita::Config;

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set("base_url", "increments.qiita.com/").unwrap();
    config.set("pagination.style", "page").unwrap();
    config.set("pagination.max_pages", "0").unwrap();
    config.set("timeout", "15").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.api.base_url.as_deref(), Some("https://increments.qiita.com"));

    let client = loaded.to_client_config(None, None);
    assert_eq!(client.pagination.style, PaginationStyle::PageCounter);
    assert_eq!(client.pagination.max_pages, None);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pagination]\nstyle = \"cursor\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}
