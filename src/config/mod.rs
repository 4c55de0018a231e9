//
//  qiita-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration management for the Qiita CLI. It
//! handles loading, saving, and accessing settings stored in a TOML file in a
//! platform-specific directory, and turns them into a
//! [`ClientConfig`](crate::api::ClientConfig) for the library.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/qiita/config.toml`
//! - **macOS**: `~/Library/Application Support/qiita/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\qiita\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! output = "table"
//!
//! [api]
//! base_url = "https://increments.qiita.com"
//! version_path = "/api/v2"
//! timeout = 30
//!
//! [pagination]
//! style = "page"
//! per_page = 100
//! max_pages = 10
//! stop_on_empty = true
//! ```
//!
//! `max_pages = 0` removes the page ceiling. `QIITA_CONFIG` points the CLI
//! at another file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use qiita::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("pagination.style", "page")?;
//! config.save()?;
//!
//! let client_config = config.to_client_config(None, None);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: Base URL normalization and Qiita Team detection

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_VERSION_PATH};
use crate::api::common::{PaginationConfig, PaginationStyle};

/// Every key accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &[
    "output",
    "base_url",
    "version_path",
    "timeout",
    "pagination.style",
    "pagination.per_page",
    "pagination.max_pages",
    "pagination.stop_on_empty",
];

/// The CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// General CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CoreConfig {
    /// Default output format: `table` or `json`
    #[serde(default)]
    pub output: Option<String>,
}

/// Where and how to reach the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Defaults to `https://qiita.com`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Defaults to `/api/v2`
    #[serde(default)]
    pub version_path: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(path, &content)
    }

    /// Returns the path of the configuration file.
    ///
    /// `QIITA_CONFIG` overrides the platform location.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os("QIITA_CONFIG").filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns a setting as a string, or `None` if it is unset or unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output" => self.core.output.clone(),
            "base_url" => self.api.base_url.clone(),
            "version_path" => self.api.version_path.clone(),
            "timeout" => self.api.timeout.map(|t| t.to_string()),
            "pagination.style" => Some(self.pagination.style.to_string()),
            "pagination.per_page" => self.pagination.per_page.map(|p| p.to_string()),
            "pagination.max_pages" => Some(self.pagination.max_pages.unwrap_or(0).to_string()),
            "pagination.stop_on_empty" => Some(self.pagination.stop_on_empty.to_string()),
            _ => None,
        }
    }

    /// Sets a setting from its string form.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys and on values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => match value {
                "table" | "json" => self.core.output = Some(value.to_string()),
                _ => bail!("output must be 'table' or 'json'"),
            },
            "base_url" => self.api.base_url = Some(normalize_base_url(value)),
            "version_path" => {
                self.api.version_path = Some(value.strip_suffix('/').unwrap_or(value).to_string())
            }
            "timeout" => self.api.timeout = Some(parse_number(key, value)?),
            "pagination.style" => {
                self.pagination.style = value.parse::<PaginationStyle>().map_err(anyhow::Error::msg)?
            }
            "pagination.per_page" => {
                let per_page: u32 = parse_number(key, value)?;
                if !(1..=crate::api::common::PLATFORM_PAGE_LIMIT).contains(&per_page) {
                    bail!("pagination.per_page must be between 1 and 100");
                }
                self.pagination.per_page = Some(per_page);
            }
            "pagination.max_pages" => self.pagination.max_pages = Some(parse_number(key, value)?),
            "pagination.stop_on_empty" => {
                self.pagination.stop_on_empty = value
                    .parse::<bool>()
                    .with_context(|| format!("{} must be 'true' or 'false'", key))?
            }
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    /// Builds the library configuration.
    ///
    /// `host` (from `--host`/`QIITA_HOST`) overrides `api.base_url`. A
    /// `pagination.max_pages` of 0 means no ceiling.
    pub fn to_client_config(&self, host: Option<&str>, token: Option<&str>) -> ClientConfig {
        let base_url = host
            .map(normalize_base_url)
            .or_else(|| self.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let version_path = self
            .api
            .version_path
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION_PATH.to_string());

        let mut pagination = self.pagination.clone();
        if pagination.max_pages == Some(0) {
            pagination.max_pages = None;
        }

        ClientConfig::new()
            .base_url(&base_url)
            .version_path(&version_path)
            .token(token.unwrap_or_default())
            .pagination(pagination)
    }
}

fn parse_number<N: std::str::FromStr>(key: &str, value: &str) -> Result<N> {
    value
        .trim()
        .parse::<N>()
        .map_err(|_| anyhow::anyhow!("{} must be a non-negative number", key))
}
