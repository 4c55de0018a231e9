//
//  qiita-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Qiita Client Library
//!
//! A typed client for the Qiita API v2 and the `qiita` command-line tool
//! built on it. Works against qiita.com and Qiita Team hosts.
//!
//! ## Overview
//!
//! Every request goes through one gateway, [`QiitaClient::send`], which adds
//! the bearer token, parses the JSON body and turns non-2xx statuses into a
//! typed [`ApiError`](api::ApiError). List endpoints return a restartable
//! [`Paginator`](api::common::Paginator) that follows either a page counter
//! or the `Link` response header.
//!
//! ## Module Structure
//!
//! - [`api`]: Gateway, error taxonomy, pagination, entities and one method per endpoint
//! - [`auth`]: Token storage in the system keyring and token checks
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use qiita::api::resources::FetchItemsOptions;
//! use qiita::QiitaClient;
//!
//! # async fn example() -> Result<(), qiita::api::ApiError> {
//! let mut client = QiitaClient::new()?;
//! client.set_token("your-access-token");
//!
//! let mut pages = client.fetch_items(FetchItemsOptions {
//!     query: Some("tag:rust".to_string()),
//!     ..Default::default()
//! });
//! while let Some(page) = pages.advance().await? {
//!     for item in page {
//!         println!("{} by @{}", item.title, item.user.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// The Qiita API v2 client.
///
/// The gateway, the error taxonomy, pagination, the entity types and the
/// resource methods.
pub mod api;

/// Access token management.
///
/// Tokens are kept in the system keychain, one per host.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/qiita/config.toml`
/// - macOS: `~/Library/Application Support/qiita/config.toml`
/// - Windows: `%APPDATA%\qiita\config\config.toml`
pub mod config;

/// Output formatting for tables and JSON.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// # Example
///
/// ```rust,no_run
/// use qiita::Config;
///
/// let config = Config::load().expect("Failed to load config");
/// if let Some(style) = config.get("pagination.style") {
///     println!("Pagination: {}", style);
/// }
/// ```
pub use config::Config;

/// Re-export of the API client.
pub use api::QiitaClient;

/// Application name constant.
///
/// The name of the CLI binary, used for completions and configuration paths.
pub const APP_NAME: &str = "qiita";

/// Application version constant, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use qiita::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::{ApiError, ErrorKind};

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// The command was invoked with invalid arguments or options.
    /// Use `--help` to see correct usage.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed (401 or 403).
    ///
    /// Run `qiita auth login` to authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (429).
    ///
    /// Qiita allows 1000 requests per hour with a token and 60 without.
    pub const RATE_LIMIT: i32 = 32;

    /// Picks the exit code for an error returned by a command.
    ///
    /// Looks for an [`ApiError`] anywhere in the error chain.
    pub fn for_error(error: &anyhow::Error) -> i32 {
        let api_error = error.chain().find_map(|cause| cause.downcast_ref::<ApiError>());
        match api_error.map(ApiError::kind) {
            Some(ErrorKind::Unauthorized | ErrorKind::Forbidden) => AUTH_ERROR,
            Some(ErrorKind::NotFound) => NOT_FOUND,
            Some(ErrorKind::RateLimited) => RATE_LIMIT,
            _ => ERROR,
        }
    }

}
