//
//  qiita-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod auth;
mod completion;
mod config;
mod item;
mod tag;
mod user;

pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use item::ItemCommand;
pub use tag::TagCommand;
pub use user::UserCommand;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::api::common::Paginator;
use crate::api::transport::ReqwestTransport;
use crate::api::QiitaClient;
use crate::auth::{resolve_token, TokenSource};
use crate::config::{host_of, Config};
use crate::output::OutputWriter;

/// Qiita CLI - Work with Qiita from the command line
#[derive(Parser, Debug)]
#[command(
    name = "qiita",
    version,
    about = "Work with Qiita from the command line",
    long_about = "qiita is a CLI for Qiita and Qiita Team.\n\n\
                  It brings items, tags, users and the raw API v2 to your terminal.",
    propagate_version = true,
    after_help = "Use 'qiita <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Qiita host, e.g. qiita.com or your-team.qiita.com
    #[arg(long, global = true, env = "QIITA_HOST")]
    pub host: Option<String>,

    /// Access token (overrides the stored token)
    #[arg(long, global = true, env = "QIITA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds a client from the config file, `--host` and the resolved token.
    pub fn client(&self, config: &Config) -> Result<QiitaClient> {
        self.client_with_timeout(config, config.api.timeout.map(Duration::from_secs))
    }

    /// Like [`client`](Self::client) with an explicit request timeout.
    pub fn client_with_timeout(&self, config: &Config, timeout: Option<Duration>) -> Result<QiitaClient> {
        let mut client_config = config.to_client_config(self.host.as_deref(), None);
        let host = host_of(client_config.get_base_url());

        if let Some((token, source)) = resolve_token(self.token.as_deref(), &host)? {
            tracing::debug!("Using token from {} for {}", source, host);
            client_config.set_token(&token);
        }

        let transport = match timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout),
            None => ReqwestTransport::new(),
        }
        .context("Failed to create HTTP client")?;

        Ok(QiitaClient::with_transport(client_config, Arc::new(transport)))
    }

    /// Resolves the token without building a client.
    pub fn token_for(&self, host: &str) -> Result<Option<(String, TokenSource)>> {
        resolve_token(self.token.as_deref(), host)
    }

    pub fn writer(&self, config: &Config) -> OutputWriter {
        OutputWriter::from_preferences(self.json, config.core.output.as_deref())
    }
}

/// Advances `pages` until `limit` elements are collected or it is exhausted.
pub(crate) async fn take_pages<T: DeserializeOwned>(pages: &mut Paginator<'_, T>, limit: usize) -> Result<Vec<T>> {
    let mut collected = Vec::new();
    while collected.len() < limit {
        match pages.advance().await? {
            Some(page) => collected.extend(page),
            None => break,
        }
    }
    collected.truncate(limit);
    Ok(collected)
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with Qiita
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Make API requests
    Api(ApiCommand),

    /// Browse items
    #[command(visible_alias = "items")]
    Item(ItemCommand),

    /// Browse and follow tags
    #[command(visible_alias = "tags")]
    Tag(TagCommand),

    /// Browse users
    #[command(visible_alias = "users")]
    User(UserCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
