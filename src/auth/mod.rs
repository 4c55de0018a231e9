//
//  qiita-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Qiita authenticates API calls with a bearer access token. This module
//! finds the token to use and stores it between runs.
//!
//! ## Token Lookup Order
//!
//! 1. `--token` flag or `QIITA_TOKEN` environment variable
//! 2. The system keyring entry for the host
//!
//! Without a token requests are sent unauthenticated, which Qiita allows for
//! public data at a lower rate limit.
//!
//! ## Module Structure
//!
//! - [`token`]: Token input, format checks and verification
//! - [`keyring`]: Secure storage using the system keyring

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

use anyhow::Result;

/// Where the token in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` or `QIITA_TOKEN`
    Flag,
    /// The system keyring
    Keyring,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--token / QIITA_TOKEN"),
            Self::Keyring => write!(f, "keyring"),
        }
    }
}

/// Finds the token for `host`, see the module docs for the order.
pub fn resolve_token(explicit: Option<&str>, host: &str) -> Result<Option<(String, TokenSource)>> {
    if let Some(token) = explicit.filter(|t| !t.is_empty()) {
        return Ok(Some((token.to_string(), TokenSource::Flag)));
    }

    match KeyringStore::new().get(host) {
        Ok(token) => Ok(token.map(|t| (t, TokenSource::Keyring))),
        Err(e) => {
            tracing::debug!("Keyring lookup for {} failed: {}", host, e);
            Ok(None)
        }
    }
}
