//
//  qiita-cli
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Token Storage
//!
//! Access tokens are kept in the system's native keyring:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! ## Storage Model
//!
//! - **Service**: `qiita-cli`
//! - **Username/Key**: the host, e.g. `qiita.com` or `increments.qiita.com`
//! - **Password/Value**: the access token
//!
//! ## Example
//!
//! ```rust,no_run
//! use qiita::auth::KeyringStore;
//!
//! fn manage_tokens() -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!
//!     store.store("qiita.com", "ea5d0a593b2655e9568f144fb1826342292f5c6b")?;
//!     if let Some(token) = store.get("qiita.com")? {
//!         println!("Found stored token ({} chars)", token.len());
//!     }
//!     store.delete("qiita.com")?;
//!
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "qiita-cli";

/// Keyring-backed token store, one entry per host.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Stores (or replaces) the token for `host`.
    pub fn store(&self, host: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry
            .set_password(token)
            .with_context(|| format!("Failed to store token for {} in the keyring", host))?;
        Ok(())
    }

    /// Returns the token for `host`, or `None` if there is none.
    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the token for `host`. Deleting a missing entry succeeds.
    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
