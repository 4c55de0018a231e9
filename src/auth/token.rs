//
//  qiita-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Access Token Handling
//!
//! Qiita access tokens are 40 character hex strings, created at
//! <https://qiita.com/settings/applications> (or on a team's settings page)
//! with a set of scopes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use qiita::api::QiitaClient;
//! use qiita::auth::{read_token_from_stdin, validate_token, verify_token};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = read_token_from_stdin()?;
//! if !validate_token(&token) {
//!     anyhow::bail!("Invalid token format");
//! }
//!
//! let mut client = QiitaClient::new()?;
//! client.set_token(&token);
//! match verify_token(&client).await? {
//!     Some(user) => println!("Logged in as @{}", user.id),
//!     None => println!("Token rejected"),
//! }
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

use crate::api::entities::AuthenticatedUser;
use crate::api::{ApiError, QiitaClient};

/// Reads one line from stdin and trims it.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Basic sanity check: non-empty, no whitespace.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Whether the token looks like one Qiita issues (40 hex characters).
///
/// Only used for warnings; other formats are still accepted.
pub fn looks_like_qiita_token(token: &str) -> bool {
    token.len() == 40 && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Asks the API who the client's token belongs to.
///
/// Returns `Ok(None)` when the token is rejected (401), other errors as is.
pub async fn verify_token(client: &QiitaClient) -> Result<Option<AuthenticatedUser>, ApiError> {
    match client.fetch_authenticated_user().await {
        Ok(user) => Ok(Some(user)),
        Err(ApiError::Unauthorized(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("ea5d0a593b2655e9568f144fb1826342292f5c6b"));
        assert!(!validate_token(""));
        assert!(!validate_token("ea5d0a59 3b2655e9"));
    }

    #[test]
    fn test_looks_like_qiita_token() {
        assert!(looks_like_qiita_token("ea5d0a593b2655e9568f144fb1826342292f5c6b"));
        assert!(!looks_like_qiita_token("ghp_notqiita"));
        assert!(!looks_like_qiita_token("za5d0a593b2655e9568f144fb1826342292f5c6b"));
    }
}
