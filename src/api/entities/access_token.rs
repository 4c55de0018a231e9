//
//  qiita-cli
//  api/entities/access_token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Access token types.

use serde::{Deserialize, Serialize};

/// An access token issued for an OAuth client.
///
/// # Scopes
///
/// | Scope | Grants |
/// |-------|--------|
/// | `read_qiita` | Read access to Qiita |
/// | `write_qiita` | Write access to Qiita |
/// | `read_qiita_team` | Read access to Qiita Team |
/// | `write_qiita_team` | Write access to Qiita Team |
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub client_id: String,

    #[serde(default)]
    pub scopes: Vec<String>,

    pub token: String,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("client_id", &self.client_id)
            .field("scopes", &self.scopes)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let token = AccessToken {
            client_id: "a91f0396a0968ff593eafdd194e3d17d32c41b1da7b25e873b42e9058058cd9d".into(),
            scopes: vec!["read_qiita".into()],
            token: "ea5d0a593b2655e9568f144fb1826342292f5c6b".into(),
        };
        let debug = format!("{:?}", token);
        assert!(!debug.contains("ea5d0a59"));
        assert!(debug.contains("REDACTED"));
    }
}
