//
//  qiita-cli
//  api/entities/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Qiita API v2 data types.
//!
//! This module provides serde bindings for the JSON documents returned by
//! the Qiita API v2, organized by resource type.
//!
//! # Module Organization
//!
//! - [`user`] - Users and the authenticated user
//! - [`item`] - Items (articles), their taggings and groups
//! - [`comment`] - Comments, reactions and likes
//! - [`tag`] - Tags and tag search results
//! - [`team`] - Qiita Team teams and invitations
//! - [`template`] - Qiita Team templates
//! - [`project`] - Qiita Team projects
//! - [`access_token`] - Access tokens
//!
//! # Notes
//!
//! - Timestamps are ISO 8601 with an offset and decode into
//!   `chrono::DateTime<FixedOffset>`
//! - Fields the API documents as nullable are `Option` with `#[serde(default)]`
//! - Unknown fields are ignored, so additions on the server side do not
//!   break decoding

pub mod access_token;
pub mod comment;
pub mod item;
pub mod project;
pub mod tag;
pub mod team;
pub mod template;
pub mod user;

pub use access_token::*;
pub use comment::*;
pub use item::*;
pub use project::*;
pub use tag::*;
pub use team::*;
pub use template::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Error document returned with non-2xx responses.
///
/// ```json
/// { "message": "Not found", "type": "not_found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QiitaErrorBody {
    /// Human readable description
    pub message: String,

    /// Machine readable error type, e.g. `not_found`, `unauthorized`
    #[serde(rename = "type")]
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body() {
        let body: QiitaErrorBody =
            serde_json::from_str(r#"{"message":"Not found","type":"not_found"}"#).unwrap();
        assert_eq!(body.error_type, "not_found");
        assert_eq!(body.message, "Not found");
    }
}
