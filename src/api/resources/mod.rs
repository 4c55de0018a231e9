//
//  qiita-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Methods
//!
//! One method on [`QiitaClient`] per Qiita API v2 endpoint, grouped by
//! resource. Every method is a fixed path plus a decode target over the
//! verb helpers or the [`Paginator`](crate::api::common::Paginator).
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`access_tokens`] | `/access_tokens` |
//! | [`authenticated_user`] | `/authenticated_user` |
//! | [`comments`] | `/comments` |
//! | [`items`] | `/items` |
//! | [`projects`] | `/projects` |
//! | [`tags`] | `/tags`, `/api/tags` |
//! | [`teams`] | `/teams`, `/team_invitations` |
//! | [`templates`] | `/templates` |
//! | [`users`] | `/users` |
//!
//! ## Return Types
//!
//! - Single documents: `Result<T, ApiError>` with the decoded body
//! - Lists the API pages: a [`Paginator`](crate::api::common::Paginator);
//!   nothing is fetched until it is advanced
//! - `is_*` probes: `Ok(true)` on 204, `Ok(false)` on 404
//!
//! # Example
//!
//! ```rust,no_run
//! use qiita::api::QiitaClient;
//! use qiita::api::resources::FetchItemsOptions;
//!
//! # async fn example() -> Result<(), qiita::api::ApiError> {
//! let mut client = QiitaClient::new()?;
//! client.set_token("your-access-token");
//!
//! let me = client.fetch_authenticated_user().await?;
//! println!("Logged in as @{}", me.id);
//!
//! let mut pages = client.fetch_items(FetchItemsOptions {
//!     query: Some("tag:rust".to_string()),
//!     ..Default::default()
//! });
//! while let Some(page) = pages.advance().await? {
//!     for item in page {
//!         println!("{}", item.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod access_tokens;
pub mod authenticated_user;
pub mod comments;
pub mod items;
pub mod projects;
pub mod tags;
pub mod teams;
pub mod templates;
pub mod users;

pub use items::{CreateItemOptions, FetchItemsOptions, UpdateItemOptions};
pub use projects::{CreateProjectOptions, UpdateProjectOptions};
pub use tags::{FetchTagsOptions, TagSort};
pub use templates::{CreateTemplateOptions, UpdateTemplateOptions};

use serde::de::DeserializeOwned;

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::{ApiError, Query};

/// Percent-encodes one path segment.
///
/// Tag names such as `C#` or `C++` must not leak `#` or `+` into the URL.
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl QiitaClient {
    /// `endpoint` with `segments` percent-encoded and joined by `/`.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> String {
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(&encode_segment(segment));
        }
        self.endpoint(&path)
    }

    /// GET returning only the decoded body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        Ok(self
            .get::<T>(url, &Query::new(), &RequestOptions::default())
            .await?
            .into_data())
    }

    /// GET on an endpoint answering 204 for yes and 404 for no.
    pub(crate) async fn probe(&self, url: &str) -> Result<bool, ApiError> {
        match self.fetch::<()>(url).await {
            Ok(()) => Ok(true),
            Err(ApiError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
