//
//  qiita-cli
//  api/resources/tags.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::{ApiError, PaginationOptions, Paginator, Query};
use crate::api::entities::{Item, SearchTagResult, Tag};

/// Sort order of [`QiitaClient::fetch_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSort {
    /// Most items first
    Count,
    /// Alphabetical
    Name,
}

impl fmt::Display for TagSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => f.write_str("count"),
            Self::Name => f.write_str("name"),
        }
    }
}

impl FromStr for TagSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown tag sort '{}' (expected 'count' or 'name')", other)),
        }
    }
}

/// Options for [`QiitaClient::fetch_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchTagsOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<TagSort>,
}

impl FetchTagsOptions {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_opt("page", self.page)
            .with_opt("per_page", self.per_page)
            .with_opt("sort", self.sort)
    }
}

impl QiitaClient {
    /// Lists all tags.
    pub fn fetch_tags(&self, options: FetchTagsOptions) -> Paginator<'_, Tag> {
        self.paginate(&self.resource_url(&["tags"]), options.to_query())
    }

    pub async fn fetch_tag(&self, tag_id: &str) -> Result<Tag, ApiError> {
        self.fetch(&self.resource_url(&["tags", tag_id])).await
    }

    /// Whether the authenticated user follows the tag.
    pub async fn is_following_tag(&self, tag_id: &str) -> Result<bool, ApiError> {
        self.probe(&self.resource_url(&["tags", tag_id, "following"])).await
    }

    pub async fn follow_tag(&self, tag_id: &str) -> Result<(), ApiError> {
        self.put::<()>(&self.resource_url(&["tags", tag_id, "following"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn unfollow_tag(&self, tag_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["tags", tag_id, "following"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Lists items tagged with `tag_id`, newest first.
    pub fn fetch_tagged_items(&self, tag_id: &str, options: PaginationOptions) -> Paginator<'_, Item> {
        self.paginate(&self.resource_url(&["tags", tag_id, "items"]), options.to_query())
    }

    /// Searches tags by name prefix.
    ///
    /// # Notes
    ///
    /// - Served at `{base_url}/api/tags`, outside the API version path
    /// - Undocumented; the response shape is [`SearchTagResult`], not [`Tag`]
    pub async fn search_tags(&self, q: &str) -> Result<Vec<SearchTagResult>, ApiError> {
        let url = format!("{}/api/tags", self.base_url());
        Ok(self
            .get(&url, &Query::new().with("q", q), &RequestOptions::default())
            .await?
            .into_data())
    }
}
