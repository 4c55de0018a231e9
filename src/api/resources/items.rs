//
//  qiita-cli
//  api/resources/items.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Item endpoints.
//!
//! Covers items themselves plus everything hanging off `/items/:id`: likes,
//! stocks, reactions, stockers, comments and taggings.
//!
//! # Example
//!
//! ```rust,no_run
//! use qiita::api::QiitaClient;
//! use qiita::api::entities::Tagging;
//! use qiita::api::resources::CreateItemOptions;
//!
//! # async fn example(client: &QiitaClient) -> Result<(), qiita::api::ApiError> {
//! let item = client
//!     .create_item(&CreateItemOptions {
//!         title: "Hello".to_string(),
//!         body: "# Hello\n\nFirst post.".to_string(),
//!         tags: vec![Tagging::new("Rust")],
//!         private: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! client.stock_item(&item.id).await?;
//! assert!(client.is_item_stocked(&item.id).await?);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::json;

use crate::api::client::{to_body, QiitaClient, RequestOptions};
use crate::api::common::{ApiError, PaginationOptions, Paginator, Query};
use crate::api::entities::{Comment, Item, Like, Reaction, Tagging, User};

/// Options for [`QiitaClient::fetch_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchItemsOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Search query, e.g. `tag:rust user:qiita`
    pub query: Option<String>,
}

impl FetchItemsOptions {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_opt("page", self.page)
            .with_opt("per_page", self.per_page)
            .with_opt("query", self.query.as_deref())
    }
}

/// Request body for [`QiitaClient::create_item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateItemOptions {
    pub title: String,

    /// Markdown source
    pub body: String,

    pub tags: Vec<Tagging>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coediting: Option<bool>,

    /// Qiita Team group to post to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_url_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Post the item to the linked Twitter account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet: Option<bool>,
}

/// Request body for [`QiitaClient::update_item`]. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tagging>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coediting: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_url_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl QiitaClient {
    /// Lists items, newest first.
    pub fn fetch_items(&self, options: FetchItemsOptions) -> Paginator<'_, Item> {
        self.paginate(&self.resource_url(&["items"]), options.to_query())
    }

    pub async fn fetch_item(&self, item_id: &str) -> Result<Item, ApiError> {
        self.fetch(&self.resource_url(&["items", item_id])).await
    }

    pub async fn create_item(&self, options: &CreateItemOptions) -> Result<Item, ApiError> {
        Ok(self
            .post(&self.resource_url(&["items"]), to_body(options)?, &RequestOptions::default())
            .await?
            .into_data())
    }

    pub async fn update_item(&self, item_id: &str, options: &UpdateItemOptions) -> Result<Item, ApiError> {
        Ok(self
            .patch(&self.resource_url(&["items", item_id]), to_body(options)?, &RequestOptions::default())
            .await?
            .into_data())
    }

    pub async fn delete_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["items", item_id]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Whether the authenticated user liked the item.
    pub async fn is_item_liked(&self, item_id: &str) -> Result<bool, ApiError> {
        self.probe(&self.resource_url(&["items", item_id, "like"])).await
    }

    pub async fn like_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.put::<()>(&self.resource_url(&["items", item_id, "like"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn unlike_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["items", item_id, "like"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Whether the authenticated user stocked the item.
    pub async fn is_item_stocked(&self, item_id: &str) -> Result<bool, ApiError> {
        self.probe(&self.resource_url(&["items", item_id, "stock"])).await
    }

    pub async fn stock_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.put::<()>(&self.resource_url(&["items", item_id, "stock"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn unstock_item(&self, item_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["items", item_id, "stock"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn fetch_item_reactions(&self, item_id: &str) -> Result<Vec<Reaction>, ApiError> {
        self.fetch(&self.resource_url(&["items", item_id, "reactions"])).await
    }

    pub async fn create_item_reaction(&self, item_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["items", item_id, "reactions"]),
                Some(json!({ "name": name })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    /// Removes the emoji reaction `name` and returns it.
    pub async fn delete_item_reaction(&self, item_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .delete(
                &self.resource_url(&["items", item_id, "reactions", name]),
                None,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    /// Lists likes, newest first. Not paginated by the API.
    pub async fn fetch_item_likes(&self, item_id: &str) -> Result<Vec<Like>, ApiError> {
        self.fetch(&self.resource_url(&["items", item_id, "likes"])).await
    }

    /// Lists users who stocked the item, newest first.
    pub fn fetch_item_stockers(&self, item_id: &str, options: PaginationOptions) -> Paginator<'_, User> {
        self.paginate(&self.resource_url(&["items", item_id, "stockers"]), options.to_query())
    }

    pub async fn fetch_item_comments(&self, item_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.fetch(&self.resource_url(&["items", item_id, "comments"])).await
    }

    pub async fn create_item_comment(&self, item_id: &str, body: &str) -> Result<Comment, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["items", item_id, "comments"]),
                Some(json!({ "body": body })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    /// Adds a tag to an item (Qiita Team only).
    pub async fn add_item_tag(&self, item_id: &str, tagging: &Tagging) -> Result<Tagging, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["items", item_id, "taggings"]),
                to_body(tagging)?,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    /// Removes a tag from an item (Qiita Team only).
    pub async fn remove_item_tag(&self, item_id: &str, tagging_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(
            &self.resource_url(&["items", item_id, "taggings", tagging_id]),
            None,
            &RequestOptions::default(),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_items_query_skips_none() {
        let options = FetchItemsOptions {
            query: Some("tag:rust stocks:>10".to_string()),
            ..Default::default()
        };
        assert_eq!(options.to_query().to_query_string(), "query=tag%3Arust+stocks%3A%3E10");
    }

    #[test]
    fn test_update_body_only_sends_set_fields() {
        let options = UpdateItemOptions {
            title: Some("New".to_string()),
            ..Default::default()
        };
        assert_eq!(to_body(&options).unwrap(), Some(json!({ "title": "New" })));
    }

    #[test]
    fn test_create_body() {
        let options = CreateItemOptions {
            title: "t".to_string(),
            body: "b".to_string(),
            tags: vec![Tagging::new("Rust")],
            private: Some(false),
            ..Default::default()
        };
        assert_eq!(
            to_body(&options).unwrap(),
            Some(json!({
                "title": "t",
                "body": "b",
                "tags": [{ "name": "Rust", "versions": [] }],
                "private": false
            }))
        );
    }
}
