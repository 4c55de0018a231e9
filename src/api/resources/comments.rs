//
//  qiita-cli
//  api/resources/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Comment endpoints.

use serde_json::json;

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::ApiError;
use crate::api::entities::{Comment, Reaction};

impl QiitaClient {
    pub async fn fetch_comment(&self, comment_id: &str) -> Result<Comment, ApiError> {
        self.fetch(&self.resource_url(&["comments", comment_id])).await
    }

    /// Replaces the Markdown body of a comment.
    pub async fn update_comment(&self, comment_id: &str, body: &str) -> Result<Comment, ApiError> {
        Ok(self
            .patch(
                &self.resource_url(&["comments", comment_id]),
                Some(json!({ "body": body })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["comments", comment_id]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn fetch_comment_reactions(&self, comment_id: &str) -> Result<Vec<Reaction>, ApiError> {
        self.fetch(&self.resource_url(&["comments", comment_id, "reactions"]))
            .await
    }

    /// Adds the emoji reaction `name` (e.g. `+1`) to a comment.
    pub async fn create_comment_reaction(&self, comment_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["comments", comment_id, "reactions"]),
                Some(json!({ "name": name })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    /// Removes the emoji reaction `name` and returns it.
    pub async fn delete_comment_reaction(&self, comment_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .delete(
                &self.resource_url(&["comments", comment_id, "reactions", name]),
                None,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }
}
