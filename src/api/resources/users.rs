//
//  qiita-cli
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User endpoints.

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::{ApiError, PaginationOptions, Paginator};
use crate::api::entities::{Item, Tag, User};

impl QiitaClient {
    /// Lists all users, newest first.
    pub fn fetch_users(&self, options: PaginationOptions) -> Paginator<'_, User> {
        self.paginate(&self.resource_url(&["users"]), options.to_query())
    }

    pub async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.fetch(&self.resource_url(&["users", user_id])).await
    }

    /// Lists users `user_id` follows.
    pub fn fetch_user_followees(&self, user_id: &str, options: PaginationOptions) -> Paginator<'_, User> {
        self.paginate(&self.resource_url(&["users", user_id, "followees"]), options.to_query())
    }

    /// Lists users following `user_id`.
    pub fn fetch_user_followers(&self, user_id: &str, options: PaginationOptions) -> Paginator<'_, User> {
        self.paginate(&self.resource_url(&["users", user_id, "followers"]), options.to_query())
    }

    pub fn fetch_user_items(&self, user_id: &str, options: PaginationOptions) -> Paginator<'_, Item> {
        self.paginate(&self.resource_url(&["users", user_id, "items"]), options.to_query())
    }

    /// Lists items stocked by `user_id`.
    pub fn fetch_user_stocks(&self, user_id: &str, options: PaginationOptions) -> Paginator<'_, Item> {
        self.paginate(&self.resource_url(&["users", user_id, "stocks"]), options.to_query())
    }

    pub fn fetch_user_following_tags(&self, user_id: &str, options: PaginationOptions) -> Paginator<'_, Tag> {
        self.paginate(
            &self.resource_url(&["users", user_id, "following_tags"]),
            options.to_query(),
        )
    }

    /// Whether the authenticated user follows `user_id`.
    pub async fn is_following_user(&self, user_id: &str) -> Result<bool, ApiError> {
        self.probe(&self.resource_url(&["users", user_id, "following"])).await
    }

    pub async fn follow_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.put::<()>(&self.resource_url(&["users", user_id, "following"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn unfollow_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["users", user_id, "following"]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }
}
