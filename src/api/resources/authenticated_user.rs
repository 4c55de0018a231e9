//
//  qiita-cli
//  api/resources/authenticated_user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoints of the user owning the access token.

use crate::api::client::QiitaClient;
use crate::api::common::{ApiError, PaginationOptions, Paginator};
use crate::api::entities::{AuthenticatedUser, Item};

impl QiitaClient {
    /// Returns the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] without a valid token.
    pub async fn fetch_authenticated_user(&self) -> Result<AuthenticatedUser, ApiError> {
        self.fetch(&self.resource_url(&["authenticated_user"])).await
    }

    /// Alias of [`fetch_authenticated_user`](Self::fetch_authenticated_user).
    pub async fn fetch_me(&self) -> Result<AuthenticatedUser, ApiError> {
        self.fetch_authenticated_user().await
    }

    /// Lists the authenticated user's items, including private ones.
    pub fn fetch_authenticated_user_items(&self, options: PaginationOptions) -> Paginator<'_, Item> {
        self.paginate(&self.resource_url(&["authenticated_user", "items"]), options.to_query())
    }

    /// Alias of [`fetch_authenticated_user_items`](Self::fetch_authenticated_user_items).
    pub fn fetch_my_items(&self, options: PaginationOptions) -> Paginator<'_, Item> {
        self.fetch_authenticated_user_items(options)
    }
}
