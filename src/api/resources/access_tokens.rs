//
//  qiita-cli
//  api/resources/access_tokens.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Access token endpoints.

use serde_json::json;

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::ApiError;
use crate::api::entities::AccessToken;

impl QiitaClient {
    /// Exchanges an OAuth authorization `code` for an access token.
    ///
    /// # Parameters
    ///
    /// * `client_id` - ID of the registered OAuth application
    /// * `client_secret` - Secret of the registered OAuth application
    /// * `code` - Code received on the application's redirect URL
    pub async fn fetch_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<AccessToken, ApiError> {
        let body = json!({
            "client_id": client_id,
            "client_secret": client_secret,
            "code": code,
        });
        Ok(self
            .post(&self.resource_url(&["access_tokens"]), Some(body), &RequestOptions::default())
            .await?
            .into_data())
    }

    /// Revokes an access token.
    pub async fn delete_access_token(&self, token: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["access_tokens", token]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }
}
