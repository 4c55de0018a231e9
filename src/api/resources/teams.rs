//
//  qiita-cli
//  api/resources/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Team and invitation endpoints (Qiita Team).

use serde_json::json;

use crate::api::client::{QiitaClient, RequestOptions};
use crate::api::common::ApiError;
use crate::api::entities::{Team, TeamInvitation};

impl QiitaClient {
    /// Lists teams the authenticated user belongs to.
    pub async fn fetch_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.fetch(&self.resource_url(&["teams"])).await
    }

    /// Lists pending invitations. Requires an admin token.
    pub async fn fetch_team_invitations(&self) -> Result<Vec<TeamInvitation>, ApiError> {
        self.fetch(&self.resource_url(&["team_invitations"])).await
    }

    pub async fn create_team_invitation(&self, email: &str) -> Result<TeamInvitation, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["team_invitations"]),
                Some(json!({ "email": email })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn delete_team_invitation(&self, email: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["team_invitations", email]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }
}
