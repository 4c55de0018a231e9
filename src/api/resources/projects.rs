//
//  qiita-cli
//  api/resources/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project endpoints (Qiita Team).

use serde::Serialize;
use serde_json::json;

use crate::api::client::{to_body, QiitaClient, RequestOptions};
use crate::api::common::{ApiError, PaginationOptions, Paginator};
use crate::api::entities::{Comment, Project, Reaction, Tagging};

/// Request body for [`QiitaClient::create_project`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateProjectOptions {
    pub name: String,

    /// Markdown source
    pub body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tagging>,
}

/// Request body for [`QiitaClient::update_project`]. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProjectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tagging>>,
}

impl QiitaClient {
    pub fn fetch_projects(&self, options: PaginationOptions) -> Paginator<'_, Project> {
        self.paginate(&self.resource_url(&["projects"]), options.to_query())
    }

    pub async fn fetch_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.fetch(&self.resource_url(&["projects", project_id])).await
    }

    pub async fn create_project(&self, options: &CreateProjectOptions) -> Result<Project, ApiError> {
        Ok(self
            .post(&self.resource_url(&["projects"]), to_body(options)?, &RequestOptions::default())
            .await?
            .into_data())
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        options: &UpdateProjectOptions,
    ) -> Result<Project, ApiError> {
        Ok(self
            .patch(
                &self.resource_url(&["projects", project_id]),
                to_body(options)?,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.delete::<()>(&self.resource_url(&["projects", project_id]), None, &RequestOptions::default())
            .await?;
        Ok(())
    }

    pub async fn fetch_project_comments(&self, project_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.fetch(&self.resource_url(&["projects", project_id, "comments"]))
            .await
    }

    pub async fn create_project_comment(&self, project_id: &str, body: &str) -> Result<Comment, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["projects", project_id, "comments"]),
                Some(json!({ "body": body })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn fetch_project_reactions(&self, project_id: &str) -> Result<Vec<Reaction>, ApiError> {
        self.fetch(&self.resource_url(&["projects", project_id, "reactions"]))
            .await
    }

    pub async fn create_project_reaction(&self, project_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .post(
                &self.resource_url(&["projects", project_id, "reactions"]),
                Some(json!({ "name": name })),
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn delete_project_reaction(&self, project_id: &str, name: &str) -> Result<Reaction, ApiError> {
        Ok(self
            .delete(
                &self.resource_url(&["projects", project_id, "reactions", name]),
                None,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }
}
