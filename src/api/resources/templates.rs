//
//  qiita-cli
//  api/resources/templates.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Template endpoints (Qiita Team).

use serde::Serialize;

use crate::api::client::{to_body, QiitaClient, RequestOptions};
use crate::api::common::{ApiError, PaginationOptions, Paginator};
use crate::api::entities::{Tagging, Template};

/// Request body for [`QiitaClient::create_template`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateTemplateOptions {
    pub name: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<Tagging>,
}

/// Request body for [`QiitaClient::update_template`]. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTemplateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tagging>>,
}

impl QiitaClient {
    pub fn fetch_templates(&self, options: PaginationOptions) -> Paginator<'_, Template> {
        self.paginate(&self.resource_url(&["templates"]), options.to_query())
    }

    pub async fn fetch_template(&self, template_id: u64) -> Result<Template, ApiError> {
        self.fetch(&self.resource_url(&["templates", template_id.to_string().as_str()]))
            .await
    }

    pub async fn create_template(&self, options: &CreateTemplateOptions) -> Result<Template, ApiError> {
        Ok(self
            .post(&self.resource_url(&["templates"]), to_body(options)?, &RequestOptions::default())
            .await?
            .into_data())
    }

    pub async fn update_template(
        &self,
        template_id: u64,
        options: &UpdateTemplateOptions,
    ) -> Result<Template, ApiError> {
        Ok(self
            .patch(
                &self.resource_url(&["templates", template_id.to_string().as_str()]),
                to_body(options)?,
                &RequestOptions::default(),
            )
            .await?
            .into_data())
    }

    pub async fn delete_template(&self, template_id: u64) -> Result<(), ApiError> {
        self.delete::<()>(
            &self.resource_url(&["templates", template_id.to_string().as_str()]),
            None,
            &RequestOptions::default(),
        )
        .await?;
        Ok(())
    }
}
