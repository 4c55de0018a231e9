//
//  qiita-cli
//  api/entities/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project types (Qiita Team).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    pub name: String,

    /// Markdown source
    pub body: String,

    /// HTML rendered from `body`
    pub rendered_body: String,

    #[serde(default)]
    pub archived: bool,

    #[serde(default)]
    pub reactions_count: u64,

    pub created_at: DateTime<FixedOffset>,

    pub updated_at: DateTime<FixedOffset>,
}
