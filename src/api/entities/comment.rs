//
//  qiita-cli
//  api/entities/comment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Comment, reaction and like types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::User;

/// A comment on an item or project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    /// Markdown source
    pub body: String,

    /// HTML rendered from `body`
    pub rendered_body: String,

    pub created_at: DateTime<FixedOffset>,

    pub updated_at: DateTime<FixedOffset>,

    pub user: User,
}

/// An emoji reaction (Qiita Team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji identifier, e.g. `+1`
    pub name: String,

    pub image_url: String,

    pub created_at: DateTime<FixedOffset>,

    pub user: User,
}

/// A like on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub created_at: DateTime<FixedOffset>,

    pub user: User,
}
