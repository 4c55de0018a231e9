//
//  qiita-cli
//  api/entities/item.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Item types.
//!
//! An item is a Markdown article posted by a user. On Qiita Team an item may
//! belong to a group.
//!
//! # Example
//!
//! ```rust,no_run
//! use qiita::api::entities::Item;
//!
//! fn display_item(item: &Item) {
//!     let tags: Vec<&str> = item.tags.iter().map(|t| t.name.as_str()).collect();
//!     println!("{} [{}]", item.title, tags.join(", "));
//!     println!("  by @{} | {} likes", item.user.id, item.likes_count);
//! }
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::User;

/// An article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item ID, a 20 character hex string
    pub id: String,

    pub title: String,

    /// Markdown source
    pub body: String,

    /// HTML rendered from `body`
    pub rendered_body: String,

    /// Whether the item can be edited by other team members
    #[serde(default)]
    pub coediting: bool,

    #[serde(default)]
    pub comments_count: u64,

    pub created_at: DateTime<FixedOffset>,

    pub updated_at: DateTime<FixedOffset>,

    /// Qiita Team group, if any
    #[serde(default)]
    pub group: Option<Group>,

    #[serde(default)]
    pub likes_count: u64,

    /// Limited sharing (only people with the URL can see it)
    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub reactions_count: u64,

    #[serde(default)]
    pub stocks_count: u64,

    #[serde(default)]
    pub tags: Vec<Tagging>,

    pub url: String,

    pub user: User,

    /// Only returned to the author
    #[serde(default)]
    pub page_views_count: Option<u64>,
}

/// A tag attached to an item.
///
/// Also used as request payload when creating or updating items and
/// templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tagging {
    pub name: String,

    #[serde(default)]
    pub versions: Vec<String>,
}

impl Tagging {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }
}

/// A Qiita Team group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,

    pub name: String,

    /// Unique name used in URLs
    pub url_name: String,

    #[serde(default)]
    pub private: bool,

    pub created_at: DateTime<FixedOffset>,

    pub updated_at: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes() {
        let json = r##"{
            "rendered_body": "<h1>Example</h1>",
            "body": "# Example",
            "coediting": false,
            "comments_count": 100,
            "created_at": "2000-01-01T00:00:00+00:00",
            "group": null,
            "id": "c686397e4a0f4f11683d",
            "likes_count": 100,
            "private": false,
            "reactions_count": 100,
            "stocks_count": 100,
            "tags": [{ "name": "Ruby", "versions": ["0.0.1"] }],
            "title": "Example title",
            "updated_at": "2000-01-01T00:00:00+09:00",
            "url": "https://qiita.com/Qiita/items/c686397e4a0f4f11683d",
            "user": {
                "id": "qiita",
                "permanent_id": 1,
                "profile_image_url": "https://qiita.com/qiita.png"
            },
            "page_views_count": null
        }"##;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "c686397e4a0f4f11683d");
        assert!(item.group.is_none());
        assert_eq!(item.tags, vec![Tagging { name: "Ruby".into(), versions: vec!["0.0.1".into()] }]);
        assert_eq!(item.updated_at.offset().local_minus_utc(), 9 * 3600);
        assert_eq!(item.page_views_count, None);
    }
}
