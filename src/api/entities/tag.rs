//
//  qiita-cli
//  api/entities/tag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag types.

use serde::{Deserialize, Serialize};

/// A tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag name, e.g. `Rust`
    pub id: String,

    #[serde(default)]
    pub icon_url: Option<String>,

    #[serde(default)]
    pub followers_count: u64,

    #[serde(default)]
    pub items_count: u64,
}

/// One entry of the tag search endpoint (`/api/tags?q=`).
///
/// That endpoint lives outside API v2 and uses its own field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTagResult {
    pub name: String,

    /// Name as used in tag URLs
    #[serde(default)]
    pub url_name: String,

    #[serde(default)]
    pub icon_url: Option<String>,

    #[serde(default)]
    pub follower_count: u64,

    #[serde(default)]
    pub item_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_without_icon() {
        let tag: Tag = serde_json::from_str(r#"{"id":"Rust","followers_count":3,"items_count":9}"#).unwrap();
        assert_eq!(tag.id, "Rust");
        assert_eq!(tag.icon_url, None);
        assert_eq!(tag.items_count, 9);
    }
}
