//
//  qiita-cli
//  api/entities/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User types.

use serde::{Deserialize, Serialize};

/// A Qiita user.
///
/// Profile fields other than the counters, `id`, `permanent_id` and
/// `profile_image_url` are optional and frequently `null`.
///
/// # Example
///
/// ```rust,no_run
/// use qiita::api::entities::User;
///
/// fn display_user(user: &User) {
///     println!("@{} ({})", user.id, user.name.as_deref().unwrap_or("-"));
///     println!("  {} items, {} followers", user.items_count, user.followers_count);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID (login name)
    pub id: String,

    /// Numeric ID that never changes, even when `id` does
    pub permanent_id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub facebook_id: Option<String>,

    #[serde(default)]
    pub github_login_name: Option<String>,

    #[serde(default)]
    pub linkedin_id: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    #[serde(default)]
    pub twitter_screen_name: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,

    pub profile_image_url: String,

    #[serde(default)]
    pub followees_count: u64,

    #[serde(default)]
    pub followers_count: u64,

    #[serde(default)]
    pub items_count: u64,

    /// Whether the user is a Qiita Team-only user
    #[serde(default)]
    pub team_only: bool,
}

/// The user the access token belongs to.
///
/// Everything in [`User`] plus upload quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: User,

    /// Monthly image upload limit in bytes
    #[serde(default)]
    pub image_monthly_upload_limit: u64,

    /// Bytes left of the monthly image upload limit
    #[serde(default)]
    pub image_monthly_upload_remaining: u64,
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{
        "description": null,
        "facebook_id": null,
        "followees_count": 100,
        "followers_count": 200,
        "github_login_name": "qiitan",
        "id": "qiita",
        "items_count": 300,
        "linkedin_id": "",
        "location": "Tokyo, Japan",
        "name": "Qiita キータ",
        "organization": "Increments Inc",
        "permanent_id": 1,
        "profile_image_url": "https://s3-ap-northeast-1.amazonaws.com/qiita-image-store/0/88/ccf90b557a406157dbb9d2d7e543dae384dbb561/large.png?1575443439",
        "team_only": false,
        "twitter_screen_name": "qiita",
        "website_url": "https://qiita.com"
    }"#;

    #[test]
    fn test_user_with_nulls() {
        let user: User = serde_json::from_str(USER).unwrap();
        assert_eq!(user.id, "qiita");
        assert_eq!(user.permanent_id, 1);
        assert_eq!(user.description, None);
        assert_eq!(user.github_login_name.as_deref(), Some("qiitan"));
        assert_eq!(user.followers_count, 200);
    }

    #[test]
    fn test_authenticated_user_flattens_user() {
        let json = USER.trim_end().trim_end_matches('}').to_string()
            + r#", "image_monthly_upload_limit": 1048576, "image_monthly_upload_remaining": 524288 }"#;
        let me: AuthenticatedUser = serde_json::from_str(&json).unwrap();
        assert_eq!(me.id, "qiita");
        assert_eq!(me.image_monthly_upload_remaining, 524288);
    }
}
