//
//  qiita-cli
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Utilities
//!
//! Qiita is served from `qiita.com`; every Qiita Team lives on its own
//! subdomain, `<team>.qiita.com`. Both speak the same API v2.
//!
//! | Input | Base URL |
//! |-------|----------|
//! | `qiita.com` | `https://qiita.com` |
//! | `https://increments.qiita.com/` | `https://increments.qiita.com` |
//! | `http://localhost:3000` | `http://localhost:3000` |

/// The public Qiita host.
pub const QIITA_HOST: &str = "qiita.com";

/// Turns user input into a base URL.
///
/// Adds `https://` when no scheme is given and strips one trailing slash.
/// Scheme and host are lowercased; a port is kept.
///
/// # Example
///
/// ```rust
/// use qiita::config::normalize_base_url;
///
/// assert_eq!(normalize_base_url("Qiita.com/"), "https://qiita.com");
/// assert_eq!(normalize_base_url("http://localhost:3000"), "http://localhost:3000");
/// ```
pub fn normalize_base_url(input: &str) -> String {
    let input = input.trim();
    let (scheme, rest) = match input.split_once("://") {
        Some((scheme, rest)) => (scheme.to_lowercase(), rest),
        None => ("https".to_string(), input),
    };
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let (authority, path) = match rest.find('/') {
        Some(index) => (&rest[..index], &rest[index..]),
        None => (rest, ""),
    };
    format!("{}://{}{}", scheme, authority.to_lowercase(), path)
}

/// Extracts the host name from a base URL.
pub fn host_of(base_url: &str) -> String {
    url::Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string())
}

/// Returns the team ID when `base_url` points at a Qiita Team.
///
/// # Example
///
/// ```rust
/// use qiita::config::team_id;
///
/// assert_eq!(team_id("https://increments.qiita.com").as_deref(), Some("increments"));
/// assert_eq!(team_id("https://qiita.com"), None);
/// ```
pub fn team_id(base_url: &str) -> Option<String> {
    let host = host_of(base_url);
    host.strip_suffix(&format!(".{}", QIITA_HOST))
        .filter(|team| !team.is_empty() && !team.contains('.'))
        .map(str::to_string)
}
