//
//  qiita-cli
//  api/common/link.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `Link` response header parsing (RFC 8288).
//!
//! Qiita advertises pagination through the `Link` header:
//!
//! ```text
//! Link: <https://qiita.com/api/v2/items?page=1>; rel="first",
//!       <https://qiita.com/api/v2/items?page=2>; rel="next",
//!       <https://qiita.com/api/v2/items?page=100>; rel="last"
//! ```
//!
//! Only what pagination needs is implemented: link values with their
//! target and parameters, and lookup by relation type.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};

/// Matches one link-value: `<target>` followed by any number of
/// `; key` or `; key=value` parameters. Values may be quoted.
static LINK_VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(?P<target>[^>]*)>(?P<params>(?:\s*;\s*[^;,"=\s]+\s*(?:=\s*(?:"[^"]*"|[^;,"\s]*))?)*)"#)
        .expect("link value pattern is valid")
});

/// Matches one parameter inside the `params` group above.
static LINK_PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#";\s*(?P<key>[^;,"=\s]+)\s*(?:=\s*(?:"(?P<quoted>[^"]*)"|(?P<token>[^;,"\s]*)))?"#)
        .expect("link param pattern is valid")
});

/// A single entry of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkValue {
    /// The target URI, as written between `<` and `>`.
    pub target: String,
    /// Parameters in header order. Keys are lowercased.
    pub params: Vec<(String, String)>,
}

impl LinkValue {
    /// Returns the first value of parameter `key` (case-insensitive).
    pub fn param(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the `rel` parameter lists `relation`.
    ///
    /// `rel` may hold several space-separated relation types; comparison is
    /// case-insensitive.
    pub fn has_rel(&self, relation: &str) -> bool {
        self.param("rel")
            .map(|rel| {
                rel.split_whitespace()
                    .any(|r| r.eq_ignore_ascii_case(relation))
            })
            .unwrap_or(false)
    }
}

/// Parses a `Link` header value into its entries.
///
/// Malformed fragments are skipped rather than reported.
///
/// # Example
///
/// ```rust
/// use qiita::api::common::parse_link_header;
///
/// let links = parse_link_header(r#"<https://qiita.com/api/v2/items?page=2>; rel="next""#);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].target, "https://qiita.com/api/v2/items?page=2");
/// assert!(links[0].has_rel("next"));
/// ```
pub fn parse_link_header(value: &str) -> Vec<LinkValue> {
    LINK_VALUE_PATTERN
        .captures_iter(value)
        .map(|caps| {
            let target = caps["target"].trim().to_string();
            let params = LINK_PARAM_PATTERN
                .captures_iter(&caps["params"])
                .map(|p| {
                    let key = p["key"].to_ascii_lowercase();
                    let value = p
                        .name("quoted")
                        .or_else(|| p.name("token"))
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default();
                    (key, value)
                })
                .collect();
            LinkValue { target, params }
        })
        .collect()
}

/// Finds the target of the first link with relation `relation` across every
/// `Link` header in `headers`.
///
/// Relative targets are resolved against `base` when one is given.
pub fn find_link(headers: &HeaderMap, relation: &str, base: Option<&str>) -> Option<String> {
    let target = headers
        .get_all(LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(parse_link_header)
        .find(|link| link.has_rel(relation))?
        .target;

    match base.and_then(|b| url::Url::parse(b).ok()) {
        Some(base) => base
            .join(&target)
            .map(|u| u.to_string())
            .ok()
            .or(Some(target)),
        None => Some(target),
    }
}

/// Extracts the `rel="next"` target from response headers.
pub fn next_link(headers: &HeaderMap, base: Option<&str>) -> Option<String> {
    find_link(headers, "next", base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    const QIITA_LINK: &str = concat!(
        r#"<https://qiita.com/api/v2/items?page=1>; rel="first", "#,
        r#"<https://qiita.com/api/v2/items?page=2>; rel="next", "#,
        r#"<https://qiita.com/api/v2/items?page=100>; rel="last""#
    );

    #[test]
    fn test_parse_qiita_header() {
        let links = parse_link_header(QIITA_LINK);
        assert_eq!(links.len(), 3);
        assert!(links[0].has_rel("first"));
        assert_eq!(links[1].target, "https://qiita.com/api/v2/items?page=2");
        assert!(links[2].has_rel("last"));
    }

    #[test]
    fn test_multiple_relations_and_unquoted_values() {
        let links = parse_link_header("<https://example.com/b>; REL=next; title=\"a, b; c\"");
        assert_eq!(links.len(), 1);
        assert!(links[0].has_rel("next"));
        assert_eq!(links[0].param("title"), Some("a, b; c"));

        let links = parse_link_header(r#"<https://example.com/c>; rel="next last""#);
        assert!(links[0].has_rel("last"));
        assert!(links[0].has_rel("next"));
    }

    #[test]
    fn test_next_link_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_static(r#"<https://qiita.com/api/v2/items?page=1>; rel="first""#));
        assert_eq!(next_link(&headers, None), None);
        assert_eq!(next_link(&HeaderMap::new(), None), None);
    }

    #[test]
    fn test_next_link_resolves_relative_targets() {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_static(r#"</api/v2/items?page=3>; rel="next""#));
        assert_eq!(
            next_link(&headers, Some("https://qiita.com/api/v2/items?page=2")).as_deref(),
            Some("https://qiita.com/api/v2/items?page=3")
        );
    }

    #[test]
    fn test_next_link_across_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append(LINK, HeaderValue::from_static(r#"<https://qiita.com/a>; rel="prev""#));
        headers.append(LINK, HeaderValue::from_static(r#"<https://qiita.com/b>; rel="next""#));
        assert_eq!(next_link(&headers, None).as_deref(), Some("https://qiita.com/b"));
    }
}
