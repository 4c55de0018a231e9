//
//  qiita-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination for Qiita list endpoints
//!
//! Qiita list endpoints take `page` (1-indexed) and `per_page` query
//! parameters, both capped at 100 by the platform, and advertise the
//! following page in a `Link` response header. [`Paginator`] hides which of
//! the two is used to move forward.
//!
//! # Overview
//!
//! | Style | Cursor | Stops when |
//! |-------|--------|------------|
//! | [`PaginationStyle::LinkHeader`] | URL from `rel="next"` | no `next` link |
//! | [`PaginationStyle::PageCounter`] | page number | empty page |
//!
//! Both styles additionally stop after `max_pages` pages (100 by default),
//! counted from the last (re)start.
//!
//! # Example
//!
//! ```rust,no_run
//! use qiita::api::QiitaClient;
//! use qiita::api::common::PaginationOptions;
//!
//! # async fn example() -> Result<(), qiita::api::ApiError> {
//! let client = QiitaClient::new()?;
//! let mut pages = client.fetch_items(Default::default());
//!
//! // First two pages
//! let first = pages.advance().await?;
//! let second = pages.advance().await?;
//!
//! // Back to the top without building a new paginator
//! let first_again = pages.restart().await?;
//! assert_eq!(first.map(|p| p.len()), first_again.map(|p| p.len()));
//! # let _ = second;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{next_link, ApiError, Query};
use crate::api::client::{QiitaClient, RequestOptions};

/// Largest page number and page size the platform accepts.
pub const PLATFORM_PAGE_LIMIT: u32 = 100;

/// Default ceiling on the number of pages a paginator fetches.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// How a paginator moves from one page to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaginationStyle {
    /// Follow the `rel="next"` entry of the `Link` response header.
    #[default]
    #[serde(rename = "link")]
    LinkHeader,

    /// Increment the `page` query parameter until an empty page comes back.
    #[serde(rename = "page")]
    PageCounter,
}

impl fmt::Display for PaginationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkHeader => f.write_str("link"),
            Self::PageCounter => f.write_str("page"),
        }
    }
}

impl FromStr for PaginationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "link" | "link-header" => Ok(Self::LinkHeader),
            "page" | "page-counter" => Ok(Self::PageCounter),
            other => Err(format!(
                "unknown pagination style '{}' (expected 'link' or 'page')",
                other
            )),
        }
    }
}

/// Per-client pagination policy.
///
/// The termination conditions are independent: with the defaults, a
/// page-counter paginator stops at the first empty page or after 100 pages,
/// whichever comes first. Disabling both makes page-counter iteration
/// unbounded.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `style` | `LinkHeader` |
/// | `per_page` | `None` (server default) |
/// | `max_pages` | `Some(100)` |
/// | `stop_on_empty` | `true` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Cursoring scheme for new paginators
    #[serde(default)]
    pub style: PaginationStyle,

    /// `per_page` sent when the caller does not pass one
    #[serde(default)]
    pub per_page: Option<u32>,

    /// Hard ceiling on pages fetched since the last (re)start
    #[serde(default = "default_max_pages")]
    pub max_pages: Option<u32>,

    /// End page-counter iteration at the first empty page
    #[serde(default = "default_stop_on_empty")]
    pub stop_on_empty: bool,
}

fn default_max_pages() -> Option<u32> {
    Some(DEFAULT_MAX_PAGES)
}

fn default_stop_on_empty() -> bool {
    true
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            style: PaginationStyle::default(),
            per_page: None,
            max_pages: default_max_pages(),
            stop_on_empty: default_stop_on_empty(),
        }
    }
}

/// Page selection accepted by paginated resource methods.
///
/// # Example
///
/// ```rust
/// use qiita::api::common::PaginationOptions;
///
/// let options = PaginationOptions { page: Some(3), per_page: Some(50) };
/// assert_eq!(options.to_query().to_query_string(), "page=3&per_page=50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// First page to request (1 to 100)
    #[serde(default)]
    pub page: Option<u32>,

    /// Elements per page (1 to 100)
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl PaginationOptions {
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_opt("page", self.page)
            .with_opt("per_page", self.per_page)
    }
}

/// Position of a paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Page number for page-counter pagination
    Page(u32),
    /// Absolute URL for link-header pagination
    Link(String),
}

/// State of a paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginatorState {
    /// The next [`Paginator::advance`] requests this cursor
    Active(Cursor),
    /// No further pages; only [`Paginator::restart`] revives the paginator
    Exhausted,
}

/// A lazy, restartable sequence of decoded pages.
///
/// Each call to [`advance`](Self::advance) issues one GET through the
/// gateway and yields that page's array. [`restart`](Self::restart) goes back
/// to the first page. Errors end the sequence: the paginator becomes
/// exhausted and the error is returned unchanged.
///
/// The paginator borrows the client, so the client's configuration cannot
/// change while a paginator is alive.
pub struct Paginator<'a, T> {
    client: &'a QiitaClient,
    url: String,
    query: Query,
    options: RequestOptions,
    config: PaginationConfig,
    initial: Cursor,
    state: PaginatorState,
    pages_fetched: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Paginator<'a, T> {
    /// Creates a paginator over `url` using the client's pagination config.
    ///
    /// For page-counter pagination a `page` entry in `query` becomes the
    /// initial cursor. For link-header pagination the whole query is part of
    /// the initial URL.
    pub fn new(client: &'a QiitaClient, url: impl Into<String>, query: Query) -> Self {
        let config = client.config().pagination.clone();
        Self::with_config(client, url, query, config)
    }

    /// Creates a paginator with an explicit policy.
    pub fn with_config(
        client: &'a QiitaClient,
        url: impl Into<String>,
        mut query: Query,
        config: PaginationConfig,
    ) -> Self {
        let url = url.into();

        if let Some(per_page) = config.per_page {
            if !query.pairs().iter().any(|(k, _)| k == "per_page") {
                query.push("per_page", per_page);
            }
        }

        let (url, query, initial) = match config.style {
            PaginationStyle::PageCounter => {
                let start = query
                    .pairs()
                    .iter()
                    .find(|(k, _)| k == "page")
                    .and_then(|(_, v)| v.parse::<u32>().ok())
                    .unwrap_or(1);
                query.remove("page");
                (url, query, Cursor::Page(start))
            }
            PaginationStyle::LinkHeader => {
                let initial_url = query.append_to(&url);
                (url, Query::new(), Cursor::Link(initial_url))
            }
        };

        Self {
            client,
            url,
            query,
            options: RequestOptions::default(),
            config,
            state: PaginatorState::Active(initial.clone()),
            initial,
            pages_fetched: 0,
            _marker: PhantomData,
        }
    }

    /// Sends `options` (extra headers) with every page request.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Fetches and yields the page at the current cursor.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted: no `next` link on
    /// the previous page, an empty page (page-counter), or the page ceiling.
    /// While a ceiling is set, a page-counter paginator also stops after
    /// page [`PLATFORM_PAGE_LIMIT`] whatever page it started on.
    ///
    /// # Errors
    ///
    /// Any gateway error. The paginator is exhausted afterwards.
    pub async fn advance(&mut self) -> Result<Option<Vec<T>>, ApiError> {
        let cursor = match &self.state {
            PaginatorState::Active(cursor) => cursor.clone(),
            PaginatorState::Exhausted => return Ok(None),
        };

        if let Some(max_pages) = self.config.max_pages {
            if self.pages_fetched >= max_pages {
                tracing::warn!("Stopping pagination of {} after {} pages", self.url, max_pages);
                self.state = PaginatorState::Exhausted;
                return Ok(None);
            }
        }

        let url = self.url_for(&cursor);
        let response = match self
            .client
            .get::<Vec<T>>(&url, &Query::new(), &self.options)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.state = PaginatorState::Exhausted;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        match cursor {
            Cursor::Page(page) => {
                if response.data.is_empty() && self.config.stop_on_empty {
                    tracing::debug!("Page {} of {} is empty", page, self.url);
                    self.state = PaginatorState::Exhausted;
                    return Ok(None);
                }
                let at_platform_limit =
                    self.config.max_pages.is_some() && page >= PLATFORM_PAGE_LIMIT;
                self.state = match page.checked_add(1) {
                    Some(next) if !at_platform_limit => PaginatorState::Active(Cursor::Page(next)),
                    _ => {
                        tracing::debug!("Page {} is the last page {} serves", page, self.url);
                        PaginatorState::Exhausted
                    }
                };
            }
            Cursor::Link(current) => {
                self.state = match next_link(&response.headers, Some(&current)) {
                    Some(next) => PaginatorState::Active(Cursor::Link(next)),
                    None => PaginatorState::Exhausted,
                };
            }
        }

        Ok(Some(response.data))
    }

    /// Goes back to the initial cursor and yields the first page again.
    ///
    /// Works from any state, including after exhaustion.
    pub async fn restart(&mut self) -> Result<Option<Vec<T>>, ApiError> {
        self.reset();
        self.advance().await
    }

    /// Goes back to the initial cursor without fetching.
    pub fn reset(&mut self) {
        self.state = PaginatorState::Active(self.initial.clone());
        self.pages_fetched = 0;
    }

    /// Fetches every remaining page and flattens them.
    pub async fn collect_all(&mut self) -> Result<Vec<T>, ApiError> {
        let mut all = Vec::new();
        while let Some(page) = self.advance().await? {
            all.extend(page);
        }
        Ok(all)
    }

    pub fn state(&self) -> &PaginatorState {
        &self.state
    }

    /// The cursor the next [`advance`](Self::advance) will request.
    pub fn cursor(&self) -> Option<&Cursor> {
        match &self.state {
            PaginatorState::Active(cursor) => Some(cursor),
            PaginatorState::Exhausted => None,
        }
    }

    pub fn initial_cursor(&self) -> &Cursor {
        &self.initial
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == PaginatorState::Exhausted
    }

    /// Pages fetched since creation or the last reset.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn style(&self) -> PaginationStyle {
        self.config.style
    }

    fn url_for(&self, cursor: &Cursor) -> String {
        match cursor {
            Cursor::Page(page) => {
                let mut query = self.query.clone();
                query.push("page", page);
                query.append_to(&self.url)
            }
            Cursor::Link(url) => url.clone(),
        }
    }
}

impl<T> fmt::Debug for Paginator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("url", &self.url)
            .field("style", &self.config.style)
            .field("state", &self.state)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("link".parse::<PaginationStyle>(), Ok(PaginationStyle::LinkHeader));
        assert_eq!("PAGE".parse::<PaginationStyle>(), Ok(PaginationStyle::PageCounter));
        assert!("offset".parse::<PaginationStyle>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.style, PaginationStyle::LinkHeader);
        assert_eq!(config.max_pages, Some(DEFAULT_MAX_PAGES));
        assert!(config.stop_on_empty);
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: PaginationConfig = toml::from_str("style = \"page\"").unwrap();
        assert_eq!(config.style, PaginationStyle::PageCounter);
        assert_eq!(config.max_pages, Some(100));
        assert!(config.stop_on_empty);
    }
}
