//
//  qiita-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Qiita API
//!
//! This module provides the core HTTP client for interacting with the Qiita
//! API. It owns the client configuration, builds every request and
//! classifies every response.
//!
//! ## Features
//!
//! - Base URL / API version path configuration with trailing-slash normalization
//! - Bearer token injection
//! - JSON serialization/deserialization
//! - Status code to [`ApiError`] mapping
//! - Pluggable [`Transport`]

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::common::{
    ApiError, ApiResponse, PaginationConfig, Paginator, Query, ResponseBody,
};
use crate::api::transport::{HttpRequest, ReqwestTransport, Transport};

/// The public Qiita host.
pub const DEFAULT_BASE_URL: &str = "https://qiita.com";

/// Path of API v2 below the host.
pub const DEFAULT_VERSION_PATH: &str = "/api/v2";

/// Removes a single trailing slash.
fn strip_trailing_slash(value: &str) -> String {
    value.strip_suffix('/').unwrap_or(value).to_string()
}

/// Configuration read by the gateway on every request.
///
/// `base_url` and `version_path` never end with a slash; the builder methods
/// and the client setters strip one. A token is only ever stored non-empty.
///
/// # Example
///
/// ```rust
/// use qiita::api::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .base_url("https://example.qiita.com/")
///     .token("c0ffee");
///
/// assert_eq!(config.get_base_url(), "https://example.qiita.com");
/// assert_eq!(config.get_version_path(), "/api/v2");
/// assert_eq!(config.get_token(), Some("c0ffee"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    version_path: String,
    token: Option<String>,
    /// Policy for paginators created by this client
    pub pagination: PaginationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version_path: DEFAULT_VERSION_PATH.to_string(),
            token: None,
            pagination: PaginationConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.set_base_url(url);
        self
    }

    pub fn version_path(mut self, path: &str) -> Self {
        self.set_version_path(path);
        self
    }

    pub fn token(mut self, token: &str) -> Self {
        self.set_token(token);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = strip_trailing_slash(url);
    }

    pub fn set_version_path(&mut self, path: &str) {
        self.version_path = strip_trailing_slash(path);
    }

    /// Stores the token. An empty string clears it.
    pub fn set_token(&mut self, token: &str) {
        self.token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get_version_path(&self) -> &str {
        &self.version_path
    }

    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Extra options accepted by every verb helper.
///
/// Only headers are recognised. They are merged into the request before the
/// gateway adds its own; they cannot change the method, URL or body.
///
/// # Example
///
/// ```rust
/// use qiita::api::client::RequestOptions;
///
/// let options = RequestOptions::new().header("Accept-Language", "ja");
/// assert_eq!(options.headers().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header. Later values for the same name win.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// One request as described by a caller, before the gateway touches it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Query,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Query::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    /// Merges caller options into the request headers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] for names or values that cannot
    /// appear in an HTTP header.
    pub fn options(mut self, options: &RequestOptions) -> Result<Self, ApiError> {
        for (name, value) in options.headers() {
            let name = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| ApiError::InvalidHeader(format!("invalid header name '{}'", name)))?;
            let value = HeaderValue::from_str(value.trim()).map_err(|_| {
                ApiError::InvalidHeader(format!("invalid value for header '{}'", name))
            })?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }
}

/// Serializes a request payload for the verb helpers.
pub fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Option<Value>, ApiError> {
    serde_json::to_value(body)
        .map(Some)
        .map_err(ApiError::Encode)
}

/// The main HTTP client for interacting with the Qiita API.
///
/// This client handles all HTTP communication with Qiita, including:
/// - Reading the base URL, version path and token on every request
/// - Applying the bearer token
/// - Serializing request bodies and parsing response bodies
/// - Mapping non-success status codes to [`ApiError`]
///
/// Resource methods (`fetch_item`, `fetch_items`, ...) live in
/// [`crate::api::resources`] as further `impl QiitaClient` blocks.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use qiita::api::QiitaClient;
///
/// let mut client = QiitaClient::new()?;
/// client.set_token("your-access-token");
/// # Ok::<(), qiita::api::ApiError>(())
/// ```
pub struct QiitaClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl QiitaClient {
    /// Creates a client for the public Qiita host with no token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from a configuration, using the reqwest transport.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sets the access token sent as `Authorization: Bearer <token>`.
    ///
    /// An empty token clears it; requests are then sent unauthenticated.
    pub fn set_token(&mut self, token: &str) {
        self.config.set_token(token);
    }

    pub fn clear_token(&mut self) {
        self.config.clear_token();
    }

    /// Sets the host, e.g. `https://your-team.qiita.com`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use qiita::api::QiitaClient;
    ///
    /// let mut client = QiitaClient::new()?;
    /// client.set_base_url("https://example.com/");
    /// assert_eq!(client.base_url(), "https://example.com");
    /// # Ok::<(), qiita::api::ApiError>(())
    /// ```
    pub fn set_base_url(&mut self, url: &str) {
        self.config.set_base_url(url);
    }

    /// Sets the API path below the host, e.g. `/api/v2`.
    pub fn set_version_path(&mut self, path: &str) {
        self.config.set_version_path(path);
    }

    pub fn set_pagination(&mut self, pagination: PaginationConfig) {
        self.config.pagination = pagination;
    }

    pub fn token(&self) -> Option<&str> {
        self.config.get_token()
    }

    pub fn base_url(&self) -> &str {
        self.config.get_base_url()
    }

    pub fn version_path(&self) -> &str {
        self.config.get_version_path()
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.config.pagination
    }

    /// Returns `base_url + version_path + path`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url(), self.version_path(), path)
    }

    /// Resolves user input to an absolute URL.
    ///
    /// Absolute `http(s)` URLs are returned unchanged; anything else is
    /// treated as a path below the API version path.
    pub fn resolve_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else if path_or_url.starts_with('/') {
            self.endpoint(path_or_url)
        } else {
            self.endpoint(&format!("/{}", path_or_url))
        }
    }

    /// Executes exactly one HTTP round trip.
    ///
    /// # Behaviour
    ///
    /// 1. Fails with [`ApiError::Configuration`] when no base URL is set,
    ///    without touching the network.
    /// 2. Adds `Content-Type: application/json` unless already present.
    /// 3. Adds `Authorization: Bearer <token>` when a token is set.
    /// 4. Appends the query to the URL; serializes the body for every
    ///    method except GET.
    /// 5. Parses the body as JSON, keeping raw text when that fails.
    /// 6. Maps non-2xx statuses with [`ApiError::from_status`].
    ///
    /// # Errors
    ///
    /// See [`ApiError`]. Transport failures are returned as they come.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse<ResponseBody>, ApiError> {
        if self.base_url().is_empty() {
            return Err(ApiError::Configuration(
                "host not configured; call set_base_url before sending requests".to_string(),
            ));
        }

        let ApiRequest {
            method,
            url,
            query,
            body,
            mut headers,
        } = request;

        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(token) = self.token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiError::InvalidHeader("access token contains characters not allowed in a header".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let url = query.append_to(&url);
        let body = match body {
            Some(value) if method != Method::GET && !value.is_null() => {
                Some(serde_json::to_string(&value).map_err(ApiError::Encode)?)
            }
            _ => None,
        };

        tracing::debug!("{} {}", method, url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        tracing::debug!("Response {} ({} bytes)", response.status, response.body.len());

        let data = ResponseBody::parse(&response.body);
        if !response.status.is_success() {
            return Err(ApiError::from_status(response.status, &data));
        }

        Ok(ApiResponse {
            status: response.status,
            headers: response.headers,
            data,
        })
    }

    /// Makes an HTTP GET request.
    ///
    /// `query` is appended to `url`; GET requests never carry a body.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use qiita::api::QiitaClient;
    /// use qiita::api::client::RequestOptions;
    /// use qiita::api::common::Query;
    /// use qiita::api::entities::Item;
    ///
    /// # async fn example() -> Result<(), qiita::api::ApiError> {
    /// let client = QiitaClient::new()?;
    /// let url = client.endpoint("/items");
    /// let query = Query::new().with("query", "tag:rust");
    /// let items = client.get::<Vec<Item>>(&url, &query, &RequestOptions::default()).await?;
    /// println!("{} items", items.data.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Query,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let request = ApiRequest::new(Method::GET, url)
            .query(query.clone())
            .options(options)?;
        self.send(request).await?.decode()
    }

    /// Makes an HTTP POST request with an optional JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send_with_body(Method::POST, url, body, options).await
    }

    /// Makes an HTTP PUT request with an optional JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send_with_body(Method::PUT, url, body, options).await
    }

    /// Makes an HTTP PATCH request with an optional JSON body.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send_with_body(Method::PATCH, url, body, options).await
    }

    /// Makes an HTTP DELETE request with an optional JSON body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.send_with_body(Method::DELETE, url, body, options).await
    }

    async fn send_with_body<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ApiResponse<T>, ApiError> {
        let request = ApiRequest::new(method, url).body(body).options(options)?;
        self.send(request).await?.decode()
    }

    /// Creates a paginator over a list endpoint using this client's
    /// pagination config.
    pub fn paginate<T: DeserializeOwned>(&self, url: &str, query: Query) -> Paginator<'_, T> {
        Paginator::new(self, url, query)
    }
}

impl std::fmt::Debug for QiitaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QiitaClient")
            .field("base_url", &self.config.base_url)
            .field("version_path", &self.config.version_path)
            .field("authenticated", &self.config.token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.get_base_url(), "https://qiita.com");
        assert_eq!(config.get_version_path(), "/api/v2");
        assert_eq!(config.get_token(), None);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let mut config = ClientConfig::default();
        config.set_base_url("https://example.com/");
        config.set_version_path("/api/v1/");
        assert_eq!(config.get_base_url(), "https://example.com");
        assert_eq!(config.get_version_path(), "/api/v1");

        config.set_base_url("https://example.com");
        assert_eq!(config.get_base_url(), "https://example.com");
    }

    #[test]
    fn test_empty_token_clears() {
        let config = ClientConfig::new().token("abc").token("");
        assert_eq!(config.get_token(), None);
    }

    #[test]
    fn test_endpoint_and_resolve_url() {
        let client = QiitaClient::with_config(ClientConfig::new().base_url("https://team.qiita.com/")).unwrap();
        assert_eq!(client.endpoint("/items"), "https://team.qiita.com/api/v2/items");
        assert_eq!(client.resolve_url("items/abc"), "https://team.qiita.com/api/v2/items/abc");
        assert_eq!(client.resolve_url("https://other.example/x"), "https://other.example/x");
    }

    #[test]
    fn test_invalid_option_header_is_rejected() {
        let result = ApiRequest::new(Method::GET, "https://qiita.com")
            .options(&RequestOptions::new().header("bad header", "x"));
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }
}
