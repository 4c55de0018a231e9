//
//  qiita-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Qiita client
//!
//! This module provides the types shared by the gateway, the verb helpers,
//! the paginator and every resource method. It includes error handling,
//! the response envelope and query-string construction.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorKind`] - The taxonomy value carried by every [`ApiError`]
//! - [`ApiResponse`] - Status, headers and (decoded) body of one round trip
//! - [`ResponseBody`] - A body that is either parsed JSON or raw text
//! - [`Query`] - Ordered query parameters
//! - Pagination types (re-exported from [`pagination`] submodule)
//! - `Link` header parsing (re-exported from [`link`] submodule)
//!
//! # Example
//!
//! ```rust
//! use qiita::api::common::{ApiError, ErrorKind};
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Unauthorized(message)) => println!("Please authenticate first: {}", message),
//!         Err(e) if e.kind() == ErrorKind::NotFound => println!("Not found: {}", e.message()),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

mod link;
mod pagination;

pub use link::*;
pub use pagination::*;

/// Unified error type for all Qiita API operations.
///
/// Every failure the gateway produces is one of these variants. The HTTP
/// variants are one-to-one with the status codes the platform documents;
/// anything else non-2xx lands in [`ApiError::Api`].
///
/// # Variants
///
/// | Variant | Kind | HTTP Status |
/// |---------|------|-------------|
/// | `Configuration` | `Configuration` | N/A (no request sent) |
/// | `Unauthorized` | `Unauthorized` | 401 |
/// | `Forbidden` | `Forbidden` | 403 |
/// | `NotFound` | `NotFound` | 404 |
/// | `RateLimited` | `RateLimited` | 429 |
/// | `InternalServer` | `InternalServer` | 500 |
/// | `Api` | `Generic` | any other non-2xx |
/// | `Network` | `Transport` | N/A |
/// | `Decode` | `Decode` | 2xx with an undecodable body |
/// | `Encode` | `Encode` | N/A (no request sent) |
/// | `InvalidHeader` | `Configuration` | N/A (no request sent) |
///
/// # Notes
///
/// - The message is fixed at construction; there are no setters.
/// - The `Network` variant converts from `reqwest::Error` unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client is not configured well enough to send a request.
    ///
    /// Raised before any network I/O, e.g. when the base URL is empty.
    /// The client stays usable after reconfiguration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The server answered 401 Unauthorized.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The server answered 403 Forbidden.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The server answered 404 Not Found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server answered 429 Too Many Requests.
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// The server answered 500 Internal Server Error.
    #[error("Internal server error: {0}")]
    InternalServer(String),

    /// Any other non-2xx response.
    #[error("API error ({status}): {message}")]
    Api {
        /// The status the server answered with
        status: StatusCode,
        /// Message from the response body, or a default
        message: String,
    },

    /// A transport-level failure, passed through as-is.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response could not be decoded into the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A caller-supplied header name or value (or the token) is not valid in
    /// an HTTP header.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// The taxonomy value of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    InternalServer,
    Generic,
    Transport,
    Decode,
    Encode,
}

impl ErrorKind {
    /// The message used when a failed response carries no message of its own.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Configuration => "The client is not configured",
            Self::Unauthorized => "Authentication is required or the access token is invalid",
            Self::Forbidden => "You do not have permission to access this resource",
            Self::NotFound => "The requested resource was not found",
            Self::RateLimited => "Rate limit exceeded, wait before sending more requests",
            Self::InternalServer => "The server encountered an internal error",
            Self::Generic => "The API returned an unexpected error",
            Self::Transport => "The request could not be delivered",
            Self::Decode => "The response could not be decoded",
            Self::Encode => "The request body could not be encoded",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Configuration => "ConfigurationError",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::RateLimited => "RateLimited",
            Self::InternalServer => "InternalServer",
            Self::Generic => "GenericApiError",
            Self::Transport => "TransportError",
            Self::Decode => "DecodeError",
            Self::Encode => "EncodeError",
        };
        f.write_str(name)
    }
}

impl ApiError {
    /// Classifies a non-2xx response.
    ///
    /// The message is taken from the body when it carries one (see
    /// [`extract_error_message`]); otherwise the kind's default message is
    /// used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qiita::api::common::{ApiError, ErrorKind, ResponseBody};
    /// use reqwest::StatusCode;
    ///
    /// let body = ResponseBody::parse(r#"{"message": "Not found", "type": "not_found"}"#);
    /// let err = ApiError::from_status(StatusCode::NOT_FOUND, &body);
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// assert_eq!(err.message(), "Not found");
    /// ```
    pub fn from_status(status: StatusCode, body: &ResponseBody) -> Self {
        let kind = match status.as_u16() {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            429 => ErrorKind::RateLimited,
            500 => ErrorKind::InternalServer,
            _ => ErrorKind::Generic,
        };

        let message = extract_error_message(body)
            .unwrap_or_else(|| kind.default_message().to_string());

        match kind {
            ErrorKind::Unauthorized => Self::Unauthorized(message),
            ErrorKind::Forbidden => Self::Forbidden(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::RateLimited => Self::RateLimited(message),
            ErrorKind::InternalServer => Self::InternalServer(message),
            _ => Self::Api { status, message },
        }
    }

    /// Returns the taxonomy value of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) | Self::InvalidHeader(_) => ErrorKind::Configuration,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::InternalServer(_) => ErrorKind::InternalServer,
            Self::Api { .. } => ErrorKind::Generic,
            Self::Network(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Encode(_) => ErrorKind::Encode,
        }
    }

    /// Returns the human-readable message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Configuration(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::RateLimited(m)
            | Self::InternalServer(m)
            | Self::InvalidHeader(m) => m.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Network(e) => e.to_string(),
            Self::Decode(e) | Self::Encode(e) => e.to_string(),
        }
    }

    /// Returns the HTTP status that produced this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::RateLimited(_) => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::InternalServer(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Extracts a human-readable message from an error response body.
///
/// Qiita returns errors in the format:
/// ```json
/// {"message": "Not found", "type": "not_found"}
/// ```
///
/// Some proxies in front of Qiita:Team answer with
/// `{"error": "..."}` or `{"error": {"message": "..."}}`, so those are
/// recognised too. Returns `None` for text bodies and bodies without a
/// non-empty message.
pub fn extract_error_message(body: &ResponseBody) -> Option<String> {
    let json = match body {
        ResponseBody::Json(json) => json,
        ResponseBody::Text(_) => return None,
    };

    let message = json
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| json.get("error").and_then(|e| e.as_str()))
        .or_else(|| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
        })?;

    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// A response body as returned by the gateway.
///
/// The gateway tries to parse every body as JSON. Bodies that are not JSON
/// (including the empty bodies of `204 No Content`) are kept as the raw text,
/// unaltered.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON
    Json(Value),
    /// The body was not valid JSON
    Text(String),
}

impl ResponseBody {
    /// Parses a raw body, falling back to the text itself.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Returns `true` when the body is empty text.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Converts the body to a JSON value.
    ///
    /// Empty text becomes `null`, other text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) if text.is_empty() => Value::Null,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the value does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.into_value()).map_err(ApiError::Decode)
    }
}

/// One HTTP round trip: status, headers and body.
///
/// The gateway produces `ApiResponse<ResponseBody>`; the verb helpers decode
/// it into `ApiResponse<T>`. Header lookups are case-insensitive.
///
/// # Example
///
/// ```rust
/// use qiita::api::common::{ApiResponse, ResponseBody};
/// use reqwest::header::HeaderMap;
/// use reqwest::StatusCode;
///
/// let response = ApiResponse {
///     status: StatusCode::OK,
///     headers: HeaderMap::new(),
///     data: ResponseBody::parse(r#"{"id": "c686397e4a0f4f11683d"}"#),
/// };
/// let decoded: ApiResponse<serde_json::Value> = response.decode().unwrap();
/// assert_eq!(decoded.data["id"], "c686397e4a0f4f11683d");
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The response status code.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The response payload data.
    pub data: T,
}

impl ApiResponse<ResponseBody> {
    /// Decodes the body, keeping status and headers.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, ApiError> {
        Ok(ApiResponse {
            status: self.status,
            headers: self.headers,
            data: self.data.decode()?,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Discards status and headers.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Ordered query parameters.
///
/// Parameters are serialized in insertion order using
/// `application/x-www-form-urlencoded` encoding.
///
/// # Example
///
/// ```rust
/// use qiita::api::common::Query;
///
/// let query = Query::new().with("page", 2).with("query", "tag:rust");
/// assert_eq!(query.to_query_string(), "page=2&query=tag%3Arust");
/// assert_eq!(
///     query.append_to("https://qiita.com/api/v2/items"),
///     "https://qiita.com/api/v2/items?page=2&query=tag%3Arust"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Appends a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter only when `value` is `Some`.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends every parameter of `other`.
    pub fn extend(&mut self, other: &Query) {
        self.pairs.extend(other.pairs.iter().cloned());
    }

    /// Removes every parameter named `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serializes the parameters without a leading `?`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends the parameters to `url`, using `&` when it already carries a
    /// query.
    pub fn append_to(&self, url: &str) -> String {
        if self.is_empty() {
            return url.to_string();
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", url, separator, self.to_query_string())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (k, v) in iter {
            query.push(k, v);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        let body = ResponseBody::Text(String::new());
        let cases = [
            (401, ErrorKind::Unauthorized),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (429, ErrorKind::RateLimited),
            (500, ErrorKind::InternalServer),
            (400, ErrorKind::Generic),
            (502, ErrorKind::Generic),
            (503, ErrorKind::Generic),
        ];
        for (code, kind) in cases {
            let status = StatusCode::from_u16(code).unwrap();
            let err = ApiError::from_status(status, &body);
            assert_eq!(err.kind(), kind, "status {}", code);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn test_message_from_body() {
        let body = ResponseBody::Json(json!({"message": "Rate limit exceeded", "type": "rate_limit_exceeded"}));
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, &body);
        assert!(matches!(err, ApiError::RateLimited(ref m) if m == "Rate limit exceeded"));
    }

    #[test]
    fn test_default_message_when_body_has_none() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, &ResponseBody::Json(json!({})));
        assert_eq!(err.message(), ErrorKind::Forbidden.default_message());

        let err = ApiError::from_status(StatusCode::NOT_FOUND, &ResponseBody::Text("<html>".into()));
        assert_eq!(err.message(), ErrorKind::NotFound.default_message());
    }

    #[test]
    fn test_alternative_error_shapes() {
        let flat = ResponseBody::Json(json!({"error": "bad token"}));
        assert_eq!(extract_error_message(&flat).as_deref(), Some("bad token"));

        let nested = ResponseBody::Json(json!({"error": {"message": "nested"}}));
        assert_eq!(extract_error_message(&nested).as_deref(), Some("nested"));

        let blank = ResponseBody::Json(json!({"message": "  "}));
        assert_eq!(extract_error_message(&blank), None);
    }

    #[test]
    fn test_response_body_parse_falls_back_to_text() {
        assert_eq!(ResponseBody::parse("not json"), ResponseBody::Text("not json".into()));
        assert_eq!(ResponseBody::parse("[1,2]"), ResponseBody::Json(json!([1, 2])));
        assert!(ResponseBody::parse("").is_empty());
    }

    #[test]
    fn test_empty_body_decodes_to_unit() {
        let body = ResponseBody::parse("");
        let decoded: Result<(), ApiError> = body.decode();
        assert!(decoded.is_ok());
    }

    #[test]
    fn test_query_appends_with_ampersand() {
        let query = Query::new().with("per_page", 20);
        assert_eq!(
            query.append_to("https://qiita.com/api/v2/items?page=1"),
            "https://qiita.com/api/v2/items?page=1&per_page=20"
        );
        assert_eq!(Query::new().append_to("https://qiita.com"), "https://qiita.com");
    }

    #[test]
    fn test_query_preserves_call_order() {
        let query: Query = vec![("z", "1"), ("a", "2"), ("m", "a b")].into_iter().collect();
        assert_eq!(query.to_query_string(), "z=1&a=2&m=a+b");
    }
}
