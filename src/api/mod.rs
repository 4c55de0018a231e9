//
//  qiita-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Qiita API v2
//! (`https://qiita.com/api/v2`), including Qiita Team hosts
//! (`https://<team>.qiita.com`).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Configuration, the request gateway and the verb helpers
//! - [`transport`]: The pluggable "send one request" seam
//! - [`common`]: Errors, response envelope, query strings, `Link` header
//!   parsing and pagination
//! - [`entities`]: Typed documents (items, users, tags, ...)
//! - [`resources`]: One method per endpoint
//!
//! ## Usage
//!
//! ### Creating a Client
//!
//! ```rust,no_run
//! use qiita::api::QiitaClient;
//!
//! let mut client = QiitaClient::new().expect("Failed to create client");
//! client.set_token("your-access-token");
//!
//! // Qiita Team
//! client.set_base_url("https://your-team.qiita.com");
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants, which map to common HTTP error scenarios:
//!
//! - `Unauthorized`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `InternalServer`: 500 Internal Server Error
//! - `Api`: any other non-2xx status

/// Request gateway and verb helpers.
///
/// Provides the [`QiitaClient`] struct which handles:
/// - Base URL, version path and token configuration
/// - Authentication header injection
/// - Request/response serialization
/// - Error handling and status code mapping
pub mod client;

/// Shared types: errors, responses, queries and pagination.
pub mod common;

/// Serde bindings for Qiita documents.
pub mod entities;

/// Per-endpoint methods on [`QiitaClient`].
pub mod resources;

/// The HTTP transport seam and its reqwest implementation.
pub mod transport;

pub use client::{ClientConfig, QiitaClient, RequestOptions};

/// Re-export of common API types.
///
/// - [`ApiError`]: Error type for API operations
/// - [`ApiResponse`]: Generic wrapper for API responses
pub use common::{ApiError, ApiResponse, ErrorKind};
