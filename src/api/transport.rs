//
//  qiita-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The gateway only needs one capability from the network: send a request
//! and get back status, headers and body. [`Transport`] is that capability;
//! [`ReqwestTransport`] is the implementation used outside of tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use qiita::api::client::{ClientConfig, QiitaClient};
//! use qiita::api::transport::ReqwestTransport;
//!
//! let transport = ReqwestTransport::with_timeout(Duration::from_secs(10))?;
//! let client = QiitaClient::with_transport(ClientConfig::default(), Arc::new(transport));
//! # Ok::<(), qiita::api::ApiError>(())
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};

use crate::api::common::ApiError;

/// A fully built request, ready to be written to the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<String>,
}

/// A complete response, body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Body decoded as UTF-8. Invalid sequences become U+FFFD.
    pub body: String,
}

/// Sends one request and awaits the whole response.
///
/// Implementations must not interpret the status code; non-2xx responses
/// are returned as `Ok`. Only failures to deliver the request or read the
/// response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's User-Agent and no timeout.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("qiita-cli/{}", crate::VERSION))
                .build()?,
        })
    }

    /// Creates a transport whose requests fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("qiita-cli/{}", crate::VERSION))
                .timeout(timeout)
                .build()?,
        })
    }

    /// Wraps an existing client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let body = match String::from_utf8(bytes.to_vec()) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Response body from {} is not valid UTF-8", request.url);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
