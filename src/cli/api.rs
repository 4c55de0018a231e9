//
//  qiita-cli
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! This command makes HTTP requests to the Qiita API v2 through the same
//! client the other commands use, similar to `gh api` for GitHub. It's
//! useful for endpoints that aren't covered by other commands or for
//! debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Get the authenticated user
//! qiita api /authenticated_user
//!
//! # Create an item with POST
//! qiita api -X POST /items \
//!     -F title="Hello" -F body="# Hello" -F 'tags=[{"name":"Rust","versions":[]}]'
//!
//! # Collect every page of a listing
//! qiita api '/items?query=tag:rust' --paginate
//! ```

use std::fs;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::client::{ApiRequest, RequestOptions};
use crate::api::common::{Paginator, Query};
use crate::config::Config;

use super::GlobalOptions;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint below /api/v2 (e.g., /items), or an absolute URL
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request headers (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Request body fields as JSON (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw field values (not JSON-encoded, strings only)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    /// Collect every page into one JSON array (GET only)
    #[arg(long)]
    pub paginate: bool,

    /// Include response status and headers in output
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Suppress output (only fail on error)
    #[arg(long)]
    pub silent: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client_with_timeout(&config, Some(Duration::from_secs(self.timeout)))?;

        let method = self.parse_method()?;
        let options = self.build_options()?;
        let url = client.resolve_url(&self.endpoint);

        if self.paginate {
            if method != Method::GET {
                bail!("--paginate only works with GET requests");
            }
            let (path, query) = split_query(&url);
            let mut pages: Paginator<'_, Value> =
                Paginator::new(&client, path, query).with_options(options);
            let values = pages.collect_all().await?;
            if !self.silent {
                println!("{}", serde_json::to_string_pretty(&values)?);
            }
            return Ok(());
        }

        let body = self.build_body()?;
        let request = ApiRequest::new(method, url).body(body).options(&options)?;
        let response = client.send(request).await?;

        if self.include {
            println!("{} {}", style("HTTP").dim(), response.status);
            for (name, value) in response.headers.iter() {
                println!("{}: {}", name, value.to_str().unwrap_or(""));
            }
            println!();
        }

        if self.silent {
            return Ok(());
        }

        match response.data.into_value() {
            Value::Null => {}
            Value::String(text) => println!("{}", text),
            json => println!("{}", serde_json::to_string_pretty(&json)?),
        }

        Ok(())
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input)?
            };

            let value: Value = serde_json::from_str(&content)?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = serde_json::Map::new();
        for field in &self.field {
            let (key, raw) = split_field(field)?;
            set_nested_value(&mut body, key, parse_value(raw));
        }
        for field in &self.raw_field {
            let (key, raw) = split_field(field)?;
            set_nested_value(&mut body, key, Value::String(raw.to_string()));
        }

        Ok(Some(Value::Object(body)))
    }

    fn build_options(&self) -> Result<RequestOptions> {
        let mut options = RequestOptions::new();
        for header in &self.header {
            let Some((name, value)) = header.split_once(':') else {
                bail!("Invalid header format: {}. Expected 'Name: Value'", header);
            };
            options = options.header(name.trim(), value.trim());
        }
        Ok(options)
    }
}

/// Splits `key=value`.
fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Interprets a `-F` value: literals, numbers and JSON arrays/objects keep
/// their type, everything else is a string.
fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

/// Inserts `value` at a dotted path, creating objects on the way.
fn set_nested_value(obj: &mut serde_json::Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

/// Moves the query string of `url` into a [`Query`] so the paginator can
/// own the `page` parameter.
fn split_query(url: &str) -> (String, Query) {
    match url.split_once('?') {
        Some((path, query)) => (
            path.to_string(),
            url::form_urlencoded::parse(query.as_bytes()).collect(),
        ),
        None => (url.to_string(), Query::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("1.5"), json!(1.5));
        assert_eq!(parse_value("[1,2]"), json!([1, 2]));
        assert_eq!(parse_value("[broken"), json!("[broken"));
        assert_eq!(parse_value("Rust"), json!("Rust"));
    }

    #[test]
    fn test_set_nested_value() {
        let mut body = serde_json::Map::new();
        set_nested_value(&mut body, "title", json!("Hello"));
        set_nested_value(&mut body, "group.url_name", json!("dev"));
        set_nested_value(&mut body, "group.private", json!(true));
        assert_eq!(
            Value::Object(body),
            json!({"title": "Hello", "group": {"url_name": "dev", "private": true}})
        );
    }

    #[test]
    fn test_split_field() {
        assert_eq!(split_field("body=a=b").unwrap(), ("body", "a=b"));
        assert!(split_field("novalue").is_err());
        assert!(split_field("=x").is_err());
    }

    #[test]
    fn test_split_query() {
        let (path, query) = split_query("https://qiita.com/api/v2/items?query=tag%3Arust&page=3");
        assert_eq!(path, "https://qiita.com/api/v2/items");
        assert_eq!(
            query.pairs(),
            &[
                ("query".to_string(), "tag:rust".to_string()),
                ("page".to_string(), "3".to_string())
            ]
        );
    }
}
