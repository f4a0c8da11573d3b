//! HTTP transport abstraction for the Bazaar client.
//!
//! This module provides a pluggable transport layer that abstracts the
//! underlying HTTP stack (reqwest in production, a mock for testing).
//!
//! # Design
//!
//! The transport is request/response oriented: `send()` takes one
//! [`HttpRequest`] and resolves to one [`HttpResponse`] carrying the raw
//! status and decoded JSON body. Any HTTP status is a successful
//! transport outcome - classifying 4xx/5xx is the request pipeline's job,
//! not the transport's.

mod mock;
mod reqwest;

pub use self::mock::MockHttp;
pub use self::reqwest::ReqwestTransport;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The request body could not be encoded as JSON.
    #[error("request encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The mock transport had nothing queued for this request.
    #[error("no response queued")]
    NoResponse,
}

/// HTTP method of an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read.
    Get,
    /// Create / send.
    Post,
    /// Update.
    Put,
    /// Remove.
    Delete,
}

impl Method {
    /// The method name on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing API request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base URL (e.g. `/listings/3`).
    pub path: String,
    /// Query parameters.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Bearer token. Left empty by callers; the request pipeline fills it
    /// in from the session.
    pub bearer: Option<String>,
}

impl HttpRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    /// A GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// A POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// A PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// A DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach query parameters.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, TransportError> {
        self.body = Some(serde_json::to_value(body).map_err(TransportError::Encode)?);
        Ok(self)
    }
}

/// One incoming API response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body. `Null` when the response had no (JSON) body.
    pub body: Value,
}

impl HttpResponse {
    /// A 200 response with the given body.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// A response with an explicit status.
    pub fn with_status(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait for issuing API requests.
///
/// Implementations handle the underlying HTTP stack (reqwest, mock, etc).
/// Any HTTP response - including 4xx/5xx - resolves to `Ok`; `Err` means
/// the request never produced a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one request and wait for its response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
