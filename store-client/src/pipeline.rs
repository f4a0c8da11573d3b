//! The authenticated request pipeline.
//!
//! Every outgoing call goes through two stages:
//!
//! - **Outbound**: the current session is read and, when a token is
//!   present, attached as a bearer credential. No other side effects.
//! - **Inbound**: a 401 response clears the session (logs the user out
//!   locally) before the failure propagates. Every other non-2xx status
//!   passes through unchanged for the caller to interpret.
//!
//! One attempt per call - no retries, no backoff, no timeouts here.

use serde_json::Value;
use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::session::SessionHandle;

/// A failed request, as seen by the operation dispatchers.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The decoded error body.
        body: Value,
    },
}

impl RequestError {
    /// The human-readable failure reason per the API contract: the error
    /// body's `message` field when present, else the per-operation
    /// fallback.
    pub fn reason(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            Self::Transport(_) => fallback.to_string(),
        }
    }

    /// Whether this failure was an authorization rejection.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Wraps a transport with credential injection and session invalidation.
#[derive(Debug, Clone)]
pub struct RequestPipeline<T> {
    transport: T,
    session: SessionHandle,
}

impl<T: HttpTransport> RequestPipeline<T> {
    /// Create a pipeline over a transport, with an injected session
    /// accessor.
    pub fn new(transport: T, session: SessionHandle) -> Self {
        Self { transport, session }
    }

    /// The session this pipeline reads credentials from.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// A reference to the underlying transport (for testing).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one request through both stages.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, RequestError> {
        if let Some(token) = self.session.token() {
            request.bearer = Some(token);
        }

        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            // The token is invalid or expired: drop the local session
            // before the failure propagates to the caller.
            tracing::warn!("{} {} returned 401, clearing session", method, path);
            self.session.clear();
        }

        if !response.is_success() {
            tracing::debug!("{} {} failed with status {}", method, path, response.status);
            return Err(RequestError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response)
    }
}
