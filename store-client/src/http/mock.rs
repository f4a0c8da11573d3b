//! Mock transport for testing.
//!
//! Allows queueing responses and capturing sent requests for verification.

use super::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock transport for testing.
///
/// Responses are served in FIFO order, one per `send()` call. An optional
/// per-response delay makes overlapping-operation tests deterministic
/// under tokio's paused clock.
#[derive(Debug, Default)]
pub struct MockHttp {
    inner: Arc<Mutex<MockHttpInner>>,
}

#[derive(Debug, Default)]
struct MockHttpInner {
    sent_requests: Vec<HttpRequest>,
    queue: VecDeque<Queued>,
}

#[derive(Debug)]
struct Queued {
    delay: Option<Duration>,
    result: Result<HttpResponse, TransportError>,
}

impl MockHttp {
    /// Create a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be returned by the next unanswered `send()`.
    pub fn queue_response(&self, response: HttpResponse) {
        let mut inner = self.inner.lock().unwrap();
        inner.queue.push_back(Queued {
            delay: None,
            result: Ok(response),
        });
    }

    /// Queue a 200 response with the given JSON body.
    pub fn queue_json(&self, body: Value) {
        self.queue_response(HttpResponse::ok(body));
    }

    /// Queue a response with an explicit status.
    pub fn queue_status(&self, status: u16, body: Value) {
        self.queue_response(HttpResponse::with_status(status, body));
    }

    /// Queue a network failure.
    pub fn queue_network_error(&self, message: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.queue.push_back(Queued {
            delay: None,
            result: Err(TransportError::Network(message.to_string())),
        });
    }

    /// Queue a response that resolves only after `delay`.
    pub fn queue_delayed(&self, delay: Duration, response: HttpResponse) {
        let mut inner = self.inner.lock().unwrap();
        inner.queue.push_back(Queued {
            delay: Some(delay),
            result: Ok(response),
        });
    }

    /// Get all requests that were sent.
    pub fn sent_requests(&self) -> Vec<HttpRequest> {
        let inner = self.inner.lock().unwrap();
        inner.sent_requests.clone()
    }

    /// Get the most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        let inner = self.inner.lock().unwrap();
        inner.sent_requests.last().cloned()
    }

    /// Clear all state (captured requests and the response queue).
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockHttpInner::default();
    }
}

impl Clone for MockHttp {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl HttpTransport for MockHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        // Capture the request and claim a queued response in issue order;
        // the sleep happens outside the lock.
        let queued = {
            let mut inner = self.inner.lock().unwrap();
            inner.sent_requests.push(request);
            inner.queue.pop_front()
        };

        let Some(queued) = queued else {
            return Err(TransportError::NoResponse);
        };

        if let Some(delay) = queued.delay {
            tokio::time::sleep(delay).await;
        }

        queued.result
    }
}
