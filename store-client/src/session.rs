//! The session boundary: a shared handle to the current credential token.
//!
//! The store never creates or refreshes tokens - the authentication
//! domain writes them after login, and the request pipeline reads them
//! per request. The only write this crate performs is the clear on a 401
//! response. The handle is injected into the pipeline explicitly, so
//! tests can supply their own.

use std::sync::{Arc, RwLock};

/// A cloneable handle to the process-wide session token.
///
/// Clones share the same underlying slot.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionHandle {
    /// Create an anonymous (logged-out) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Read the current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Install a token (called by the authentication domain after login).
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    /// Drop the token, logging the user out locally.
    pub fn clear(&self) {
        *self.token.write().unwrap() = None;
    }

    /// Whether a token is currently present.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }
}
