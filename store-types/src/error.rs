//! Error types for the Bazaar client store.

use thiserror::Error;

/// Errors that can occur while interpreting remote payloads.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A success response's JSON did not match the expected payload shape.
    #[error("payload decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}
