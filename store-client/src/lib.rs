//! # store-client
//!
//! Async client for the Bazaar marketplace API with a reactive local store.
//!
//! This is the crate applications use to keep a local mirror of
//! server-owned resources (listings, categories, conversations, payments,
//! the user profile, notifications) consistent with the remote API.
//!
//! ## Features
//!
//! - **Authenticated pipeline**: bearer credentials attached per request,
//!   session invalidated locally on 401
//! - **Transport abstraction**: pluggable transport layer (reqwest, mock)
//! - **Pure state transitions**: uses store-core for side-effect-free merge
//!   logic
//! - **Observable state**: subscribe to a change feed, snapshot the full
//!   tree at any time
//!
//! ## Example
//!
//! ```ignore
//! use bazaar_store_client::{ClientConfig, MarketClient, SessionHandle};
//!
//! let session = SessionHandle::with_token("jwt-from-login");
//! let client = MarketClient::over_http(ClientConfig::new("https://api.bazaar.example"), session);
//!
//! client.fetch_listings().await;
//! let state = client.snapshot().await;
//! println!("{} listings", state.listings.items.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod http;
pub mod pipeline;
pub mod session;
pub mod store;

pub use client::{CategoryQuery, ClientConfig, MarketClient};
pub use http::{
    HttpRequest, HttpResponse, HttpTransport, Method, MockHttp, ReqwestTransport, TransportError,
};
pub use pipeline::{RequestError, RequestPipeline};
pub use session::SessionHandle;
pub use store::Store;
