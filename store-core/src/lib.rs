//! # store-core
//!
//! Pure state transitions for the Bazaar client store (no I/O, instant tests).
//!
//! This crate implements the per-domain state machines that keep the local
//! mirror of server-owned resources consistent, without any network or
//! clock access.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take events as input and
//! mutate in-memory state, nothing else. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same events → same state)
//! - Easy reasoning about every transition
//!
//! The actual I/O (HTTP, wall clock) is performed by `store-client`, which
//! translates remote call outcomes into the events consumed here. Each
//! remote operation flows through the [`Remote`] lifecycle: a `Pending`
//! event at call start, then exactly one of `Fulfilled` or `Rejected`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod categories;
pub mod chat;
pub mod listings;
pub mod notifications;
pub mod payments;
pub mod remote;
pub mod store;
pub mod user;

pub use categories::{CategoriesEvent, CategoriesState};
pub use chat::{ChatEvent, ChatState, FetchedConversation, OpenConversation};
pub use listings::{ListingsEvent, ListingsState};
pub use notifications::{NotificationsEvent, NotificationsState, ReadReceipt};
pub use payments::{PaymentsEvent, PaymentsState};
pub use remote::{OpStatus, Remote};
pub use store::{AppState, StoreEvent};
pub use user::{UserEvent, UserState};
