//! # store-types
//!
//! Domain entity and payload types for the Bazaar client store.
//!
//! This crate provides the foundational types used across all store crates:
//! - [`UserId`], [`ListingId`], [`CategoryId`], [`NotificationId`],
//!   [`MessageId`], [`TransactionId`] - server-assigned identifier newtypes
//! - Entity structs for the six resource domains (listings, categories,
//!   chat, payments, user, notifications)
//! - [`Pagination`] and [`ListingFilters`] - pagination windows and search
//!   filters
//! - Response payload shapes matching the remote JSON API
//! - [`StoreError`] - error types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod entities;
mod error;
mod ids;
mod page;
mod payloads;

pub use entities::{
    Category, CategoryNode, ChatMessage, Conversation, CreatePayment, Listing, ListingDraft,
    ListingPatch, Notification, NotificationPreferences, OutgoingMessage, Payment, PaymentStatus,
    PeerProfile, PreferencesPatch, User, UserPatch,
};
pub use error::StoreError;
pub use ids::{CategoryId, ListingId, MessageId, NotificationId, TransactionId, UserId};
pub use page::{FilterPatch, ListingFilters, PageMeta, Pagination, SortOrder};
pub use payloads::{
    CategoriesBody, CategoryBody, CategoryTreeBody, ConversationBody, ConversationsBody,
    CountBody, ListingBody, ListingPageBody, MessageBody, NotificationsBody, PaymentBody,
    PaymentCreatedBody, PaymentsBody, PreferencesBody, UserBody,
};
