//! Entity types for the six resource domains.
//!
//! Field names mirror the JSON the backend produces: most objects use
//! camelCase keys, while conversation roster entries come from a reporting
//! endpoint that emits snake_case.

use serde::{Deserialize, Serialize};

use crate::{CategoryId, ListingId, MessageId, NotificationId, TransactionId, UserId};

/// A published marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Server-assigned listing id.
    pub id: ListingId,
    /// Owner of the listing.
    pub user_id: UserId,
    /// Listing title.
    pub title: String,
    /// Full description text.
    pub description: String,
    /// Asking price.
    pub price: f64,
    /// Category the listing is filed under, if any.
    pub category_id: Option<CategoryId>,
    /// Free-form location string.
    pub location: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last-update timestamp (ISO-8601), absent until first edit.
    pub updated_at: Option<String>,
}

/// Payload for creating a new listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    /// Listing title.
    pub title: String,
    /// Full description text.
    pub description: String,
    /// Asking price.
    pub price: f64,
    /// Category to file the listing under.
    pub category_id: Option<CategoryId>,
    /// Free-form location string.
    pub location: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial update for an existing listing. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Replacement image URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// A listing category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Parent category, absent for top-level categories.
    pub parent_id: Option<CategoryId>,
    /// Whether the category accepts new listings.
    pub active: bool,
}

/// A node in the category tree (a category with its children inlined).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNode {
    /// Server-assigned category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Child categories.
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// A conversation roster entry: a denormalized summary of the exchange
/// with one counterpart user.
///
/// This is distinct from the full message list of the currently open
/// conversation, which is fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// The counterpart user.
    pub other_user_id: UserId,
    /// Counterpart display name snapshot.
    pub other_user_name: String,
    /// Counterpart avatar URL snapshot.
    pub other_user_avatar: Option<String>,
    /// Content of the most recent message.
    pub last_message: String,
    /// Timestamp of the most recent message (ISO-8601).
    pub last_message_time: String,
    /// Messages from the counterpart not yet read by the current user.
    #[serde(default)]
    pub unread_count: u32,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Server-assigned message id.
    pub id: MessageId,
    /// Sending user.
    pub sender_id: UserId,
    /// Receiving user.
    pub receiver_id: UserId,
    /// Message text.
    pub content: String,
    /// Send timestamp (ISO-8601).
    pub created_at: String,
    /// Whether the receiver has read the message.
    #[serde(default)]
    pub read: bool,
    /// Receiver profile snapshot, embedded by the backend on send so the
    /// client can seed a roster entry for a brand-new conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<PeerProfile>,
}

/// A minimal profile snapshot embedded in chat payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerProfile {
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: Option<String>,
}

/// Payload for sending a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    /// Receiving user.
    pub receiver_id: UserId,
    /// Message text.
    pub content: String,
}

/// A payment made by the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Opaque transaction id from the payment backend.
    pub transaction_id: TransactionId,
    /// The listing the payment is for.
    pub listing_id: ListingId,
    /// Paid amount.
    pub amount: f64,
    /// ISO-4217 currency code.
    pub currency: String,
    /// Current processing status.
    pub status: PaymentStatus,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
}

/// Processing status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting confirmation from the payment provider.
    Pending,
    /// Confirmed and settled.
    Completed,
    /// Rejected or expired.
    Failed,
    /// Settled, then returned to the buyer.
    Refunded,
}

/// Payload for initiating a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    /// The listing being paid for.
    pub listing_id: ListingId,
    /// Amount to charge.
    pub amount: f64,
}

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form location string.
    pub location: Option<String>,
    /// Registration timestamp (ISO-8601).
    pub created_at: String,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A notification delivered to the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Server-assigned notification id.
    pub id: NotificationId,
    /// Notification kind (e.g. "chat.message", "listing.sold").
    #[serde(rename = "type")]
    pub kind: String,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the user has read the notification.
    #[serde(default)]
    pub read: bool,
    /// When the notification was first read (ISO-8601). Set exactly once,
    /// on the first transition to read.
    pub read_at: Option<String>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
}

/// Per-channel notification delivery preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Deliver notifications by email.
    pub email_enabled: bool,
    /// Deliver push notifications.
    pub push_enabled: bool,
    /// Notify about new chat messages.
    pub chat_messages: bool,
    /// Notify about listing status changes.
    pub listing_updates: bool,
    /// Notify about payment status changes.
    pub payment_updates: bool,
}

/// Partial preferences update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    /// Toggle email delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled: Option<bool>,
    /// Toggle push delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_enabled: Option<bool>,
    /// Toggle chat message notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_messages: Option<bool>,
    /// Toggle listing update notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_updates: Option<bool>,
    /// Toggle payment update notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_updates: Option<bool>,
}
