//! Success payload shapes for each remote operation.
//!
//! Every domain operation maps to one HTTP call whose success body is one
//! of these wrappers. Error bodies are expected to carry a human-readable
//! `message` field instead.

use serde::{Deserialize, Serialize};

use crate::{
    Category, CategoryNode, ChatMessage, Conversation, Listing, Notification,
    NotificationPreferences, PageMeta, Payment, User,
};

/// Body of a listing search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPageBody {
    /// The visible page of listings.
    pub listings: Vec<Listing>,
    /// Pagination metadata for the whole result set.
    pub meta: PageMeta,
}

/// Body of a single-listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingBody {
    /// The requested, created, or updated listing.
    pub listing: Listing,
}

/// Body of a flat category list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriesBody {
    /// All matching categories.
    pub categories: Vec<Category>,
}

/// Body of a category tree response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeBody {
    /// Top-level categories with children inlined.
    #[serde(rename = "categoryTree")]
    pub category_tree: Vec<CategoryNode>,
}

/// Body of a single-category response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBody {
    /// The requested category.
    pub category: Category,
}

/// Body of a conversation roster response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationsBody {
    /// One entry per counterpart user, most recent first.
    pub conversations: Vec<Conversation>,
}

/// Body of a single-conversation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationBody {
    /// The conversation's messages, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Pagination metadata, when the backend pages long histories.
    pub meta: Option<PageMeta>,
}

/// Body of a send-message response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    /// The stored message, with server-assigned id and timestamp.
    pub message: ChatMessage,
}

/// Body of an unread-count response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountBody {
    /// The server's authoritative unread count.
    pub count: u32,
}

/// Body of a payment list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentsBody {
    /// The current user's payments, most recent first.
    pub payments: Vec<Payment>,
}

/// Body of a payment detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBody {
    /// The requested payment.
    pub payment: Payment,
}

/// Body of a payment creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCreatedBody {
    /// The newly created payment record.
    pub payment: Payment,
    /// Redirect link to the external payment page.
    #[serde(rename = "paymentLink")]
    pub payment_link: String,
}

/// Body of a profile fetch/update response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBody {
    /// The current user's profile.
    pub user: User,
}

/// Body of a notification list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsBody {
    /// The requested page of notifications, most recent first.
    pub notifications: Vec<Notification>,
}

/// Body of a notification preferences response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesBody {
    /// The user's delivery preferences.
    pub preferences: NotificationPreferences,
}
