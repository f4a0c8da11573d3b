//! MarketClient - the main interface to the Bazaar API.
//!
//! This module provides [`MarketClient`], the primary API for
//! applications to read and mutate marketplace state.
//!
//! # Architecture
//!
//! Every remote operation runs through the same dispatch path: a
//! `Pending` event is applied synchronously at call start, the request
//! goes through the authenticated pipeline, and exactly one terminal
//! event (`Fulfilled` or `Rejected`) follows. The pure merge logic lives
//! in store-core; this module only performs I/O and translates outcomes
//! into events.
//!
//! ```text
//! Application → MarketClient → RequestPipeline → HttpTransport → API
//!                    ↓
//!               store-core (pure state transitions) → subscribers
//! ```
//!
//! Overlapping operations are neither serialized nor cancelled: events
//! are applied in the order the underlying calls complete, and the last
//! completion wins the merge.
//!
//! # Example
//!
//! ```ignore
//! use bazaar_store_client::{ClientConfig, MarketClient, MockHttp, SessionHandle};
//!
//! let transport = MockHttp::new();
//! let client = MarketClient::new(
//!     ClientConfig::new("https://api.bazaar.example"),
//!     transport,
//!     SessionHandle::with_token("jwt"),
//! );
//!
//! client.fetch_listings().await;
//! let listings = client.snapshot().await.listings.items;
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;

use store_core::{
    AppState, CategoriesEvent, ChatEvent, FetchedConversation, ListingsEvent, NotificationsEvent,
    PaymentsEvent, ReadReceipt, Remote, StoreEvent, UserEvent,
};
use store_types::{
    CategoriesBody, CategoryBody, CategoryId, CategoryTreeBody, ChatMessage, ConversationBody,
    ConversationsBody, CountBody, CreatePayment, FilterPatch, ListingBody, ListingDraft,
    ListingId, ListingPageBody, ListingPatch, MessageBody, Notification, NotificationId,
    NotificationsBody, OutgoingMessage, PaymentBody, PaymentCreatedBody, PaymentsBody,
    PreferencesBody, PreferencesPatch, StoreError, TransactionId, User, UserBody, UserId,
    UserPatch,
};

use crate::http::{HttpRequest, HttpTransport, ReqwestTransport, TransportError};
use crate::pipeline::RequestPipeline;
use crate::session::SessionHandle;
use crate::store::Store;

/// Per-operation fallback messages, used when an error response carries
/// no `message` field (or never arrived at all).
mod fallback {
    pub const FETCH_LISTINGS: &str = "Failed to load listings";
    pub const FETCH_LISTING: &str = "Failed to load listing details";
    pub const CREATE_LISTING: &str = "Failed to create listing";
    pub const UPDATE_LISTING: &str = "Failed to update listing";
    pub const DELETE_LISTING: &str = "Failed to delete listing";
    pub const FETCH_CATEGORIES: &str = "Failed to load categories";
    pub const FETCH_CATEGORY_TREE: &str = "Failed to load category tree";
    pub const FETCH_CATEGORY: &str = "Failed to load category";
    pub const FETCH_CONVERSATIONS: &str = "Failed to load conversations";
    pub const FETCH_CONVERSATION: &str = "Failed to load messages";
    pub const SEND_MESSAGE: &str = "Failed to send message";
    pub const MARK_CONVERSATION_READ: &str = "Failed to mark messages as read";
    pub const FETCH_CHAT_UNREAD: &str = "Failed to load unread message count";
    pub const FETCH_PAYMENTS: &str = "Failed to load payments";
    pub const FETCH_PAYMENT: &str = "Failed to load payment details";
    pub const CREATE_PAYMENT: &str = "Failed to create payment";
    pub const FETCH_PROFILE: &str = "Failed to load profile";
    pub const UPDATE_PROFILE: &str = "Failed to update profile";
    pub const FETCH_USER_LISTINGS: &str = "Failed to load your listings";
    pub const FETCH_NOTIFICATIONS: &str = "Failed to load notifications";
    pub const FETCH_PREFERENCES: &str = "Failed to load notification preferences";
    pub const UPDATE_PREFERENCES: &str = "Failed to update notification preferences";
    pub const MARK_NOTIFICATION_READ: &str = "Failed to mark notification as read";
    pub const MARK_ALL_READ: &str = "Failed to mark all notifications as read";
    pub const DELETE_NOTIFICATION: &str = "Failed to delete notification";
    pub const FETCH_NOTIFICATIONS_UNREAD: &str = "Failed to load unread notification count";
}

/// Configuration for [`MarketClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the remote API.
    pub base_url: String,
    /// Page size used for paged fetches.
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a configuration for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: 10,
        }
    }

    /// Set the page size for paged fetches.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Optional filters for the category list fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    /// Only categories accepting new listings.
    pub active: Option<bool>,
    /// Only children of this category.
    pub parent_id: Option<CategoryId>,
}

/// The main marketplace client.
///
/// Holds the observable store and issues remote operations against it.
pub struct MarketClient<T: HttpTransport> {
    pipeline: RequestPipeline<T>,
    store: Store,
    config: ClientConfig,
}

impl MarketClient<ReqwestTransport> {
    /// Create a client over a reqwest transport rooted at the configured
    /// base URL.
    pub fn over_http(config: ClientConfig, session: SessionHandle) -> Self {
        let transport = ReqwestTransport::new(config.base_url.clone());
        Self::new(config, transport, session)
    }
}

impl<T: HttpTransport> MarketClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn new(config: ClientConfig, transport: T, session: SessionHandle) -> Self {
        Self {
            pipeline: RequestPipeline::new(transport, session),
            store: Store::new(),
            config,
        }
    }

    /// The observable store backing this client.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &SessionHandle {
        self.pipeline.session()
    }

    /// A reference to the underlying transport (for testing).
    pub fn transport(&self) -> &T {
        self.pipeline.transport()
    }

    /// Clone the full state tree.
    pub async fn snapshot(&self) -> AppState {
        self.store.snapshot().await
    }

    /// Subscribe to the store's change feed.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.subscribe()
    }

    /// Apply a local command to the store directly.
    pub async fn dispatch(&self, event: impl Into<StoreEvent>) {
        self.store.dispatch(event).await;
    }

    /// Run one remote operation through its full lifecycle.
    ///
    /// Dispatches `Pending` synchronously, then exactly one of
    /// `Fulfilled`/`Rejected` once the call completes. Failures never
    /// propagate past this boundary - they become the domain's error
    /// string.
    async fn execute<B, E>(
        &self,
        request: Result<HttpRequest, TransportError>,
        fallback: &str,
        wrap: impl Fn(Remote<B>) -> E,
    ) where
        B: DeserializeOwned,
        E: Into<StoreEvent>,
    {
        self.store.dispatch(wrap(Remote::Pending)).await;

        let outcome = match request {
            Ok(request) => self.pipeline.send(request).await,
            Err(err) => Err(err.into()),
        };

        let terminal = match outcome {
            Ok(response) => match serde_json::from_value::<B>(response.body) {
                Ok(body) => Remote::Fulfilled(body),
                Err(err) => {
                    tracing::debug!("{}", StoreError::Decode(err));
                    Remote::Rejected(fallback.to_string())
                }
            },
            Err(err) => {
                tracing::debug!("operation failed: {}", err);
                Remote::Rejected(err.reason(fallback))
            }
        };

        self.store.dispatch(wrap(terminal)).await;
    }

    // ----- listings -----

    /// Fetch a page of listings using the filters and page currently in
    /// the store.
    pub async fn fetch_listings(&self) {
        let (filters, page, limit) = self
            .store
            .read(|s| {
                (
                    s.listings.filters.clone(),
                    s.listings.pagination.page,
                    s.listings.pagination.limit,
                )
            })
            .await;

        let mut query = filters.query_pairs();
        query.push(("page".to_string(), page.to_string()));
        query.push(("limit".to_string(), limit.to_string()));

        self.execute::<ListingPageBody, _>(
            Ok(HttpRequest::get("/listings").with_query(query)),
            fallback::FETCH_LISTINGS,
            ListingsEvent::FetchList,
        )
        .await;
    }

    /// Fetch one listing by id into the current-listing projection.
    pub async fn fetch_listing(&self, id: ListingId) {
        self.execute::<ListingBody, _>(
            Ok(HttpRequest::get(format!("/listings/{id}"))),
            fallback::FETCH_LISTING,
            |r| ListingsEvent::FetchOne(r.map(|body| body.listing)),
        )
        .await;
    }

    /// Create a listing. On success the new listing is prepended to the
    /// visible collection.
    pub async fn create_listing(&self, draft: &ListingDraft) {
        self.execute::<ListingBody, _>(
            HttpRequest::post("/listings").with_json(draft),
            fallback::CREATE_LISTING,
            |r| ListingsEvent::Create(r.map(|body| body.listing)),
        )
        .await;
    }

    /// Update a listing. On success the matching entity (and the current
    /// projection, when it is the same listing) is replaced.
    pub async fn update_listing(&self, id: ListingId, patch: &ListingPatch) {
        self.execute::<ListingBody, _>(
            HttpRequest::put(format!("/listings/{id}")).with_json(patch),
            fallback::UPDATE_LISTING,
            |r| ListingsEvent::Update(r.map(|body| body.listing)),
        )
        .await;
    }

    /// Delete a listing. Removal is applied only after the server
    /// confirms - never optimistically.
    pub async fn delete_listing(&self, id: ListingId) {
        self.execute::<Value, _>(
            Ok(HttpRequest::delete(format!("/listings/{id}"))),
            fallback::DELETE_LISTING,
            move |r| ListingsEvent::Delete(r.map(|_| id)),
        )
        .await;
    }

    /// Merge a partial filter update; resets the page to 1 atomically.
    pub async fn set_filters(&self, patch: FilterPatch) {
        self.dispatch(ListingsEvent::SetFilters(patch)).await;
    }

    /// Restore default filters; also resets the page to 1.
    pub async fn reset_filters(&self) {
        self.dispatch(ListingsEvent::ResetFilters).await;
    }

    /// Navigate the listing search to a page.
    pub async fn set_listings_page(&self, page: u32) {
        self.dispatch(ListingsEvent::SetPage(page)).await;
    }

    /// Drop the current-listing projection.
    pub async fn clear_current_listing(&self) {
        self.dispatch(ListingsEvent::ClearCurrent).await;
    }

    /// Clear the listings domain's surfaced error.
    pub async fn clear_listings_error(&self) {
        self.dispatch(ListingsEvent::ClearError).await;
    }

    // ----- categories -----

    /// Fetch the flat category list.
    pub async fn fetch_categories(&self, query: CategoryQuery) {
        let mut pairs = Vec::new();
        if let Some(active) = query.active {
            pairs.push(("active".to_string(), active.to_string()));
        }
        if let Some(parent_id) = query.parent_id {
            pairs.push(("parentId".to_string(), parent_id.to_string()));
        }

        self.execute::<CategoriesBody, _>(
            Ok(HttpRequest::get("/categories").with_query(pairs)),
            fallback::FETCH_CATEGORIES,
            |r| CategoriesEvent::FetchList(r.map(|body| body.categories)),
        )
        .await;
    }

    /// Fetch the nested category tree.
    pub async fn fetch_category_tree(&self) {
        self.execute::<CategoryTreeBody, _>(
            Ok(HttpRequest::get("/categories/tree")),
            fallback::FETCH_CATEGORY_TREE,
            |r| CategoriesEvent::FetchTree(r.map(|body| body.category_tree)),
        )
        .await;
    }

    /// Fetch one category by id into the current-category projection.
    pub async fn fetch_category(&self, id: CategoryId) {
        self.execute::<CategoryBody, _>(
            Ok(HttpRequest::get(format!("/categories/{id}"))),
            fallback::FETCH_CATEGORY,
            |r| CategoriesEvent::FetchOne(r.map(|body| body.category)),
        )
        .await;
    }

    /// Fetch one category by slug into the current-category projection.
    pub async fn fetch_category_by_slug(&self, slug: &str) {
        self.execute::<CategoryBody, _>(
            Ok(HttpRequest::get(format!("/categories/slug/{slug}"))),
            fallback::FETCH_CATEGORY,
            |r| CategoriesEvent::FetchBySlug(r.map(|body| body.category)),
        )
        .await;
    }

    /// Drop the current-category projection.
    pub async fn clear_current_category(&self) {
        self.dispatch(CategoriesEvent::ClearCurrent).await;
    }

    /// Clear the categories domain's surfaced error.
    pub async fn clear_categories_error(&self) {
        self.dispatch(CategoriesEvent::ClearError).await;
    }

    // ----- chat -----

    /// Fetch the conversation roster.
    pub async fn fetch_conversations(&self) {
        self.execute::<ConversationsBody, _>(
            Ok(HttpRequest::get("/chat/conversations")),
            fallback::FETCH_CONVERSATIONS,
            |r| ChatEvent::FetchRoster(r.map(|body| body.conversations)),
        )
        .await;
    }

    /// Fetch one conversation's message history. The result is attached
    /// to the matching roster entry; without one it is dropped.
    pub async fn fetch_conversation(&self, user_id: UserId) {
        self.execute::<ConversationBody, _>(
            Ok(HttpRequest::get(format!("/chat/conversations/{user_id}"))),
            fallback::FETCH_CONVERSATION,
            move |r| {
                ChatEvent::FetchConversation(r.map(|body| FetchedConversation {
                    user_id,
                    messages: body.messages,
                }))
            },
        )
        .await;
    }

    /// Send a chat message.
    pub async fn send_message(&self, message: &OutgoingMessage) {
        self.execute::<MessageBody, _>(
            HttpRequest::post("/chat/messages").with_json(message),
            fallback::SEND_MESSAGE,
            |r| ChatEvent::SendMessage(r.map(|body| body.message)),
        )
        .await;
    }

    /// Mark the conversation with a counterpart as read.
    pub async fn mark_conversation_read(&self, user_id: UserId) {
        self.execute::<Value, _>(
            Ok(HttpRequest::put(format!(
                "/chat/conversations/{user_id}/read"
            ))),
            fallback::MARK_CONVERSATION_READ,
            move |r| ChatEvent::MarkRead(r.map(|_| user_id)),
        )
        .await;
    }

    /// Resynchronize the unread-message total from the server.
    pub async fn fetch_chat_unread_count(&self) {
        self.execute::<CountBody, _>(
            Ok(HttpRequest::get("/chat/unread-count")),
            fallback::FETCH_CHAT_UNREAD,
            |r| ChatEvent::FetchUnreadCount(r.map(|body| body.count)),
        )
        .await;
    }

    /// Open the conversation with a counterpart already on the roster.
    pub async fn open_conversation(&self, user_id: UserId) {
        self.dispatch(ChatEvent::OpenConversationWith(user_id)).await;
    }

    /// Close the open conversation.
    pub async fn close_conversation(&self) {
        self.dispatch(ChatEvent::CloseConversation).await;
    }

    /// Append an externally-delivered message to the open conversation.
    pub async fn push_incoming_message(&self, message: ChatMessage) {
        self.dispatch(ChatEvent::PushIncoming(message)).await;
    }

    /// Clear the chat domain's surfaced error.
    pub async fn clear_chat_error(&self) {
        self.dispatch(ChatEvent::ClearError).await;
    }

    // ----- payments -----

    /// Fetch the current user's payment history.
    pub async fn fetch_payments(&self) {
        self.execute::<PaymentsBody, _>(
            Ok(HttpRequest::get("/payments")),
            fallback::FETCH_PAYMENTS,
            |r| PaymentsEvent::FetchList(r.map(|body| body.payments)),
        )
        .await;
    }

    /// Fetch one payment's details by transaction id.
    pub async fn fetch_payment(&self, transaction_id: &TransactionId) {
        self.execute::<PaymentBody, _>(
            Ok(HttpRequest::get(format!("/payments/{transaction_id}"))),
            fallback::FETCH_PAYMENT,
            |r| PaymentsEvent::FetchDetails(r.map(|body| body.payment)),
        )
        .await;
    }

    /// Initiate a payment. On success the payment is prepended, becomes
    /// current, and the returned redirect link is stored for hand-off.
    pub async fn create_payment(&self, payment: &CreatePayment) {
        self.execute::<PaymentCreatedBody, _>(
            HttpRequest::post("/payments").with_json(payment),
            fallback::CREATE_PAYMENT,
            PaymentsEvent::Create,
        )
        .await;
    }

    /// Drop the current-payment projection.
    pub async fn clear_current_payment(&self) {
        self.dispatch(PaymentsEvent::ClearCurrent).await;
    }

    /// Drop the stored payment redirect link.
    pub async fn clear_payment_link(&self) {
        self.dispatch(PaymentsEvent::ClearPaymentLink).await;
    }

    /// Clear the payments domain's surfaced error.
    pub async fn clear_payments_error(&self) {
        self.dispatch(PaymentsEvent::ClearError).await;
    }

    // ----- user -----

    /// Fetch the current user's profile.
    pub async fn fetch_profile(&self) {
        self.execute::<UserBody, _>(
            Ok(HttpRequest::get("/users/profile")),
            fallback::FETCH_PROFILE,
            |r| UserEvent::FetchProfile(r.map(|body| body.user)),
        )
        .await;
    }

    /// Update the current user's profile.
    pub async fn update_profile(&self, patch: &UserPatch) {
        self.execute::<UserBody, _>(
            HttpRequest::put("/users/profile").with_json(patch),
            fallback::UPDATE_PROFILE,
            |r| UserEvent::UpdateProfile(r.map(|body| body.user)),
        )
        .await;
    }

    /// Fetch a page of the current user's own listings.
    pub async fn fetch_user_listings(&self, page: u32) {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), self.config.page_size.to_string()),
        ];

        self.execute::<ListingPageBody, _>(
            Ok(HttpRequest::get("/users/listings").with_query(query)),
            fallback::FETCH_USER_LISTINGS,
            UserEvent::FetchListings,
        )
        .await;
    }

    /// Install a profile obtained out-of-band.
    pub async fn set_profile(&self, user: User) {
        self.dispatch(UserEvent::SetProfile(user)).await;
    }

    /// Drop the profile projection.
    pub async fn clear_profile(&self) {
        self.dispatch(UserEvent::ClearProfile).await;
    }

    /// Navigate the user's own listings to a page.
    pub async fn set_user_listings_page(&self, page: u32) {
        self.dispatch(UserEvent::SetPage(page)).await;
    }

    /// Clear the user domain's surfaced error.
    pub async fn clear_user_error(&self) {
        self.dispatch(UserEvent::ClearError).await;
    }

    // ----- notifications -----

    /// Fetch a page of notifications. The unread counter is recomputed
    /// from the fetched list.
    pub async fn fetch_notifications(&self, page: u32) {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), self.config.page_size.to_string()),
        ];

        self.execute::<NotificationsBody, _>(
            Ok(HttpRequest::get("/notifications").with_query(query)),
            fallback::FETCH_NOTIFICATIONS,
            |r| NotificationsEvent::FetchList(r.map(|body| body.notifications)),
        )
        .await;
    }

    /// Fetch notification delivery preferences.
    pub async fn fetch_notification_preferences(&self) {
        self.execute::<PreferencesBody, _>(
            Ok(HttpRequest::get("/notifications/preferences")),
            fallback::FETCH_PREFERENCES,
            |r| NotificationsEvent::FetchPreferences(r.map(|body| body.preferences)),
        )
        .await;
    }

    /// Update notification delivery preferences.
    pub async fn update_notification_preferences(&self, patch: &PreferencesPatch) {
        self.execute::<PreferencesBody, _>(
            HttpRequest::put("/notifications/preferences").with_json(patch),
            fallback::UPDATE_PREFERENCES,
            |r| NotificationsEvent::UpdatePreferences(r.map(|body| body.preferences)),
        )
        .await;
    }

    /// Mark one notification as read, stamping the read time with the
    /// current wall clock.
    pub async fn mark_notification_read(&self, id: NotificationId) {
        let read_at = chrono::Utc::now().to_rfc3339();
        self.execute::<Value, _>(
            Ok(HttpRequest::put(format!("/notifications/{id}/read"))),
            fallback::MARK_NOTIFICATION_READ,
            move |r| {
                NotificationsEvent::MarkRead(r.map(|_| ReadReceipt {
                    id,
                    read_at: read_at.clone(),
                }))
            },
        )
        .await;
    }

    /// Mark every notification as read.
    pub async fn mark_all_notifications_read(&self) {
        let read_at = chrono::Utc::now().to_rfc3339();
        self.execute::<Value, _>(
            Ok(HttpRequest::put("/notifications/read-all")),
            fallback::MARK_ALL_READ,
            move |r| NotificationsEvent::MarkAllRead(r.map(|_| read_at.clone())),
        )
        .await;
    }

    /// Delete a notification.
    pub async fn delete_notification(&self, id: NotificationId) {
        self.execute::<Value, _>(
            Ok(HttpRequest::delete(format!("/notifications/{id}"))),
            fallback::DELETE_NOTIFICATION,
            move |r| NotificationsEvent::Delete(r.map(|_| id)),
        )
        .await;
    }

    /// Resynchronize the unread-notification counter from the server.
    pub async fn fetch_notifications_unread_count(&self) {
        self.execute::<CountBody, _>(
            Ok(HttpRequest::get("/notifications/unread-count")),
            fallback::FETCH_NOTIFICATIONS_UNREAD,
            |r| NotificationsEvent::FetchUnreadCount(r.map(|body| body.count)),
        )
        .await;
    }

    /// Prepend an externally-delivered notification.
    pub async fn push_incoming_notification(&self, notification: Notification) {
        self.dispatch(NotificationsEvent::PushIncoming(notification))
            .await;
    }

    /// Clear the notifications domain's surfaced error.
    pub async fn clear_notifications_error(&self) {
        self.dispatch(NotificationsEvent::ClearError).await;
    }
}
