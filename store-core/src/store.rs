//! The composite application state: all six domains in one addressable
//! tree, driven by a single event type.

use crate::categories::{CategoriesEvent, CategoriesState};
use crate::chat::{ChatEvent, ChatState};
use crate::listings::{ListingsEvent, ListingsState};
use crate::notifications::{NotificationsEvent, NotificationsState};
use crate::payments::{PaymentsEvent, PaymentsState};
use crate::user::{UserEvent, UserState};

/// The full client-side state tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Public listing search results.
    pub listings: ListingsState,
    /// Listing categories.
    pub categories: CategoriesState,
    /// Conversations and messages.
    pub chat: ChatState,
    /// Payment history.
    pub payments: PaymentsState,
    /// The current user's profile and own listings.
    pub user: UserState,
    /// Notifications and delivery preferences.
    pub notifications: NotificationsState,
}

/// An event addressed to one domain of the state tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A listings-domain event.
    Listings(ListingsEvent),
    /// A categories-domain event.
    Categories(CategoriesEvent),
    /// A chat-domain event.
    Chat(ChatEvent),
    /// A payments-domain event.
    Payments(PaymentsEvent),
    /// A user-domain event.
    User(UserEvent),
    /// A notifications-domain event.
    Notifications(NotificationsEvent),
}

impl AppState {
    /// Route one event to the owning domain's transition function.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Listings(event) => self.listings.apply(event),
            StoreEvent::Categories(event) => self.categories.apply(event),
            StoreEvent::Chat(event) => self.chat.apply(event),
            StoreEvent::Payments(event) => self.payments.apply(event),
            StoreEvent::User(event) => self.user.apply(event),
            StoreEvent::Notifications(event) => self.notifications.apply(event),
        }
    }
}

impl From<ListingsEvent> for StoreEvent {
    fn from(event: ListingsEvent) -> Self {
        Self::Listings(event)
    }
}

impl From<CategoriesEvent> for StoreEvent {
    fn from(event: CategoriesEvent) -> Self {
        Self::Categories(event)
    }
}

impl From<ChatEvent> for StoreEvent {
    fn from(event: ChatEvent) -> Self {
        Self::Chat(event)
    }
}

impl From<PaymentsEvent> for StoreEvent {
    fn from(event: PaymentsEvent) -> Self {
        Self::Payments(event)
    }
}

impl From<UserEvent> for StoreEvent {
    fn from(event: UserEvent) -> Self {
        Self::User(event)
    }
}

impl From<NotificationsEvent> for StoreEvent {
    fn from(event: NotificationsEvent) -> Self {
        Self::Notifications(event)
    }
}
