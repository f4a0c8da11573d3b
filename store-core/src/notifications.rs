//! The notifications domain: the notification list, delivery
//! preferences, and the unread counter.
//!
//! The unread counter is a pure function of the list at the moment of the
//! last mutation: list fetches recompute it from scratch, and the
//! point mutations verify the prior read flag before adjusting it.

use store_types::{Notification, NotificationId, NotificationPreferences};

use crate::remote::{OpStatus, Remote};

/// Payload of a fulfilled mark-as-read: the target notification and the
/// wall-clock stamp to record, supplied by the caller so the transition
/// stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReceipt {
    /// The notification that was marked read.
    pub id: NotificationId,
    /// When it was read (ISO-8601).
    pub read_at: String,
}

/// State of the notifications domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    /// The user's notifications, most recent first.
    pub items: Vec<Notification>,
    /// Delivery preferences, absent until fetched.
    pub preferences: Option<NotificationPreferences>,
    /// Count of unread notifications.
    pub unread_count: u32,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the notifications domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsEvent {
    /// The notification list was requested.
    FetchList(Remote<Vec<Notification>>),
    /// Delivery preferences were requested.
    FetchPreferences(Remote<NotificationPreferences>),
    /// A preferences update was submitted.
    UpdatePreferences(Remote<NotificationPreferences>),
    /// One notification was marked read.
    MarkRead(Remote<ReadReceipt>),
    /// Every notification was marked read. The payload is the wall-clock
    /// stamp for items transitioning to read.
    MarkAllRead(Remote<String>),
    /// A notification was deleted.
    Delete(Remote<NotificationId>),
    /// The server's unread total was requested (resynchronizes the local
    /// counter after drift).
    FetchUnreadCount(Remote<u32>),
    /// Prepend an externally-delivered notification (e.g. from a live
    /// channel).
    PushIncoming(Notification),
    /// Clear a surfaced error.
    ClearError,
}

impl NotificationsState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: NotificationsEvent) {
        let Self {
            items,
            preferences,
            unread_count,
            status,
        } = self;

        match event {
            NotificationsEvent::FetchList(remote) => remote.settle(status, |notifications| {
                *items = notifications;
                // Recomputed from the new list, never added to the prior
                // count.
                *unread_count = items.iter().filter(|n| !n.read).count() as u32;
            }),
            NotificationsEvent::FetchPreferences(remote)
            | NotificationsEvent::UpdatePreferences(remote) => remote.settle(status, |prefs| {
                *preferences = Some(prefs);
            }),
            NotificationsEvent::MarkRead(remote) => remote.settle(status, |receipt| {
                if let Some(notification) = items.iter_mut().find(|n| n.id == receipt.id) {
                    if !notification.read {
                        notification.read = true;
                        notification.read_at = Some(receipt.read_at);
                        *unread_count = unread_count.saturating_sub(1);
                    }
                }
            }),
            NotificationsEvent::MarkAllRead(remote) => remote.settle(status, |read_at| {
                for notification in items.iter_mut() {
                    if !notification.read {
                        notification.read = true;
                        notification.read_at = Some(read_at.clone());
                    }
                }
                *unread_count = 0;
            }),
            NotificationsEvent::Delete(remote) => remote.settle(status, |id| {
                let was_unread = items.iter().any(|n| n.id == id && !n.read);
                items.retain(|n| n.id != id);
                if was_unread {
                    *unread_count = unread_count.saturating_sub(1);
                }
            }),
            NotificationsEvent::FetchUnreadCount(remote) => remote.settle(status, |count| {
                *unread_count = count;
            }),
            NotificationsEvent::PushIncoming(notification) => {
                if !notification.read {
                    *unread_count = unread_count.saturating_add(1);
                }
                items.insert(0, notification);
            }
            NotificationsEvent::ClearError => status.clear_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64, read: bool) -> Notification {
        Notification {
            id: NotificationId::new(id),
            kind: "listing.sold".into(),
            title: format!("Notification {id}"),
            message: "body".into(),
            read,
            read_at: read.then(|| "2026-01-09T08:00:00Z".to_string()),
            created_at: "2026-01-10T09:00:00Z".into(),
        }
    }

    fn receipt(id: i64) -> ReadReceipt {
        ReadReceipt {
            id: NotificationId::new(id),
            read_at: "2026-01-11T12:00:00Z".into(),
        }
    }

    fn invariant_holds(state: &NotificationsState) -> bool {
        state.unread_count == state.items.iter().filter(|n| !n.read).count() as u32
    }

    #[test]
    fn list_fetch_recomputes_count_from_scratch() {
        let mut state = NotificationsState {
            unread_count: 40,
            ..NotificationsState::default()
        };

        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, true),
            notification(3, false),
            notification(4, true),
            notification(5, true),
        ])));

        // Exactly the unread items in the new list, not 40 + 2.
        assert_eq!(state.unread_count, 2);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn mark_read_flips_stamps_and_decrements_once() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, false),
        ])));

        state.apply(NotificationsEvent::MarkRead(Remote::Fulfilled(receipt(1))));

        let marked = &state.items[0];
        assert!(marked.read);
        assert_eq!(marked.read_at.as_deref(), Some("2026-01-11T12:00:00Z"));
        assert_eq!(state.unread_count, 1);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn mark_read_of_already_read_item_changes_nothing() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, true),
            notification(2, false),
        ])));
        let before = state.clone();

        state.apply(NotificationsEvent::MarkRead(Remote::Fulfilled(receipt(1))));

        assert_eq!(state.items, before.items);
        assert_eq!(state.unread_count, before.unread_count);
    }

    #[test]
    fn mark_read_of_unknown_id_is_a_no_op() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
        ])));

        state.apply(NotificationsEvent::MarkRead(Remote::Fulfilled(receipt(99))));

        assert_eq!(state.unread_count, 1);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn mark_all_read_zeroes_counter_and_stamps_unread_items() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, true),
        ])));

        state.apply(NotificationsEvent::MarkAllRead(Remote::Fulfilled(
            "2026-01-11T12:00:00Z".into(),
        )));

        assert!(state.items.iter().all(|n| n.read));
        assert_eq!(state.unread_count, 0);
        // The already-read item keeps its original read stamp.
        assert_eq!(
            state.items[1].read_at.as_deref(),
            Some("2026-01-09T08:00:00Z")
        );
        assert_eq!(
            state.items[0].read_at.as_deref(),
            Some("2026-01-11T12:00:00Z")
        );
        assert!(invariant_holds(&state));
    }

    #[test]
    fn mark_all_read_is_idempotent() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, false),
        ])));

        state.apply(NotificationsEvent::MarkAllRead(Remote::Fulfilled(
            "2026-01-11T12:00:00Z".into(),
        )));
        let after_first = state.clone();

        state.apply(NotificationsEvent::MarkAllRead(Remote::Fulfilled(
            "2026-01-12T15:00:00Z".into(),
        )));

        assert_eq!(state, after_first);
    }

    #[test]
    fn delete_of_unread_item_decrements_counter() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, true),
        ])));

        state.apply(NotificationsEvent::Delete(Remote::Fulfilled(
            NotificationId::new(1),
        )));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.unread_count, 0);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn delete_of_read_item_keeps_counter() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, true),
        ])));

        state.apply(NotificationsEvent::Delete(Remote::Fulfilled(
            NotificationId::new(2),
        )));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.unread_count, 1);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn unread_count_fetch_overwrites_counter() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
        ])));

        state.apply(NotificationsEvent::FetchUnreadCount(Remote::Fulfilled(7)));

        assert_eq!(state.unread_count, 7);
    }

    #[test]
    fn push_incoming_prepends_and_counts_unread() {
        let mut state = NotificationsState::default();

        state.apply(NotificationsEvent::PushIncoming(notification(1, false)));
        state.apply(NotificationsEvent::PushIncoming(notification(2, true)));

        assert_eq!(state.items[0].id, NotificationId::new(2));
        assert_eq!(state.unread_count, 1);
        assert!(invariant_holds(&state));
    }

    #[test]
    fn preferences_update_replaces_wholesale() {
        let mut state = NotificationsState::default();
        let prefs = NotificationPreferences {
            email_enabled: true,
            push_enabled: false,
            chat_messages: true,
            listing_updates: true,
            payment_updates: false,
        };

        state.apply(NotificationsEvent::FetchPreferences(Remote::Fulfilled(
            prefs.clone(),
        )));
        assert_eq!(state.preferences.as_ref(), Some(&prefs));

        let updated = NotificationPreferences {
            push_enabled: true,
            ..prefs
        };
        state.apply(NotificationsEvent::UpdatePreferences(Remote::Fulfilled(
            updated.clone(),
        )));
        assert_eq!(state.preferences.as_ref(), Some(&updated));
    }

    #[test]
    fn rejected_delete_leaves_items_untouched() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
        ])));
        let before = state.clone();

        state.apply(NotificationsEvent::Delete(Remote::Pending));
        state.apply(NotificationsEvent::Delete(Remote::Rejected(
            "not yours".into(),
        )));

        assert_eq!(state.items, before.items);
        assert_eq!(state.unread_count, before.unread_count);
        assert_eq!(state.status.error.as_deref(), Some("not yours"));
    }

    #[test]
    fn invariant_survives_a_mixed_sequence() {
        let mut state = NotificationsState::default();
        state.apply(NotificationsEvent::FetchList(Remote::Fulfilled(vec![
            notification(1, false),
            notification(2, false),
            notification(3, true),
        ])));
        assert!(invariant_holds(&state));

        state.apply(NotificationsEvent::MarkRead(Remote::Fulfilled(receipt(2))));
        assert!(invariant_holds(&state));

        state.apply(NotificationsEvent::Delete(Remote::Fulfilled(
            NotificationId::new(1),
        )));
        assert!(invariant_holds(&state));

        state.apply(NotificationsEvent::PushIncoming(notification(4, false)));
        assert!(invariant_holds(&state));

        state.apply(NotificationsEvent::MarkAllRead(Remote::Fulfilled(
            "2026-01-11T12:00:00Z".into(),
        )));
        assert!(invariant_holds(&state));
    }
}
