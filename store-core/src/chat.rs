//! The chat domain: the conversation roster, the single open
//! conversation, and the unread-message total.
//!
//! The roster holds one denormalized summary per counterpart user. The
//! open conversation is a separate at-most-one projection carrying the
//! full message list for one counterpart; its identity fields are copied
//! from the roster, never fetched independently.

use store_types::{ChatMessage, Conversation, UserId};

use crate::remote::{OpStatus, Remote};

/// The currently open conversation with one counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenConversation {
    /// The counterpart user.
    pub user_id: UserId,
    /// Counterpart display name, copied from the roster entry.
    pub user_name: String,
    /// Counterpart avatar URL, copied from the roster entry.
    pub avatar: Option<String>,
    /// Full message list, oldest first.
    pub messages: Vec<ChatMessage>,
}

/// Payload of a fulfilled single-conversation fetch: the counterpart the
/// messages belong to, paired with the fetched history.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedConversation {
    /// The counterpart the conversation was fetched for.
    pub user_id: UserId,
    /// The conversation's messages, oldest first.
    pub messages: Vec<ChatMessage>,
}

/// State of the chat domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    /// The conversation roster, most recent first.
    pub conversations: Vec<Conversation>,
    /// The open conversation, if any.
    pub current: Option<OpenConversation>,
    /// Total unread messages across all conversations.
    pub unread_count: u32,
    /// Operation loading/error tracking.
    pub status: OpStatus,
}

/// Events the chat domain responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The conversation roster was requested.
    FetchRoster(Remote<Vec<Conversation>>),
    /// One conversation's message history was requested.
    FetchConversation(Remote<FetchedConversation>),
    /// A message was sent.
    SendMessage(Remote<ChatMessage>),
    /// A conversation was marked read. The payload is the counterpart id.
    MarkRead(Remote<UserId>),
    /// The server's unread total was requested (resynchronizes the local
    /// counter after drift).
    FetchUnreadCount(Remote<u32>),
    /// Open the conversation with a counterpart already on the roster.
    OpenConversationWith(UserId),
    /// Close the open conversation.
    CloseConversation,
    /// Append an externally-delivered message (e.g. from a live channel)
    /// to the open conversation.
    PushIncoming(ChatMessage),
    /// Clear a surfaced error.
    ClearError,
}

impl ChatState {
    /// Apply one event to the domain state.
    pub fn apply(&mut self, event: ChatEvent) {
        let Self {
            conversations,
            current,
            unread_count,
            status,
        } = self;

        match event {
            ChatEvent::FetchRoster(remote) => remote.settle(status, |roster| {
                *conversations = roster;
                *unread_count = roster_total(conversations);
            }),
            ChatEvent::FetchConversation(remote) => remote.settle(status, |fetched| {
                // Identity fields come from the roster; without a roster
                // entry there is nothing to attach the history to.
                if let Some(entry) = conversations
                    .iter()
                    .find(|c| c.other_user_id == fetched.user_id)
                {
                    *current = Some(OpenConversation {
                        user_id: entry.other_user_id,
                        user_name: entry.other_user_name.clone(),
                        avatar: entry.other_user_avatar.clone(),
                        messages: fetched.messages,
                    });
                }
            }),
            ChatEvent::SendMessage(remote) => remote.settle(status, |message| {
                if let Some(open) = current {
                    if open.user_id == message.receiver_id {
                        open.messages.push(message.clone());
                    }
                }

                if let Some(entry) = conversations
                    .iter_mut()
                    .find(|c| c.other_user_id == message.receiver_id)
                {
                    entry.last_message = message.content;
                    entry.last_message_time = message.created_at;
                } else if let Some(receiver) = message.receiver {
                    conversations.insert(
                        0,
                        Conversation {
                            other_user_id: message.receiver_id,
                            other_user_name: receiver.name,
                            other_user_avatar: receiver.avatar,
                            last_message: message.content,
                            last_message_time: message.created_at,
                            unread_count: 0,
                        },
                    );
                }
            }),
            ChatEvent::MarkRead(remote) => remote.settle(status, |user_id| {
                if let Some(entry) = conversations
                    .iter_mut()
                    .find(|c| c.other_user_id == user_id)
                {
                    entry.unread_count = 0;
                }
                *unread_count = roster_total(conversations);
            }),
            ChatEvent::FetchUnreadCount(remote) => remote.settle(status, |count| {
                *unread_count = count;
            }),
            ChatEvent::OpenConversationWith(user_id) => {
                if let Some(entry) = conversations.iter().find(|c| c.other_user_id == user_id) {
                    *current = Some(OpenConversation {
                        user_id: entry.other_user_id,
                        user_name: entry.other_user_name.clone(),
                        avatar: entry.other_user_avatar.clone(),
                        messages: vec![],
                    });
                }
            }
            ChatEvent::CloseConversation => *current = None,
            ChatEvent::PushIncoming(message) => {
                if let Some(open) = current {
                    open.messages.push(message);
                }
            }
            ChatEvent::ClearError => status.clear_error(),
        }
    }
}

/// The unread total is always the sum over the roster, never adjusted
/// ad hoc.
fn roster_total(conversations: &[Conversation]) -> u32 {
    conversations.iter().map(|c| c.unread_count).sum()
}
