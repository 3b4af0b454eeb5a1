//! Scripted chatbot panel state.
//!
//! ```text
//!            toggle
//!   Closed ◄────────► Open
//! ```
//!
//! Sending a message appends it right away and hands back a [`PendingReply`]
//! ticket. The UI delivers the ticket after the configured delay. Closing
//! the panel bumps the generation, so tickets issued before the close are
//! dropped on delivery instead of landing in the log later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChatVisibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Ticket for a scheduled bot reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    visibility: ChatVisibility,
    messages: Vec<ChatMessage>,
    next_id: u64,
    generation: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> ChatVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ChatVisibility::Open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Flip Closed <-> Open. Closing cancels every pending reply.
    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            ChatVisibility::Closed => ChatVisibility::Open,
            ChatVisibility::Open => {
                self.generation += 1;
                ChatVisibility::Closed
            }
        };
    }

    /// Append a user message. Blank input is ignored and schedules nothing.
    pub fn send(&mut self, input: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(input.to_string(), Sender::User, now);
        Some(PendingReply {
            generation: self.generation,
        })
    }

    /// Deliver a scheduled reply. Returns `false` when the ticket was
    /// cancelled by closing the panel.
    pub fn deliver(&mut self, ticket: PendingReply, reply: &str, now: DateTime<Utc>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("chat: dropping reply from closed session");
            return false;
        }
        self.push(reply.to_string(), Sender::Bot, now);
        true
    }

    fn push(&mut self, text: String, sender: Sender, timestamp: DateTime<Utc>) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = "Thanks for your message!";

    #[test]
    fn test_initially_closed_and_toggles() {
        let mut chat = ChatState::new();
        assert_eq!(chat.visibility(), ChatVisibility::Closed);
        chat.toggle();
        assert!(chat.is_open());
        chat.toggle();
        assert!(!chat.is_open());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatState::new();
        chat.toggle();
        assert!(chat.send("   ", Utc::now()).is_none());
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_reply_follows_user_message() {
        let mut chat = ChatState::new();
        chat.toggle();
        let ticket = chat.send("hello", Utc::now()).unwrap();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::User);

        assert!(chat.deliver(ticket, REPLY, Utc::now()));
        let log = chat.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].sender, Sender::Bot);
        assert_eq!(log[1].text, REPLY);
        assert!(log[0].id < log[1].id);
    }

    #[test]
    fn test_closing_cancels_pending_reply() {
        let mut chat = ChatState::new();
        chat.toggle();
        let ticket = chat.send("hello", Utc::now()).unwrap();
        chat.toggle();
        chat.toggle();
        assert!(!chat.deliver(ticket, REPLY, Utc::now()));
        assert_eq!(chat.messages().len(), 1);

        let fresh = chat.send("again", Utc::now()).unwrap();
        assert!(chat.deliver(fresh, REPLY, Utc::now()));
        assert_eq!(chat.messages().len(), 3);
    }
}
