//! Chat message operations.

use chrono::Utc;

use atma_vision_core::{MessageId, OrderId};

use super::{StoreError, keys, read_or_seed, seed, write_collection};
use crate::models::{Message, MessageDraft};
use crate::storage::Storage;

/// Repository for the `messages` collection.
pub struct MessageRepository<'a> {
    storage: &'a dyn Storage,
}

impl<'a> MessageRepository<'a> {
    /// Create a new message repository over the given substrate.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// All messages for one order, ascending by timestamp.
    ///
    /// The sort is stable: messages with equal timestamps keep their
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn for_order(&self, order_id: &OrderId) -> Result<Vec<Message>, StoreError> {
        let mut thread: Vec<Message> = self
            .list()?
            .into_iter()
            .filter(|m| &m.order_id == order_id)
            .collect();
        thread.sort_by_key(|m| m.timestamp);
        Ok(thread)
    }

    /// Construct a full message from a draft, append it and persist.
    ///
    /// Generates the id (`msg-<epoch-millis>`), stamps the current time and
    /// sets `is_read = false`. Returns the constructed record. There is no
    /// delivery acknowledgment anywhere in the system; readers simply poll.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn send(&self, draft: MessageDraft) -> Result<Message, StoreError> {
        let mut messages = self.list()?;
        let now = Utc::now().timestamp_millis();
        let message = Message {
            id: MessageId::new(format!("msg-{now}")),
            order_id: draft.order_id,
            sender_id: draft.sender_id,
            sender_name: draft.sender_name,
            text: draft.text,
            timestamp: now,
            is_read: false,
        };
        messages.push(message.clone());
        write_collection(self.storage, keys::MESSAGES, &messages)?;
        tracing::debug!(order_id = %message.order_id, sender_id = %message.sender_id, "message sent");
        Ok(message)
    }

    fn list(&self) -> Result<Vec<Message>, StoreError> {
        read_or_seed(self.storage, keys::MESSAGES, seed::initial_messages)
    }
}
