//! Chat message types.

use serde::{Deserialize, Serialize};

use atma_vision_core::{MessageId, OrderId, UserId};

/// One chat line attached to an order.
///
/// Messages are append-only; nothing in the system ever mutates or deletes
/// one. `is_read` is written as `false` on every send and never flipped by
/// any consumer - the flag is vestigial and preserved for wire
/// compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID.
    pub id: MessageId,
    /// The order this chat line belongs to.
    pub order_id: OrderId,
    /// The sending user.
    pub sender_id: UserId,
    /// Snapshot of the sender's display name at send time.
    pub sender_name: String,
    /// Free-form message text.
    pub text: String,
    /// Send time, epoch milliseconds.
    pub timestamp: i64,
    /// Write-only read flag; `false` on creation, never updated.
    pub is_read: bool,
}

/// The caller-supplied part of a message; id, timestamp and read flag are
/// generated on send.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    /// The order this chat line belongs to.
    pub order_id: OrderId,
    /// The sending user.
    pub sender_id: UserId,
    /// Snapshot of the sender's display name.
    pub sender_name: String,
    /// Free-form message text.
    pub text: String,
}
