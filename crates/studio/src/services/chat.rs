//! Order chat: message helpers and the polling feed.
//!
//! There is no push delivery anywhere in the system. While a chat view is
//! open, a [`ChatFeed`] re-reads the thread on a fixed interval (3 seconds
//! by default) to approximate real-time updates; closing the view or
//! switching to another order drops the feed, which tears the timer down
//! immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use atma_vision_core::OrderId;

use crate::db::{MessageRepository, StoreError};
use crate::models::{Message, MessageDraft};
use crate::storage::Storage;

/// Default polling interval while a chat view is open.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Thin chat facade over the message repository.
pub struct ChatService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> ChatService<'a> {
    /// Create a new chat service.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// The full thread for one order, ascending by timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn messages_for_order(&self, order_id: &OrderId) -> Result<Vec<Message>, StoreError> {
        MessageRepository::new(self.storage).for_order(order_id)
    }

    /// Send a message into an order's thread and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn send(&self, draft: MessageDraft) -> Result<Message, StoreError> {
        MessageRepository::new(self.storage).send(draft)
    }
}

/// A cancellable polling subscription to one order's chat thread.
///
/// Opening a feed spawns a repeating timer that re-reads the thread and
/// publishes each snapshot over a [`watch`] channel; the first snapshot is
/// read immediately. The timer is bound to the feed's lifetime: dropping the
/// feed aborts the task, so a closed chat view can never leak its timer. To
/// watch a different order, drop this feed and open a new one.
pub struct ChatFeed {
    order_id: OrderId,
    updates: watch::Receiver<Vec<Message>>,
    task: JoinHandle<()>,
}

impl ChatFeed {
    /// Open a feed for `order_id`, polling every `interval`.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>, order_id: OrderId, interval: Duration) -> Self {
        let (tx, updates) = watch::channel(Vec::new());
        let id = order_id.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match MessageRepository::new(storage.as_ref()).for_order(&id) {
                    Ok(thread) => {
                        if tx.send(thread).is_err() {
                            // Every receiver is gone; stop polling.
                            break;
                        }
                    }
                    Err(e) => warn!(order_id = %id, error = %e, "chat poll failed"),
                }
            }
        });
        Self {
            order_id,
            updates,
            task,
        }
    }

    /// The order this feed watches.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// A receiver of thread snapshots. `changed()` resolves after each poll;
    /// `borrow()` yields the latest snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.updates.clone()
    }
}

impl Drop for ChatFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use atma_vision_core::UserId;

    fn draft(text: &str) -> MessageDraft {
        MessageDraft {
            order_id: OrderId::new("ord-1004"),
            sender_id: UserId::new("client-2"),
            sender_name: "Сергей Петров".to_owned(),
            text: text.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_feed_observes_new_messages() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let feed = ChatFeed::open(
            Arc::clone(&storage),
            OrderId::new("ord-1004"),
            Duration::from_millis(10),
        );
        let mut rx = feed.subscribe();

        // Wait for the initial snapshot of the seeded thread.
        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(rx.borrow_and_update().len(), 5);

        ChatService::new(storage.as_ref())
            .send(draft("Уже выезжаю"))
            .unwrap();

        // The next poll must pick the new message up.
        loop {
            tokio::time::timeout(Duration::from_secs(1), rx.changed())
                .await
                .unwrap()
                .unwrap();
            if rx.borrow_and_update().len() == 6 {
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_dropping_the_feed_stops_the_timer() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let feed = ChatFeed::open(
            Arc::clone(&storage),
            OrderId::new("ord-1002"),
            Duration::from_millis(10),
        );
        let mut rx = feed.subscribe();
        drop(feed);

        // The sender is dropped when the task is aborted, so the receiver
        // observes closure rather than further snapshots.
        let closed = tokio::time::timeout(Duration::from_secs(1), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(closed.is_ok(), "aborted feed kept its timer alive");
    }
}
