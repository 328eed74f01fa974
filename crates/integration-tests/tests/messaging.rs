//! Chat threads and the polling feed.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use atma_vision_core::{OrderId, UserId};
use atma_vision_integration_tests::fresh_storage;
use atma_vision_studio::db::MessageRepository;
use atma_vision_studio::models::MessageDraft;
use atma_vision_studio::services::{ChatFeed, ChatService};
use atma_vision_studio::storage::{MemoryStorage, Storage};

fn anna_draft(text: &str) -> MessageDraft {
    MessageDraft {
        order_id: OrderId::new("ord-1002"),
        sender_id: UserId::new("client-1"),
        sender_name: "Анна Клиент".to_owned(),
        text: text.to_owned(),
    }
}

#[test]
fn send_appends_one_unread_message_in_timestamp_order() {
    let storage = fresh_storage();
    let repo = MessageRepository::new(&storage);
    let thread_key = OrderId::new("ord-1002");

    let before = repo.for_order(&thread_key).unwrap();
    assert_eq!(before.len(), 4);
    let previous_latest = before.last().unwrap().timestamp;

    let sent = repo.send(anna_draft("hi")).unwrap();
    assert!(!sent.is_read);
    assert!(sent.timestamp >= previous_latest);
    assert!(sent.id.as_str().starts_with("msg-"));

    let after = repo.for_order(&thread_key).unwrap();
    assert_eq!(after.len(), 5);
    assert_eq!(after.last(), Some(&sent));
    assert!(after.is_sorted_by_key(|m| m.timestamp));
}

#[test]
fn sent_message_roundtrips_field_for_field() {
    let storage = fresh_storage();
    let chat = ChatService::new(&storage);

    let sent = chat.send(anna_draft("Когда будет готов черновик?")).unwrap();
    let thread = chat.messages_for_order(&OrderId::new("ord-1002")).unwrap();
    assert_eq!(thread.last(), Some(&sent));
}

#[test]
fn threads_are_isolated_by_order() {
    let storage = fresh_storage();
    let chat = ChatService::new(&storage);

    chat.send(anna_draft("только для ord-1002")).unwrap();
    let other = chat.messages_for_order(&OrderId::new("ord-1004")).unwrap();
    assert_eq!(other.len(), 5);
    assert!(other.iter().all(|m| m.text != "только для ord-1002"));
}

#[tokio::test]
async fn feed_polls_new_messages_and_stops_on_drop() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let order = OrderId::new("ord-1004");

    let feed = ChatFeed::open(Arc::clone(&storage), order.clone(), Duration::from_millis(10));
    let mut rx = feed.subscribe();

    tokio::time::timeout(Duration::from_secs(1), rx.changed())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rx.borrow_and_update().len(), 5);

    ChatService::new(storage.as_ref())
        .send(MessageDraft {
            order_id: order,
            sender_id: UserId::new("operator-1"),
            sender_name: "Иван Оператор".to_owned(),
            text: "Выезжаю на объект".to_owned(),
        })
        .unwrap();

    loop {
        tokio::time::timeout(Duration::from_secs(1), rx.changed())
            .await
            .unwrap()
            .unwrap();
        if rx.borrow_and_update().len() == 6 {
            break;
        }
    }

    // Closing the view drops the feed; the receiver observes closure.
    drop(feed);
    let closed = tokio::time::timeout(Duration::from_secs(1), async {
        while rx.changed().await.is_ok() {}
    })
    .await;
    assert!(closed.is_ok(), "dropped feed must stop publishing");
}
