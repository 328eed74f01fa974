//! Order chat commands.

use std::sync::Arc;

use chrono::DateTime;

use atma_vision_core::{OrderId, Role};
use atma_vision_studio::config::StudioConfig;
use atma_vision_studio::db::OrderRepository;
use atma_vision_studio::models::{Message, MessageDraft, SessionUser};
use atma_vision_studio::services::{ChatFeed, ChatService};
use atma_vision_studio::storage::{FileStorage, Storage};

use super::{CliError, require_session};

/// A participant may chat on an order they can see: the ordering client,
/// the assigned operator, or any manager.
fn require_chat_access(
    storage: &dyn Storage,
    order_id: &OrderId,
) -> Result<SessionUser, CliError> {
    let session = require_session(storage)?;
    let orders = OrderRepository::new(storage).list_for(Some(&session))?;
    let order = orders
        .iter()
        .find(|o| &o.id == order_id)
        .ok_or_else(|| CliError::NotFound(format!("order {order_id}")))?;

    if session.role == Role::Operator && order.operator_id.as_ref() != Some(&session.id) {
        return Err(CliError::Forbidden(
            "Чат доступен только назначенному оператору".to_owned(),
        ));
    }
    Ok(session)
}

fn print_message(message: &Message) {
    let stamp = DateTime::from_timestamp_millis(message.timestamp)
        .map_or_else(|| message.timestamp.to_string(), |t| t.format("%d.%m %H:%M").to_string());
    println!("[{stamp}] {}: {}", message.sender_name, message.text);
}

/// Print an order's chat history.
pub fn history(storage: &dyn Storage, order_id: &str) -> Result<(), CliError> {
    let order_id = OrderId::new(order_id);
    require_chat_access(storage, &order_id)?;

    for message in ChatService::new(storage).messages_for_order(&order_id)? {
        print_message(&message);
    }
    Ok(())
}

/// Send a message into an order's chat.
pub fn send(storage: &dyn Storage, order_id: &str, text: &str) -> Result<(), CliError> {
    let order_id = OrderId::new(order_id);
    let session = require_chat_access(storage, &order_id)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidArgument("text must not be empty".to_owned()));
    }

    let message = ChatService::new(storage).send(MessageDraft {
        order_id,
        sender_id: session.id,
        sender_name: session.name,
        text: text.to_owned(),
    })?;
    print_message(&message);
    Ok(())
}

/// Follow an order's chat until interrupted.
///
/// This is the "chat view is open" state: a [`ChatFeed`] polls the thread
/// and new lines are printed as they appear. Ctrl-C closes the view, which
/// drops the feed and with it the timer.
pub async fn watch(
    storage: FileStorage,
    config: &StudioConfig,
    order_id: &str,
) -> Result<(), CliError> {
    let order_id = OrderId::new(order_id);
    require_chat_access(&storage, &order_id)?;

    let feed = ChatFeed::open(
        Arc::new(storage),
        order_id.clone(),
        config.chat_poll_interval,
    );
    let mut updates = feed.subscribe();
    let mut printed = 0;

    println!("Чат по заказу {order_id} (Ctrl-C для выхода)");
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let thread = updates.borrow_and_update().clone();
                for message in thread.iter().skip(printed) {
                    print_message(message);
                }
                printed = thread.len();
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    // Dropping the feed aborts the polling task.
    Ok(())
}
