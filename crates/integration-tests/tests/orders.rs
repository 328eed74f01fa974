//! Role-filtered visibility and order mutations.

#![allow(clippy::unwrap_used)]

use atma_vision_core::{OrderId, OrderStatus, Rubles, ServiceId, UserId};
use atma_vision_integration_tests::{fresh_storage, login};
use atma_vision_studio::db::{OrderRepository, keys};
use atma_vision_studio::models::Order;
use atma_vision_studio::storage::Storage;

#[test]
fn anonymous_viewer_always_sees_nothing() {
    let storage = fresh_storage();
    let orders = OrderRepository::new(&storage);

    // Fresh substrate.
    assert!(orders.list_for(None).unwrap().is_empty());
    // And again after the collection exists.
    assert!(orders.list_for(None).unwrap().is_empty());
}

#[test]
fn visibility_matrix_over_the_seed_set() {
    let storage = fresh_storage();
    let orders = OrderRepository::new(&storage);

    let anna = login(&storage, "client@atma.vision", "client");
    let anna_orders = orders.list_for(Some(&anna)).unwrap();
    assert_eq!(anna_orders.len(), 2);
    assert!(anna_orders.iter().all(|o| o.client_id == anna.id));

    // Maria's single order is cancelled but still hers to see.
    let maria = login(&storage, "maria@example.com", "client");
    assert_eq!(orders.list_for(Some(&maria)).unwrap().len(), 1);

    // Elena is assigned one order but sees all seven.
    let elena = login(&storage, "elena@atma.vision", "operator");
    assert_eq!(orders.list_for(Some(&elena)).unwrap().len(), 7);

    let manager = login(&storage, "admin@atma.vision", "admin");
    assert_eq!(orders.list_for(Some(&manager)).unwrap().len(), 7);
}

#[test]
fn client_listing_preserves_stored_order() {
    let storage = fresh_storage();
    let sergey = login(&storage, "sergey@example.com", "client");

    let listed = OrderRepository::new(&storage)
        .list_for(Some(&sergey))
        .unwrap();
    let ids: Vec<&str> = listed.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ord-1003", "ord-1004"]);
}

#[test]
fn created_order_roundtrips_field_for_field() {
    let storage = fresh_storage();
    let sergey = login(&storage, "sergey@example.com", "client");
    let orders = OrderRepository::new(&storage);

    let order = Order {
        id: OrderId::new("1754550000000"),
        client_id: sergey.id.clone(),
        service_id: ServiceId::new("custom-1754550000000"),
        service_title: "Индивидуальный заказ: Event".to_owned(),
        client_name: sergey.name.clone(),
        client_contact: "+7 (900) 000-00-00".to_owned(),
        date: "2026-08-07T10:00:00.000Z".to_owned(),
        status: OrderStatus::Pending,
        amount: Rubles::ZERO,
        created_at: 1_754_550_000_000,
        operator_id: None,
        operator_name: None,
    };
    orders.create(order.clone()).unwrap();

    let listed = orders.list_for(Some(&sergey)).unwrap();
    assert_eq!(listed.last(), Some(&order));
}

#[test]
fn unknown_order_mutations_are_silent_noops() {
    let storage = fresh_storage();
    let orders = OrderRepository::new(&storage);
    orders.list_for(None).unwrap();
    let before = storage.get(keys::ORDERS).unwrap().unwrap();

    orders
        .update_status(&OrderId::new("nonexistent-id"), OrderStatus::Completed)
        .unwrap();
    assert_eq!(storage.get(keys::ORDERS).unwrap().unwrap(), before);

    orders
        .assign_operator(&OrderId::new("nonexistent-id"), "operator-1")
        .unwrap();
    let manager = login(&storage, "admin@atma.vision", "admin");
    assert_eq!(orders.list_for(Some(&manager)).unwrap().len(), 7);
}

#[test]
fn mutations_on_absent_collection_do_not_seed_it() {
    let storage = fresh_storage();
    let orders = OrderRepository::new(&storage);

    orders
        .update_status(&OrderId::new("ord-1001"), OrderStatus::Cancelled)
        .unwrap();
    orders.delete(&OrderId::new("ord-1001")).unwrap();

    assert!(storage.get(keys::ORDERS).unwrap().is_none());
}

#[test]
fn every_status_transition_is_accepted() {
    let storage = fresh_storage();
    let manager = login(&storage, "admin@atma.vision", "admin");
    let orders = OrderRepository::new(&storage);
    let id = OrderId::new("ord-1006");

    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            orders.update_status(&id, from).unwrap();
            orders.update_status(&id, to).unwrap();

            let listed = orders.list_for(Some(&manager)).unwrap();
            let order = listed.iter().find(|o| o.id == id).unwrap();
            assert_eq!(order.status, to, "transition {from} -> {to} must stick");
        }
    }
}

#[test]
fn assignment_clears_and_snapshots() {
    let storage = fresh_storage();
    let manager = login(&storage, "admin@atma.vision", "admin");
    let orders = OrderRepository::new(&storage);
    let id = OrderId::new("ord-1002");

    // Reassign from Elena to Ivan: both fields snapshot the new operator.
    orders.assign_operator(&id, "operator-1").unwrap();
    let listed = orders.list_for(Some(&manager)).unwrap();
    let order = listed.iter().find(|o| o.id == id).unwrap();
    assert_eq!(order.operator_id, Some(UserId::new("operator-1")));
    assert_eq!(order.operator_name.as_deref(), Some("Иван Оператор"));

    // Empty operator id clears both.
    orders.assign_operator(&id, "").unwrap();
    let listed = orders.list_for(Some(&manager)).unwrap();
    let order = listed.iter().find(|o| o.id == id).unwrap();
    assert_eq!(order.operator_id, None);
    assert_eq!(order.operator_name, None);
}
