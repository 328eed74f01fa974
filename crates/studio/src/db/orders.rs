//! Order collection operations - the core business logic of the data layer.

use atma_vision_core::{OrderId, OrderStatus, Role, UserId};

use super::{StoreError, keys, read_existing, read_or_seed, seed, write_collection};
use crate::models::{Order, SessionUser};
use crate::storage::Storage;

use super::users::UserRepository;

/// Repository for the `orders` collection.
pub struct OrderRepository<'a> {
    storage: &'a dyn Storage,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository over the given substrate.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Orders visible to `viewer`, seeding the collection on first read.
    ///
    /// - no viewer: an empty sequence (no anonymous visibility; the
    ///   collection is still seeded),
    /// - client: only that client's orders, in stored order,
    /// - operator or manager: the full collection. Operators are *not*
    ///   narrowed to their assigned orders here; "my tasks" views apply that
    ///   filter downstream. Changing this would change an externally
    ///   observable contract.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn list_for(&self, viewer: Option<&SessionUser>) -> Result<Vec<Order>, StoreError> {
        let orders = read_or_seed(self.storage, keys::ORDERS, seed::initial_orders)?;

        let Some(viewer) = viewer else {
            return Ok(Vec::new());
        };

        if viewer.role == Role::Client {
            return Ok(orders
                .into_iter()
                .filter(|o| o.client_id == viewer.id)
                .collect());
        }

        Ok(orders)
    }

    /// Append a fully-formed order and persist the collection.
    ///
    /// The caller supplies everything, including the id, `created_at` and
    /// the name/title snapshot fields; no defaulting or validation happens
    /// here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn create(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = read_or_seed(self.storage, keys::ORDERS, seed::initial_orders)?;
        tracing::info!(order_id = %order.id, client_id = %order.client_id, "order created");
        orders.push(order);
        write_collection(self.storage, keys::ORDERS, &orders)
    }

    /// Overwrite an order's status and persist.
    ///
    /// Any status may follow any status - there is deliberately no
    /// transition validation. An unknown id (or an entirely absent
    /// collection) is a silent no-op that leaves the stored blob untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError> {
        let Some(mut orders) = read_existing::<Order>(self.storage, keys::ORDERS)? else {
            return Ok(());
        };
        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(());
        };
        order.status = status;
        write_collection(self.storage, keys::ORDERS, &orders)?;
        tracing::info!(order_id = %id, %status, "order status changed");
        Ok(())
    }

    /// Assign (or clear) an order's operator.
    ///
    /// The operator's display name is looked up in the users collection
    /// *at assignment time* and stored as a snapshot; renaming the operator
    /// later does not update past assignments. An empty `operator_id` clears
    /// both fields; an id that resolves to no known user keeps the id but
    /// clears the name. Unknown order ids are silent no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn assign_operator(&self, id: &OrderId, operator_id: &str) -> Result<(), StoreError> {
        let Some(mut orders) = read_existing::<Order>(self.storage, keys::ORDERS)? else {
            return Ok(());
        };

        // Independent read of the users collection; if it changes between
        // this read and the write below, the snapshot may be stale. Accepted.
        let users = UserRepository::new(self.storage).list()?;
        let operator_name = users
            .iter()
            .find(|u| u.id.as_str() == operator_id)
            .map(|u| u.name.clone());

        let Some(order) = orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(());
        };
        order.operator_id = if operator_id.is_empty() {
            None
        } else {
            Some(UserId::new(operator_id))
        };
        order.operator_name = operator_name;
        write_collection(self.storage, keys::ORDERS, &orders)?;
        tracing::info!(order_id = %id, operator_id, "operator assignment changed");
        Ok(())
    }

    /// Remove an order from the collection.
    ///
    /// Present-but-dormant capability: no calling surface is wired to this,
    /// but the contract keeps it for completeness. Unknown ids degrade to a
    /// rewrite of the unchanged collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn delete(&self, id: &OrderId) -> Result<(), StoreError> {
        let Some(orders) = read_existing::<Order>(self.storage, keys::ORDERS)? else {
            return Ok(());
        };
        let remaining: Vec<Order> = orders.into_iter().filter(|o| &o.id != id).collect();
        write_collection(self.storage, keys::ORDERS, &remaining)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::storage::MemoryStorage;

    fn session_for(storage: &MemoryStorage, user_id: &str) -> SessionUser {
        UserRepository::new(storage)
            .find_by_id(&UserId::new(user_id))
            .unwrap()
            .unwrap()
            .sanitized()
    }

    #[test]
    fn test_anonymous_viewer_sees_nothing_but_seeds() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);

        assert!(repo.list_for(None).unwrap().is_empty());
        // The seed write still happened.
        assert!(storage.get(keys::ORDERS).unwrap().is_some());
    }

    #[test]
    fn test_client_sees_only_own_orders() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let anna = session_for(&storage, "client-1");

        let orders = repo.list_for(Some(&anna)).unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.client_id == anna.id));
    }

    #[test]
    fn test_operator_sees_full_collection() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let ivan = session_for(&storage, "operator-1");

        // Not narrowed to operator-1's three assignments.
        assert_eq!(repo.list_for(Some(&ivan)).unwrap().len(), 7);
    }

    #[test]
    fn test_update_status_unknown_id_leaves_blob_unchanged() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        repo.list_for(None).unwrap();
        let before = storage.get(keys::ORDERS).unwrap();

        repo.update_status(&OrderId::new("nonexistent-id"), OrderStatus::Completed)
            .unwrap();
        assert_eq!(storage.get(keys::ORDERS).unwrap(), before);
    }

    #[test]
    fn test_update_status_accepts_any_transition() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");
        let completed = OrderId::new("ord-1001");

        // Completed → Pending is legal; nothing guards transitions.
        repo.update_status(&completed, OrderStatus::Pending).unwrap();
        let orders = repo.list_for(Some(&manager)).unwrap();
        let order = orders.iter().find(|o| o.id == completed).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_assign_operator_snapshots_name() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");
        let id = OrderId::new("ord-1006");

        repo.assign_operator(&id, "operator-2").unwrap();
        let orders = repo.list_for(Some(&manager)).unwrap();
        let order = orders.iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.operator_id, Some(UserId::new("operator-2")));
        assert_eq!(order.operator_name.as_deref(), Some("Елена Камера"));
    }

    #[test]
    fn test_assign_operator_empty_id_clears_both_fields() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");
        let id = OrderId::new("ord-1001");

        repo.assign_operator(&id, "").unwrap();
        let orders = repo.list_for(Some(&manager)).unwrap();
        let order = orders.iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.operator_id, None);
        assert_eq!(order.operator_name, None);
    }

    #[test]
    fn test_assign_operator_unknown_user_keeps_id_clears_name() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");
        let id = OrderId::new("ord-1001");

        repo.assign_operator(&id, "ghost-operator").unwrap();
        let orders = repo.list_for(Some(&manager)).unwrap();
        let order = orders.iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.operator_id, Some(UserId::new("ghost-operator")));
        assert_eq!(order.operator_name, None);
    }

    #[test]
    fn test_snapshot_fields_survive_user_rename() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");
        let id = OrderId::new("ord-1006");

        repo.assign_operator(&id, "operator-1").unwrap();

        // Rename the operator behind the repository's back.
        let users_repo = UserRepository::new(&storage);
        let mut users: Vec<User> = users_repo.list().unwrap();
        for user in &mut users {
            if user.id.as_str() == "operator-1" {
                user.name = "Иван Переименованный".to_owned();
            }
        }
        write_collection(&storage, keys::USERS, &users).unwrap();

        let orders = repo.list_for(Some(&manager)).unwrap();
        let order = orders.iter().find(|o| o.id == id).unwrap();
        assert_eq!(order.operator_name.as_deref(), Some("Иван Оператор"));
    }

    #[test]
    fn test_delete_removes_matching_record() {
        let storage = MemoryStorage::new();
        let repo = OrderRepository::new(&storage);
        let manager = session_for(&storage, "admin-1");

        repo.list_for(None).unwrap();
        repo.delete(&OrderId::new("ord-1007")).unwrap();

        let orders = repo.list_for(Some(&manager)).unwrap();
        assert_eq!(orders.len(), 6);
        assert!(orders.iter().all(|o| o.id.as_str() != "ord-1007"));
    }
}
