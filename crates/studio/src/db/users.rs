//! User collection operations.

use atma_vision_core::{Role, UserId};

use super::{StoreError, keys, read_or_seed, seed, write_collection};
use crate::models::User;
use crate::storage::Storage;

/// Repository for the `users` collection.
pub struct UserRepository<'a> {
    storage: &'a dyn Storage,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository over the given substrate.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// All users, seeding the collection on first read.
    ///
    /// Returned records include plaintext passwords; strip them (via
    /// [`User::sanitized`]) before exposing anything session-shaped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn list(&self) -> Result<Vec<User>, StoreError> {
        read_or_seed(self.storage, keys::USERS, seed::initial_users)
    }

    /// Users with the operator role, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn operators(&self) -> Result<Vec<User>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|u| u.role == Role::Operator)
            .collect())
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.list()?.into_iter().find(|u| &u.id == id))
    }

    /// Append a user and persist the collection.
    ///
    /// No uniqueness check happens here; duplicate-email rejection is the
    /// registration service's concern.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn add(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.list()?;
        users.push(user);
        write_collection(self.storage, keys::USERS, &users)
    }

    /// Change a user's role in place and persist.
    ///
    /// Returns the updated record, or `None` when the id is unknown - an
    /// unknown id is a silent no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn update_role(&self, id: &UserId, role: Role) -> Result<Option<User>, StoreError> {
        let mut users = self.list()?;
        let Some(user) = users.iter_mut().find(|u| &u.id == id) else {
            return Ok(None);
        };
        user.role = role;
        let updated = user.clone();
        write_collection(self.storage, keys::USERS, &users)?;
        tracing::info!(user_id = %id, %role, "user role changed");
        Ok(Some(updated))
    }
}
