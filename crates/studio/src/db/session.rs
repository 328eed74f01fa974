//! The current-user session pointer.

use super::{StoreError, keys};
use crate::models::SessionUser;
use crate::storage::Storage;

/// Store for the single `session` record.
///
/// Reading this pointer is the sole authentication check in the system:
/// there is no token, no expiry and no server-side validation. Anything able
/// to write to the substrate can forge a session; that is an accepted
/// property of the design, not an oversight to fix here.
pub struct SessionStore<'a> {
    storage: &'a dyn Storage,
}

impl<'a> SessionStore<'a> {
    /// Create a new session store over the given substrate.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// The currently logged-in user, or `None` when nobody is.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn current(&self) -> Result<Option<SessionUser>, StoreError> {
        match self.storage.get(keys::SESSION)? {
            Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            None => Ok(None),
        }
    }

    /// Persist `user` as the current session.
    ///
    /// The record type cannot carry a password, so the stored blob never
    /// contains credentials regardless of the caller.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails.
    pub fn set(&self, user: &SessionUser) -> Result<(), StoreError> {
        self.storage
            .set(keys::SESSION, &serde_json::to_string(user)?)?;
        Ok(())
    }

    /// Clear the session pointer. The users collection is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(keys::SESSION)?;
        Ok(())
    }
}
