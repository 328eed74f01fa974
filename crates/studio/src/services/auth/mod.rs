//! Authentication service.
//!
//! Mock auth over the users collection and the session pointer: plaintext
//! password comparison, no hashing, no tokens, no expiry. The session record
//! is always the password-stripped view of a user.

mod error;

pub use error::AuthError;

use tracing::{info, instrument};

use atma_vision_core::{Role, UserId};

use crate::db::{SessionStore, UserRepository};
use crate::models::{SessionUser, User};
use crate::storage::Storage;

/// Authentication and session management over the substrate.
pub struct AuthService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Register a new user and log them in.
    ///
    /// The candidate record is caller-supplied in full (id included). On
    /// success the user is appended, persisted, and a sanitized session is
    /// established as a side effect - registration is also a login.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::DuplicateEmail`] if any existing user has the
    /// same email (exact, case-sensitive match), leaving the users
    /// collection unchanged. Returns [`AuthError::Store`] on substrate
    /// failure.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub fn register(&self, user: User) -> Result<SessionUser, AuthError> {
        let users = UserRepository::new(self.storage);
        if users.list()?.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let session = user.sanitized();
        users.add(user)?;
        SessionStore::new(self.storage).set(&session)?;
        info!(user_id = %session.id, "user registered");
        Ok(session)
    }

    /// Log a user in by exact email and password match.
    ///
    /// On success the sanitized user is persisted as the current session and
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no user matches - the
    /// same error for an unknown email and a wrong password. Returns
    /// [`AuthError::Store`] on substrate failure.
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let users = UserRepository::new(self.storage).list()?;
        let user = users
            .iter()
            .find(|u| u.email.as_str() == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = user.sanitized();
        SessionStore::new(self.storage).set(&session)?;
        info!(user_id = %session.id, role = %session.role, "user logged in");
        Ok(session)
    }

    /// Clear the session pointer. The users collection is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] on substrate failure.
    pub fn logout(&self) -> Result<(), AuthError> {
        SessionStore::new(self.storage).clear()?;
        Ok(())
    }

    /// The currently logged-in user, or `None`.
    ///
    /// This is the sole authentication check in the system.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] on substrate failure.
    pub fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        Ok(SessionStore::new(self.storage).current()?)
    }

    /// Change a user's role (manager action).
    ///
    /// Unknown ids are silent no-ops. When the changed user is also the
    /// current session holder, the session snapshot is refreshed from the
    /// mutated record, stripped again.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] on substrate failure.
    #[instrument(skip(self))]
    pub fn change_role(&self, user_id: &UserId, role: Role) -> Result<(), AuthError> {
        let Some(updated) = UserRepository::new(self.storage).update_role(user_id, role)? else {
            return Ok(());
        };

        let sessions = SessionStore::new(self.storage);
        if let Some(current) = sessions.current()? {
            if current.id == *user_id {
                sessions.set(&updated.sanitized())?;
            }
        }
        Ok(())
    }
}
