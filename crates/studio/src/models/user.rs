//! User account types.

use serde::{Deserialize, Serialize};

use atma_vision_core::{Email, Role, UserId};

/// A user record as stored in the `users` collection.
///
/// The plaintext password exists only store-side; it is stripped before a
/// user is exposed as the current session. This is mock authentication by
/// design - there are no hashes, tokens or expiry anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable user ID.
    pub id: UserId,
    /// Display name (also the source of denormalized name snapshots).
    pub name: String,
    /// Email address; unique across the collection, matched exactly.
    pub email: Email,
    /// Plaintext credential. Never present on a session record.
    pub password: String,
    /// Role controlling order visibility and available views.
    pub role: Role,
}

impl User {
    /// The session view of this user, with the password stripped.
    #[must_use]
    pub fn sanitized(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// The single currently-authenticated user, as stored under the `session`
/// key. Identical to [`User`] minus the password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique, stable user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Role at the time the session was (re)established.
    pub role: Role,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        user.sanitized()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_has_no_password_on_the_wire() {
        let user = User {
            id: UserId::new("client-1"),
            name: "Анна Клиент".to_owned(),
            email: Email::new_unchecked("client@atma.vision"),
            password: "client".to_owned(),
            role: Role::Client,
        };

        let session_json = serde_json::to_string(&user.sanitized()).unwrap();
        assert!(!session_json.contains("password"));
        assert!(!session_json.contains("\"client\""));

        let user_json = serde_json::to_string(&user).unwrap();
        assert!(user_json.contains("\"password\":\"client\""));
    }
}
