//! Error types for the authentication service.

use thiserror::Error;

use crate::db::StoreError;

/// Errors that can occur during authentication operations.
///
/// This is deliberately the whole business-failure taxonomy of the system:
/// registration can reject a duplicate email, login can reject bad
/// credentials, and everything else in the data layer degrades to silent
/// no-ops instead of erroring. The messages are the user-facing strings the
/// front-end shows verbatim.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A user with this email already exists.
    #[error("Пользователь с таким email уже существует")]
    DuplicateEmail,

    /// No user matches the email and password pair. Deliberately does not
    /// distinguish an unknown email from a wrong password.
    #[error("Неверный email или пароль")]
    InvalidCredentials,

    /// The underlying data layer failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
