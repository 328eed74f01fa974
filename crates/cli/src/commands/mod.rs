//! Subcommand implementations.
//!
//! Each module owns one command family and goes through the studio library
//! only. Role gating (clients order, managers administer) lives here, the
//! same place the web front-end enforced it - the data layer deliberately
//! does not.

pub mod auth;
pub mod chat;
pub mod orders;
pub mod report;
pub mod services;
pub mod users;

use thiserror::Error;

use atma_vision_core::EmailError;
use atma_vision_studio::db::StoreError;
use atma_vision_studio::models::SessionUser;
use atma_vision_studio::services::{AuthError, AuthService};
use atma_vision_studio::storage::Storage;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No session; the command needs a logged-in user.
    #[error("Не выполнен вход. Сначала выполните atma-cli login")]
    NotLoggedIn,

    /// The session role may not run this command.
    #[error("{0}")]
    Forbidden(String),

    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid command input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// Authentication failed.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// The data layer failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// The current session, or [`CliError::NotLoggedIn`].
pub(crate) fn require_session(storage: &dyn Storage) -> Result<SessionUser, CliError> {
    AuthService::new(storage)
        .current_user()?
        .ok_or(CliError::NotLoggedIn)
}
