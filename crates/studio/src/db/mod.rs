//! Data-access layer over the key-value substrate.
//!
//! Each collection lives under one fixed key as a single JSON blob:
//!
//! - `users` - user records, passwords present
//! - `services` - catalog records
//! - `orders` - order records
//! - `messages` - chat records
//! - `session` - the single current-user record, password always absent
//!
//! Every read deserializes the whole collection; every mutation reads the
//! whole collection, applies the change and writes the whole collection
//! back. There is no cache, no optimistic-concurrency check and no
//! cross-collection atomicity - two writers racing on the same key are
//! last-write-wins.
//!
//! The first read of an absent collection seeds it with the fixture records
//! from [`seed`]. Emptied-but-present collections are never re-seeded.
//!
//! Unknown-id mutations (status update, operator assignment, delete) degrade
//! to silent no-ops; callers rely on that, so it must not be hardened into
//! an error.

pub mod messages;
pub mod orders;
pub mod seed;
pub mod services;
pub mod session;
pub mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::{Storage, StorageError};

pub use messages::MessageRepository;
pub use orders::OrderRepository;
pub use services::ServiceRepository;
pub use session::SessionStore;
pub use users::UserRepository;

/// Substrate keys for the persisted collections.
pub mod keys {
    /// Ordered sequence of service records.
    pub const SERVICES: &str = "services";
    /// Ordered sequence of order records.
    pub const ORDERS: &str = "orders";
    /// Ordered sequence of user records (passwords present).
    pub const USERS: &str = "users";
    /// Single session record (password always absent).
    pub const SESSION: &str = "session";
    /// Ordered sequence of message records.
    pub const MESSAGES: &str = "messages";
}

/// Errors that can occur during data-layer operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The substrate failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored blob is not valid JSON for its record type.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read a collection, seeding it with `seed` when the key is absent.
///
/// An absent key is seeded and the fixture set returned; a present key
/// (including one holding an empty list) is deserialized as-is.
pub(crate) fn read_or_seed<T, F>(
    storage: &dyn Storage,
    key: &str,
    seed: F,
) -> Result<Vec<T>, StoreError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match storage.get(key)? {
        Some(blob) => Ok(serde_json::from_str(&blob)?),
        None => {
            let records = seed();
            storage.set(key, &serde_json::to_string(&records)?)?;
            tracing::info!(key, count = records.len(), "seeded collection");
            Ok(records)
        }
    }
}

/// Read a collection without seeding. Absent key reads as `None`, which the
/// mutation paths treat as "nothing to do".
pub(crate) fn read_existing<T>(storage: &dyn Storage, key: &str) -> Result<Option<Vec<T>>, StoreError>
where
    T: DeserializeOwned,
{
    match storage.get(key)? {
        Some(blob) => Ok(Some(serde_json::from_str(&blob)?)),
        None => Ok(None),
    }
}

/// Persist a full collection under its key.
pub(crate) fn write_collection<T>(
    storage: &dyn Storage,
    key: &str,
    records: &[T],
) -> Result<(), StoreError>
where
    T: Serialize,
{
    storage.set(key, &serde_json::to_string(records)?)?;
    Ok(())
}
