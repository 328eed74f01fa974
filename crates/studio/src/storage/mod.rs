//! The persistent key-value substrate port.
//!
//! The data layer persists each collection as one JSON blob under a fixed
//! string key, exactly like browser local storage. The substrate is
//! synchronous, transaction-free and shared: concurrent writers race with
//! last-write-wins semantics, and a reader only observes another writer's
//! update on its next whole-blob read.
//!
//! [`Storage`] is injected into the repositories so tests can substitute
//! [`MemoryStorage`] for the file-backed store.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur at the substrate.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (file-backed store only).
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait abstraction for the string-keyed blob store.
///
/// Implementations can be in-memory, file-backed, or anything else that can
/// hold opaque string blobs. All access is synchronous; one operation runs
/// to completion before the next begins on the same thread of control.
pub trait Storage: Send + Sync {
    /// Read the blob stored under `key`, if any.
    ///
    /// An empty blob is a present value, distinct from an absent key - the
    /// seeding contract depends on that distinction.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the blob stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the underlying store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
