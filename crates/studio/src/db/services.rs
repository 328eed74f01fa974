//! Service catalog operations.

use std::collections::BTreeSet;

use super::{StoreError, keys, read_or_seed, seed, write_collection};
use crate::models::Service;
use crate::storage::Storage;

/// Repository for the `services` collection.
pub struct ServiceRepository<'a> {
    storage: &'a dyn Storage,
}

impl<'a> ServiceRepository<'a> {
    /// Create a new service repository over the given substrate.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// All catalog services, seeding the collection on first read.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn list(&self) -> Result<Vec<Service>, StoreError> {
        read_or_seed(self.storage, keys::SERVICES, seed::initial_services)
    }

    /// Distinct category labels across the current catalog, alphabetically
    /// ordered and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn categories(&self) -> Result<Vec<String>, StoreError> {
        let categories: BTreeSet<String> =
            self.list()?.into_iter().map(|s| s.category).collect();
        Ok(categories.into_iter().collect())
    }

    /// Append a service and persist the collection.
    ///
    /// There is no uniqueness or content validation beyond what the caller
    /// supplied; the catalog is append-only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the substrate fails or holds invalid data.
    pub fn add(&self, service: Service) -> Result<(), StoreError> {
        let mut services = self.list()?;
        services.push(service);
        write_collection(self.storage, keys::SERVICES, &services)
    }
}
