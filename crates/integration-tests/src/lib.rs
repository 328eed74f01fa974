//! Integration tests for Atma Vision.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atma-vision-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `seeding` - First-read seeding and substrate persistence
//! - `auth` - Registration, login and session lifecycle
//! - `orders` - Role-filtered visibility and order mutations
//! - `messaging` - Chat threads and the polling feed
//!
//! The tests drive the public service and repository surface over a fresh
//! in-memory substrate per test (the file-backed substrate where persistence
//! itself is the property under test).

use atma_vision_studio::models::SessionUser;
use atma_vision_studio::services::AuthService;
use atma_vision_studio::storage::{MemoryStorage, Storage};

/// A fresh, empty in-memory substrate.
#[must_use]
pub fn fresh_storage() -> MemoryStorage {
    MemoryStorage::new()
}

/// Log in with a seeded account and return the session.
///
/// # Panics
///
/// Panics if the credentials do not match the seed fixtures.
#[must_use]
pub fn login(storage: &dyn Storage, email: &str, password: &str) -> SessionUser {
    AuthService::new(storage)
        .login(email, password)
        .expect("seed login must succeed")
}
