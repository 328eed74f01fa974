//! Atma Vision Core - Shared types library.
//!
//! This crate provides common types used across all Atma Vision components:
//! - `studio` - Booking and order-management library (storage, data access, services)
//! - `cli` - Command-line front-end for clients, operators and managers
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, roles and
//!   order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
