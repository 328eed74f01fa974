//! Atma Vision Studio - booking and order-management core.
//!
//! This crate is the entire data side of the studio: a synchronous key-value
//! storage port, the data-access layer over it (users, services, orders,
//! messages, plus the current-session pointer), and the services built on
//! top (authentication, chat with a polling feed, revenue reports, optional
//! AI business analysis).
//!
//! # Architecture
//!
//! - [`storage`] - the substrate port: a string-keyed blob store with
//!   in-memory and file-backed implementations. Everything above it is
//!   substrate-agnostic.
//! - [`db`] - repositories performing whole-collection reads and writes,
//!   with first-read seeding of the fixture data. There is no caching and no
//!   cross-collection atomicity; concurrent writers are last-write-wins.
//! - [`models`] - the persisted record types.
//! - [`services`] - auth, chat (including the polling [`services::chat::ChatFeed`])
//!   and report building.
//! - [`analysis`] - optional Gemini-backed business analyst.
//! - [`config`] - environment-based configuration.
//!
//! The calling surface (a CLI here, a web front-end elsewhere) re-fetches
//! after every mutation; nothing in this crate pushes updates.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod analysis;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod storage;
