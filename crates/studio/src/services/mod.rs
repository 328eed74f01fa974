//! Services built on top of the data-access layer.

pub mod auth;
pub mod chat;
pub mod reports;

pub use auth::{AuthError, AuthService};
pub use chat::{ChatFeed, ChatService};
pub use reports::build_report;
