//! Persisted record types.
//!
//! These are the shapes stored in the substrate, field for field. Wire names
//! are camelCase and optional fields are omitted when absent, because the
//! stored collections are shared with the original web front-end.

pub mod message;
pub mod order;
pub mod report;
pub mod service;
pub mod user;

pub use message::{Message, MessageDraft};
pub use order::Order;
pub use report::{RevenueReport, ServiceRevenue};
pub use service::Service;
pub use user::{SessionUser, User};
