//! Order types.

use serde::{Deserialize, Serialize};

use atma_vision_core::{OrderId, OrderStatus, Rubles, ServiceId, UserId};

/// A client's request for a service, as stored in the `orders` collection.
///
/// `service_title`, `client_name` and `operator_name` are snapshots taken at
/// write time, never live joins: renaming a user or service later must not
/// retroactively change historical orders.
///
/// Records are fully formed by the caller before [`create`] - the data layer
/// performs no defaulting, denormalization or validation of its own.
///
/// [`create`]: crate::db::OrderRepository::create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID (caller-supplied).
    pub id: OrderId,
    /// The ordering client.
    pub client_id: UserId,
    /// The ordered service, or a synthetic `custom-*` marker for individual
    /// requests that have no catalog entry.
    pub service_id: ServiceId,
    /// Snapshot of the service title at order time.
    pub service_title: String,
    /// Snapshot of the client's display name at order time.
    pub client_name: String,
    /// Free-text phone or email supplied with the order.
    pub client_contact: String,
    /// ISO timestamp string of the requested date.
    pub date: String,
    /// Current status. Any status may follow any status.
    pub status: OrderStatus,
    /// Agreed amount; zero signals "requires individual pricing".
    pub amount: Rubles,
    /// Creation time, epoch milliseconds. Used for sorting and display.
    pub created_at: i64,
    /// Assigned operator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<UserId>,
    /// Snapshot of the operator's name at assignment time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator_name: Option<String>,
}
