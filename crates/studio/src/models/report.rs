//! Revenue report types for the manager dashboard.

use serde::Serialize;

use atma_vision_core::Rubles;

/// Aggregated revenue figures over the full orders collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    /// Sum of all order amounts, including non-completed orders.
    pub total_revenue: Rubles,
    /// Total number of orders.
    pub total_orders: usize,
    /// Number of orders in the completed status.
    pub completed_orders: usize,
    /// Projected revenue per catalog service.
    pub revenue_by_service: Vec<ServiceRevenue>,
}

/// Projected revenue for one catalog service: order count times list price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRevenue {
    /// Service title.
    pub name: String,
    /// Order count for this service multiplied by its list price.
    pub value: Rubles,
}
