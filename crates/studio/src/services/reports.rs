//! Revenue report building for the manager dashboard.

use atma_vision_core::{OrderStatus, Rubles};

use crate::models::{Order, RevenueReport, Service, ServiceRevenue};

/// Build the revenue summary the manager dashboard renders.
///
/// A pure function over snapshots of the two collections: total revenue sums
/// every order amount (individual-pricing orders contribute their zero),
/// and per-service revenue is the order count for that service times its
/// list price - custom orders reference no catalog entry and therefore only
/// show up in the totals.
#[must_use]
pub fn build_report(orders: &[Order], services: &[Service]) -> RevenueReport {
    let total_revenue = orders
        .iter()
        .fold(Rubles::ZERO, |acc, o| acc.saturating_add(o.amount));

    let completed_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .count();

    let revenue_by_service = services
        .iter()
        .map(|service| {
            let count = orders
                .iter()
                .filter(|o| o.service_id == service.id)
                .count();
            ServiceRevenue {
                name: service.title.clone(),
                value: service
                    .price
                    .saturating_mul(i64::try_from(count).unwrap_or(i64::MAX)),
            }
        })
        .collect();

    RevenueReport {
        total_revenue,
        total_orders: orders.len(),
        completed_orders,
        revenue_by_service,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_wrap)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn test_seed_report_figures() {
        let orders = seed::initial_orders();
        let services = seed::initial_services();
        let report = build_report(&orders, &services);

        assert_eq!(report.total_orders, 7);
        assert_eq!(report.completed_orders, 3);
        // 45 + 30 + 80 + 15 + 150 + 25 + 65 thousand rubles.
        assert_eq!(report.total_revenue, Rubles::new(410_000));
        assert_eq!(report.revenue_by_service.len(), 7);

        let wedding = report
            .revenue_by_service
            .iter()
            .find(|r| r.name.starts_with("Свадебная"))
            .unwrap();
        assert_eq!(wedding.value, Rubles::new(80_000));
    }

    #[test]
    fn test_empty_collections() {
        let report = build_report(&[], &[]);
        assert_eq!(report.total_revenue, Rubles::ZERO);
        assert_eq!(report.total_orders, 0);
        assert_eq!(report.completed_orders, 0);
        assert!(report.revenue_by_service.is_empty());
    }
}
