//! Optional AI business analysis of the orders and services collections.
//!
//! This is a best-effort integration: without a configured API key it
//! degrades to a fixed "not configured" message, and any underlying fault is
//! converted into a user-facing apology string rather than propagated. The
//! rest of the system never depends on it.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::AnalysisError;
pub use types::{GenerateContentRequest, GenerateContentResponse};

use serde::Serialize;
use tracing::error;

use atma_vision_core::Rubles;

use crate::models::{Order, Service};

/// Fixed reply when no API key is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "API Key not configured.";

const EMPTY_RESPONSE_MESSAGE: &str = "Не удалось получить ответ от AI.";
const ANALYSIS_FAILED_MESSAGE: &str =
    "Произошла ошибка при анализе данных. Проверьте API ключ.";

/// The condensed view of the business data handed to the analyst.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DataSummary<'a> {
    total_orders: usize,
    total_revenue: Rubles,
    recent_orders: &'a [Order],
    service_list: Vec<&'a str>,
}

fn build_prompt(orders: &[Order], services: &[Service]) -> String {
    let summary = DataSummary {
        total_orders: orders.len(),
        total_revenue: orders
            .iter()
            .fold(Rubles::ZERO, |acc, o| acc.saturating_add(o.amount)),
        recent_orders: orders
            .get(orders.len().saturating_sub(10)..)
            .unwrap_or(orders),
        service_list: services.iter().map(|s| s.title.as_str()).collect(),
    };
    let summary_json =
        serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_owned());

    format!(
        "Ты - опытный бизнес-аналитик для видеопродакшн студии \"ATMA VISION\".\n\
         Проанализируй следующие данные о заказах и услугах (в формате JSON):\n\
         \n\
         {summary_json}\n\
         \n\
         Пожалуйста, предоставь краткий отчет на русском языке, включающий:\n\
         1. Общую оценку эффективности продаж.\n\
         2. Какая услуга кажется наиболее популярной (или какая категория).\n\
         3. Рекомендации по увеличению выручки на основе этих данных.\n\
         4. Если данных мало, предложи стратегии маркетинга для видеостудии.\n\
         \n\
         Ответ должен быть профессиональным, но понятным, с использованием Markdown."
    )
}

/// Produce a free-text business summary of the given collections.
///
/// Never fails: an absent client, an API fault or an empty answer each map
/// to their fixed user-facing string.
pub async fn analyze_business_data(
    client: Option<&GeminiClient>,
    orders: &[Order],
    services: &[Service],
) -> String {
    let Some(client) = client else {
        return NOT_CONFIGURED_MESSAGE.to_owned();
    };

    let prompt = build_prompt(orders, services);
    match client.generate(&prompt).await {
        Ok(response) => response
            .text()
            .unwrap_or_else(|| EMPTY_RESPONSE_MESSAGE.to_owned()),
        Err(e) => {
            error!(error = %e, "business analysis failed");
            ANALYSIS_FAILED_MESSAGE.to_owned()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[tokio::test]
    async fn test_unconfigured_client_degrades_to_fixed_message() {
        let orders = seed::initial_orders();
        let services = seed::initial_services();
        let reply = analyze_business_data(None, &orders, &services).await;
        assert_eq!(reply, NOT_CONFIGURED_MESSAGE);
    }

    #[test]
    fn test_prompt_carries_data_summary() {
        let orders = seed::initial_orders();
        let services = seed::initial_services();
        let prompt = build_prompt(&orders, &services);

        assert!(prompt.contains("\"totalOrders\": 7"));
        assert!(prompt.contains("\"totalRevenue\": 410000"));
        assert!(prompt.contains("Видеообзор недвижимости"));
        assert!(prompt.contains("бизнес-аналитик"));
    }

    #[test]
    fn test_recent_orders_are_capped_at_ten() {
        let mut orders = seed::initial_orders();
        let extra = orders.clone();
        orders.extend(extra);
        assert_eq!(orders.len(), 14);

        let summary = DataSummary {
            total_orders: orders.len(),
            total_revenue: Rubles::ZERO,
            recent_orders: orders
                .get(orders.len().saturating_sub(10)..)
                .unwrap_or(&orders),
            service_list: Vec::new(),
        };
        assert_eq!(summary.recent_orders.len(), 10);
    }
}
