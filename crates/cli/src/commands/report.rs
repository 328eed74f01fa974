//! Revenue report command (manager view).

use atma_vision_core::Role;
use atma_vision_studio::analysis::{GeminiClient, analyze_business_data};
use atma_vision_studio::config::StudioConfig;
use atma_vision_studio::db::{OrderRepository, ServiceRepository};
use atma_vision_studio::services::build_report;
use atma_vision_studio::storage::Storage;

use super::{CliError, require_session};

/// Print the revenue summary, optionally followed by the AI analysis.
pub async fn show(
    storage: &dyn Storage,
    config: &StudioConfig,
    analyze: bool,
) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role != Role::Manager {
        return Err(CliError::Forbidden(
            "Отчеты доступны только менеджеру".to_owned(),
        ));
    }

    let orders = OrderRepository::new(storage).list_for(Some(&session))?;
    let services = ServiceRepository::new(storage).list()?;
    let report = build_report(&orders, &services);

    println!("Выручка:            {}", report.total_revenue);
    println!("Всего заказов:      {}", report.total_orders);
    println!("Выполнено заказов:  {}", report.completed_orders);
    println!();
    println!("По услугам:");
    for line in &report.revenue_by_service {
        println!("  {:>12}  {}", line.value.to_string(), line.name);
    }

    if analyze {
        let client = config.analysis.as_ref().map(GeminiClient::new);
        let summary = analyze_business_data(client.as_ref(), &orders, &services).await;
        println!();
        println!("{summary}");
    }
    Ok(())
}
