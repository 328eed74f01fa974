//! Catalog commands.

use chrono::Utc;

use atma_vision_core::{Role, Rubles, ServiceId};
use atma_vision_studio::db::ServiceRepository;
use atma_vision_studio::models::Service;
use atma_vision_studio::storage::Storage;

use super::{CliError, require_session};

/// List the catalog. Open to everyone, logged in or not.
pub fn list(storage: &dyn Storage) -> Result<(), CliError> {
    for service in ServiceRepository::new(storage).list()? {
        println!(
            "{:4} {:14} {:>12}  {}",
            service.id.as_str(),
            service.category,
            service.price.to_string(),
            service.title
        );
    }
    Ok(())
}

/// List distinct catalog categories.
pub fn categories(storage: &dyn Storage) -> Result<(), CliError> {
    for category in ServiceRepository::new(storage).categories()? {
        println!("{category}");
    }
    Ok(())
}

/// Add a catalog service (manager action).
pub fn add(
    storage: &dyn Storage,
    title: &str,
    price: i64,
    category: &str,
    description: &str,
) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role != Role::Manager {
        return Err(CliError::Forbidden(
            "Добавление услуг доступно только менеджеру".to_owned(),
        ));
    }
    if title.is_empty() {
        return Err(CliError::InvalidArgument("title must not be empty".to_owned()));
    }
    if price < 0 {
        return Err(CliError::InvalidArgument(
            "price must be non-negative".to_owned(),
        ));
    }

    ServiceRepository::new(storage).add(Service {
        id: ServiceId::new(Utc::now().timestamp_millis().to_string()),
        title: title.to_owned(),
        description: description.to_owned(),
        price: Rubles::new(price),
        image: String::new(),
        category: category.to_owned(),
        details: Some(vec!["Описание добавлено менеджером".to_owned()]),
    })?;
    println!("Услуга добавлена!");
    Ok(())
}
