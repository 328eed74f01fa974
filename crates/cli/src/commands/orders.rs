//! Order commands.

use chrono::{SecondsFormat, Utc};

use atma_vision_core::{OrderId, OrderStatus, Role, Rubles, ServiceId};
use atma_vision_studio::db::{OrderRepository, ServiceRepository};
use atma_vision_studio::models::Order;
use atma_vision_studio::storage::Storage;

use super::{CliError, require_session};

/// List orders visible to the current user.
///
/// `assigned_to_me` narrows an operator's view to their own assignments.
/// That filter lives here on purpose: the data layer returns the full
/// collection for operators and managers alike.
pub fn list(storage: &dyn Storage, assigned_to_me: bool) -> Result<(), CliError> {
    let session = require_session(storage)?;
    let mut orders = OrderRepository::new(storage).list_for(Some(&session))?;

    if assigned_to_me {
        if session.role != Role::Operator {
            return Err(CliError::Forbidden(
                "Фильтр --assigned-to-me доступен только оператору".to_owned(),
            ));
        }
        orders.retain(|o| o.operator_id.as_ref() == Some(&session.id));
    }

    for order in orders {
        let amount = if order.amount.is_zero() {
            "инд. расчет".to_owned()
        } else {
            order.amount.to_string()
        };
        println!(
            "{:10} {:12} {:>12}  {:20} {}",
            order.id.as_str(),
            order.status.to_string(),
            amount,
            order.client_name,
            order.service_title
        );
        if let Some(name) = &order.operator_name {
            println!("{:10} оператор: {name}", "");
        }
    }
    Ok(())
}

/// Order a catalog service (client action).
pub fn create(
    storage: &dyn Storage,
    service_id: &str,
    contact: Option<&str>,
) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role != Role::Client {
        return Err(CliError::Forbidden(
            "Только клиенты могут создавать заказы.".to_owned(),
        ));
    }

    let service = ServiceRepository::new(storage)
        .list()?
        .into_iter()
        .find(|s| s.id.as_str() == service_id)
        .ok_or_else(|| CliError::NotFound(format!("service {service_id}")))?;

    let now = Utc::now();
    OrderRepository::new(storage).create(Order {
        id: OrderId::new(now.timestamp_millis().to_string()),
        client_id: session.id.clone(),
        service_id: service.id,
        service_title: service.title,
        client_name: session.name,
        client_contact: contact
            .map_or_else(|| session.email.as_str().to_owned(), ToOwned::to_owned),
        date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        status: OrderStatus::Pending,
        amount: service.price,
        created_at: now.timestamp_millis(),
        operator_id: None,
        operator_name: None,
    })?;
    println!("Ваш заказ принят! Менеджер свяжется с вами.");
    Ok(())
}

/// Request an individual production with no catalog entry (client action).
///
/// The synthetic `custom-*` service id and zero amount mark the order as
/// requiring individual pricing.
pub fn custom(
    storage: &dyn Storage,
    category: &str,
    description: &str,
    contact: &str,
) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role != Role::Client {
        return Err(CliError::Forbidden(
            "Только клиенты могут создавать заказы.".to_owned(),
        ));
    }
    if description.is_empty() || contact.is_empty() {
        return Err(CliError::InvalidArgument(
            "description and contact must not be empty".to_owned(),
        ));
    }

    let now = Utc::now();
    let millis = now.timestamp_millis();
    OrderRepository::new(storage).create(Order {
        id: OrderId::new(millis.to_string()),
        client_id: session.id.clone(),
        service_id: ServiceId::new(format!("custom-{millis}")),
        service_title: format!("Индивидуальный заказ: {category}"),
        client_name: session.name,
        client_contact: contact.to_owned(),
        date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        status: OrderStatus::Pending,
        amount: Rubles::ZERO,
        created_at: millis,
        operator_id: None,
        operator_name: None,
    })?;
    println!("Ваша индивидуальная заявка отправлена! Менеджер свяжется с вами для расчета стоимости.");
    Ok(())
}

/// Change an order's status (operator or manager action).
pub fn set_status(storage: &dyn Storage, order_id: &str, status: &str) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role == Role::Client {
        return Err(CliError::Forbidden(
            "Смена статуса доступна оператору или менеджеру".to_owned(),
        ));
    }
    let status: OrderStatus = status
        .parse()
        .map_err(|e: String| CliError::InvalidArgument(e))?;

    OrderRepository::new(storage).update_status(&OrderId::new(order_id), status)?;
    println!("Статус заказа {order_id}: {status}");
    Ok(())
}

/// Assign or clear an order's operator (manager action).
pub fn assign(storage: &dyn Storage, order_id: &str, operator_id: &str) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role != Role::Manager {
        return Err(CliError::Forbidden(
            "Назначение операторов доступно только менеджеру".to_owned(),
        ));
    }

    OrderRepository::new(storage).assign_operator(&OrderId::new(order_id), operator_id)?;
    if operator_id.is_empty() {
        println!("Назначение снято с заказа {order_id}");
    } else {
        println!("Заказ {order_id} назначен оператору {operator_id}");
    }
    Ok(())
}
