//! Catalog service types.

use serde::{Deserialize, Serialize};

use atma_vision_core::{Rubles, ServiceId};

/// A sellable catalog item.
///
/// Services are created by seed data or a manager and are immutable
/// afterwards; there is no edit or delete operation anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique service ID.
    pub id: ServiceId,
    /// Display title.
    pub title: String,
    /// Marketing description.
    pub description: String,
    /// Base price in whole rubles.
    pub price: Rubles,
    /// Image reference. Unused placeholder carried for wire compatibility.
    pub image: String,
    /// Free-text category label, the grouping unit for the catalog.
    pub category: String,
    /// Optional ordered bullet points shown on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let service = Service {
            id: ServiceId::new("3"),
            title: "ВИДЕОСЪЕМКА".to_owned(),
            description: "Съемка".to_owned(),
            price: Rubles::new(45_000),
            image: String::new(),
            category: "Праздник".to_owned(),
            details: None,
        };

        let json = serde_json::to_string(&service).unwrap();
        assert!(!json.contains("details"));

        let parsed: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, service);
    }
}
