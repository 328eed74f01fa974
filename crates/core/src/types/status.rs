//! Order status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// The wire values are the Russian display strings the substrate has always
/// stored (the persisted collections are shared with the web front-end), so
/// they are part of the serialization contract, not just presentation.
///
/// Every transition between statuses is accepted, including self-transitions
/// and jumps such as Pending → Completed; there is deliberately no guard
/// logic anywhere in the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Newly created, awaiting triage. The sole initial status.
    #[serde(rename = "В обработке")]
    Pending,
    /// Accepted and in progress.
    #[serde(rename = "В работе")]
    Accepted,
    /// Work delivered.
    #[serde(rename = "Выполнен")]
    Completed,
    /// Cancelled by either side.
    #[serde(rename = "Отменен")]
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order. Useful for pickers and reports.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Accepted,
        Self::Completed,
        Self::Cancelled,
    ];

    /// The stored (and displayed) representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "В обработке",
            Self::Accepted => "В работе",
            Self::Completed => "Выполнен",
            Self::Cancelled => "Отменен",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    /// Accepts both the stored Russian strings and ASCII aliases
    /// (`pending`, `accepted`, `completed`, `cancelled`) for CLI input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "В обработке" => Ok(Self::Pending),
            "В работе" => Ok(Self::Accepted),
            "Выполнен" => Ok(Self::Completed),
            "Отменен" => Ok(Self::Cancelled),
            other => match other.to_ascii_lowercase().as_str() {
                "pending" => Ok(Self::Pending),
                "accepted" => Ok(Self::Accepted),
                "completed" => Ok(Self::Completed),
                "cancelled" | "canceled" => Ok(Self::Cancelled),
                _ => Err(format!("invalid order status: {s}")),
            },
        }
    }
}
