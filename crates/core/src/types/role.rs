//! User roles.

use serde::{Deserialize, Serialize};

/// Role of a user account, controlling which views and operations are
/// available downstream.
///
/// The data layer itself only uses roles for order visibility filtering;
/// everything stricter (who may assign operators, who may change roles) is
/// enforced by the calling surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Places orders and chats with the assigned operator.
    Client,
    /// Fulfills orders.
    Operator,
    /// Administers services, staff roles and reports.
    Manager,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "CLIENT"),
            Self::Operator => write!(f, "OPERATOR"),
            Self::Manager => write!(f, "MANAGER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLIENT" => Ok(Self::Client),
            "OPERATOR" => Ok(Self::Operator),
            "MANAGER" => Ok(Self::Manager),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
