//! Money amounts in whole rubles.

use serde::{Deserialize, Serialize};

/// An amount in whole rubles.
///
/// The catalog and orders only ever deal in whole-ruble prices, and the
/// substrate stores amounts as plain JSON numbers, so this is a transparent
/// `i64` wrapper rather than a decimal type.
///
/// A zero order amount is meaningful: it marks an order that requires
/// individual pricing by a manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rubles(i64);

impl Rubles {
    /// Zero rubles; on an order this signals "requires individual pricing".
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole-ruble value.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying whole-ruble value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Whether this is a zero amount (individual pricing marker on orders).
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating addition, for revenue totals.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a count, for per-service revenue.
    #[must_use]
    pub const fn saturating_mul(self, count: i64) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl From<i64> for Rubles {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Rubles> for i64 {
    fn from(amount: Rubles) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Rubles {
    /// Renders with thin-space-free thousands grouping: `30 000 ₽`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        if negative {
            write!(f, "-{grouped} ₽")
        } else {
            write!(f, "{grouped} ₽")
        }
    }
}
