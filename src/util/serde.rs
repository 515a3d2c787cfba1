//! Shared identifiers and small serializable value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu item identifier (stable positive integer).
pub type FoodId = u32;

/// Order identifier assigned by the inbound transport.
pub type OrderId = u32;

/// Cook identifier from the roster.
pub type CookId = u32;

/// Order priority as sent by the dining hall. Lower values are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u32);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Class of shared, capacity-limited cooking equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Stove (single slot in the reference kitchen).
    Stove,
    /// Oven (two slots in the reference kitchen).
    Oven,
}

impl Equipment {
    /// Every equipment class, in a fixed order.
    pub const ALL: [Self; 2] = [Self::Stove, Self::Oven];

    /// Stable lowercase name used in logs and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stove => "stove",
            Self::Oven => "oven",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
