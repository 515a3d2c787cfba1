//! Kitchen configuration: equipment capacities, time scale, and queue policy.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::util::serde::Equipment;

/// Default number of stove slots.
pub const DEFAULT_STOVES: u32 = 1;
/// Default number of oven slots.
pub const DEFAULT_OVENS: u32 = 2;
/// Default wall-clock length of one preparation time unit.
pub const DEFAULT_TIME_UNIT_MS: u64 = 50;

/// Ordering policy of the shared work queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueuePolicy {
    /// Items leave in insertion order; priority only orders each order's batch.
    #[default]
    Fifo,
    /// Items leave by priority across all orders, FIFO among equal priorities.
    Priority,
}

impl QueuePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fifo" => Some(Self::Fifo),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Kitchen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Stove slots (equipment class A).
    pub stoves: u32,
    /// Oven slots (equipment class B).
    pub ovens: u32,
    /// Milliseconds of simulated work per preparation time unit.
    pub time_unit_ms: u64,
    /// Work queue ordering policy.
    pub queue_policy: QueuePolicy,
    /// Menu JSON file, used by the builder.
    pub menu_path: Option<PathBuf>,
    /// Cook roster JSON file, used by the builder.
    pub cooks_path: Option<PathBuf>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            stoves: DEFAULT_STOVES,
            ovens: DEFAULT_OVENS,
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
            queue_policy: QueuePolicy::Fifo,
            menu_path: None,
            cooks_path: None,
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match env_opt(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{key}: cannot parse `{raw}`")),
        None => Ok(default),
    }
}

impl KitchenConfig {
    /// Reference configuration (one stove, two ovens, 50ms time unit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of stove slots.
    #[must_use]
    pub const fn with_stoves(mut self, stoves: u32) -> Self {
        self.stoves = stoves;
        self
    }

    /// Set the number of oven slots.
    #[must_use]
    pub const fn with_ovens(mut self, ovens: u32) -> Self {
        self.ovens = ovens;
        self
    }

    /// Set the wall-clock length of one time unit.
    #[must_use]
    pub const fn with_time_unit_ms(mut self, time_unit_ms: u64) -> Self {
        self.time_unit_ms = time_unit_ms;
        self
    }

    /// Set the work queue ordering policy.
    #[must_use]
    pub const fn with_queue_policy(mut self, policy: QueuePolicy) -> Self {
        self.queue_policy = policy;
        self
    }

    /// Set the menu and cook roster file locations.
    #[must_use]
    pub fn with_data_files(mut self, menu: impl Into<PathBuf>, cooks: impl Into<PathBuf>) -> Self {
        self.menu_path = Some(menu.into());
        self.cooks_path = Some(cooks.into());
        self
    }

    /// Slot count configured for an equipment class.
    #[must_use]
    pub const fn capacity(&self, equipment: Equipment) -> u32 {
        match equipment {
            Equipment::Stove => self.stoves,
            Equipment::Oven => self.ovens,
        }
    }

    /// Wall-clock length of one preparation time unit.
    #[must_use]
    pub const fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// Validate configuration values.
    ///
    /// The estimator divides by the total equipment capacity, so at least one
    /// slot must exist.
    pub fn validate(&self) -> Result<(), String> {
        if Equipment::ALL.iter().all(|&eq| self.capacity(eq) == 0) {
            return Err("at least one stove or oven slot is required".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from `KITCHEN_*` environment variables, loading a
    /// `.env` file first if present. Unset or empty keys keep defaults; a
    /// malformed value is an error.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let queue_policy = match env_opt("KITCHEN_QUEUE_POLICY") {
            Some(raw) => QueuePolicy::parse(&raw)
                .ok_or_else(|| format!("unknown queue policy `{raw}`"))?,
            None => defaults.queue_policy,
        };
        let cfg = Self {
            stoves: env_parse("KITCHEN_STOVES", defaults.stoves)?,
            ovens: env_parse("KITCHEN_OVENS", defaults.ovens)?,
            time_unit_ms: env_parse("KITCHEN_TIME_UNIT_MS", defaults.time_unit_ms)?,
            queue_policy,
            menu_path: env_opt("KITCHEN_MENU_PATH").map(PathBuf::from),
            cooks_path: env_opt("KITCHEN_COOKS_PATH").map(PathBuf::from),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let cfg = KitchenConfig::new();
        assert_eq!(cfg.capacity(Equipment::Stove), 1);
        assert_eq!(cfg.capacity(Equipment::Oven), 2);
        assert_eq!(cfg.time_unit(), Duration::from_millis(50));
        assert_eq!(cfg.queue_policy, QueuePolicy::Fifo);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let cfg = KitchenConfig::new().with_stoves(0).with_ovens(0);
        assert!(cfg.validate().is_err());
        assert!(KitchenConfig::new().with_stoves(0).validate().is_ok());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(QueuePolicy::parse(" Priority "), Some(QueuePolicy::Priority));
        assert_eq!(QueuePolicy::parse("fifo"), Some(QueuePolicy::Fifo));
        assert_eq!(QueuePolicy::parse("lifo"), None);
    }
}
