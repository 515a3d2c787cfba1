//! Tests for configuration validation

use kitchen_scheduler::config::{KitchenConfig, QueuePolicy};
use kitchen_scheduler::util::Equipment;
use std::time::Duration;

#[test]
fn test_kitchen_config_defaults_are_valid() {
    let cfg = KitchenConfig::default();
    assert_eq!(cfg.stoves, 1);
    assert_eq!(cfg.ovens, 2);
    assert_eq!(cfg.time_unit(), Duration::from_millis(50));
    assert!(cfg.menu_path.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_kitchen_config_invalid_capacity() {
    let invalid = KitchenConfig::new().with_stoves(0).with_ovens(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_kitchen_config_builder_chain() {
    let cfg = KitchenConfig::new()
        .with_stoves(2)
        .with_ovens(3)
        .with_time_unit_ms(5)
        .with_queue_policy(QueuePolicy::Priority)
        .with_data_files("data/menu.json", "data/cooks.json");
    assert_eq!(cfg.capacity(Equipment::Stove), 2);
    assert_eq!(cfg.capacity(Equipment::Oven), 3);
    assert_eq!(cfg.time_unit(), Duration::from_millis(5));
    assert_eq!(cfg.queue_policy, QueuePolicy::Priority);
    assert!(cfg.cooks_path.is_some());
}

#[test]
fn test_kitchen_config_from_json() {
    let cfg = KitchenConfig::from_json_str(
        r#"{"stoves": 1, "ovens": 4, "time_unit_ms": 20, "queue_policy": "priority"}"#,
    )
    .unwrap();
    assert_eq!(cfg.ovens, 4);
    assert_eq!(cfg.time_unit_ms, 20);
    assert_eq!(cfg.queue_policy, QueuePolicy::Priority);

    let partial = KitchenConfig::from_json_str(r#"{"ovens": 1}"#).unwrap();
    assert_eq!(partial.stoves, 1);
    assert_eq!(partial.time_unit_ms, 50);

    assert!(KitchenConfig::from_json_str(r#"{"stoves": 0, "ovens": 0}"#).is_err());
    assert!(KitchenConfig::from_json_str("not json").is_err());
}

const ENV_KEYS: [&str; 6] = [
    "KITCHEN_STOVES",
    "KITCHEN_OVENS",
    "KITCHEN_TIME_UNIT_MS",
    "KITCHEN_QUEUE_POLICY",
    "KITCHEN_MENU_PATH",
    "KITCHEN_COOKS_PATH",
];

// The only test in this binary touching KITCHEN_* variables, so it runs alone
// with respect to the process environment.
#[test]
fn test_kitchen_config_from_env() {
    std::env::set_var("KITCHEN_STOVES", "2");
    std::env::set_var("KITCHEN_OVENS", " 5 ");
    std::env::set_var("KITCHEN_TIME_UNIT_MS", "10");
    std::env::set_var("KITCHEN_QUEUE_POLICY", "Priority");
    std::env::set_var("KITCHEN_MENU_PATH", "data/menu.json");
    std::env::set_var("KITCHEN_COOKS_PATH", "");

    let cfg = KitchenConfig::from_env().unwrap();
    assert_eq!(cfg.stoves, 2);
    assert_eq!(cfg.ovens, 5);
    assert_eq!(cfg.time_unit(), Duration::from_millis(10));
    assert_eq!(cfg.queue_policy, QueuePolicy::Priority);
    assert_eq!(cfg.menu_path, Some(std::path::PathBuf::from("data/menu.json")));
    assert!(cfg.cooks_path.is_none());

    std::env::set_var("KITCHEN_STOVES", "abc");
    let err = KitchenConfig::from_env().unwrap_err();
    assert!(err.contains("KITCHEN_STOVES"), "{err}");

    std::env::set_var("KITCHEN_STOVES", "1");
    std::env::set_var("KITCHEN_QUEUE_POLICY", "lifo");
    assert!(KitchenConfig::from_env().is_err());

    std::env::set_var("KITCHEN_QUEUE_POLICY", "fifo");
    std::env::set_var("KITCHEN_STOVES", "0");
    std::env::set_var("KITCHEN_OVENS", "0");
    assert!(KitchenConfig::from_env().is_err());

    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
    assert_eq!(KitchenConfig::from_env().unwrap(), KitchenConfig::default());
}
