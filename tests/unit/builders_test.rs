//! Tests for kitchen builders

use kitchen_scheduler::builders::{build_kitchen, load_catalog, load_roster};
use kitchen_scheduler::config::KitchenConfig;
use kitchen_scheduler::core::Order;
use kitchen_scheduler::infra::notifier::InMemoryNotifier;
use kitchen_scheduler::util::{Equipment, Priority};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const MENU: &str = r#"[
    {"id": 1, "name": "Pizza", "preparation-time": 20, "complexity": 2, "cooking-apparatus": "oven"},
    {"id": 2, "name": "Salad", "preparation-time": 10, "complexity": 1, "cooking-apparatus": null}
]"#;

const COOKS: &str = r#"[
    {"id": 1, "rank": 3, "proficiency": 3, "name": "Gordon Ramsay", "catch-phrase": "Hey, panini head!"},
    {"id": 2, "rank": 2, "proficiency": 2, "name": "Remy", "catch-phrase": "Anyone can cook."}
]"#;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kitchen-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_data_files() {
    let menu = write_fixture("load-menu.json", MENU);
    let cooks = write_fixture("load-cooks.json", COOKS);

    let catalog = load_catalog(&menu).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).unwrap().cooking_apparatus, Some(Equipment::Oven));
    assert_eq!(catalog.get(2).unwrap().cooking_apparatus, None);

    let roster = load_roster(&cooks).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.total_proficiency(), 5);
    assert_eq!(roster.cooks()[1].catch_phrase, "Anyone can cook.");
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_catalog("/nonexistent/menu.json").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/menu.json"));
}

#[test]
fn test_build_requires_data_paths() {
    let notifier = Arc::new(InMemoryNotifier::new());
    let err = build_kitchen(&KitchenConfig::new(), notifier).err().unwrap();
    assert!(err.to_string().contains("menu_path"));
}

#[test]
fn test_build_and_run_kitchen() {
    let cfg = KitchenConfig::new()
        .with_time_unit_ms(1)
        .with_data_files(
            write_fixture("run-menu.json", MENU),
            write_fixture("run-cooks.json", COOKS),
        );
    let notifier = Arc::new(InMemoryNotifier::new());
    let kitchen = build_kitchen(&cfg, notifier.clone()).unwrap();
    assert_eq!(kitchen.stats().cooks, 2);

    kitchen
        .receive_order(Order::new(1, vec![1, 2, 1], Priority(2)))
        .unwrap();
    assert!(notifier.wait_for(1, Duration::from_secs(5)));
    kitchen.shutdown();
    assert_eq!(notifier.delivered()[0].cooking_details.len(), 3);
}
