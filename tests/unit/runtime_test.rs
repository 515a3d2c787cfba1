//! Tests for the order transport wire models

use kitchen_scheduler::config::KitchenConfig;
use kitchen_scheduler::core::{Catalog, Kitchen, KitchenError, Roster};
use kitchen_scheduler::infra::notifier::ChannelNotifier;
use kitchen_scheduler::runtime::api::{estimate, health, parse_order, submit_order, FinishedOrderPayload};
use std::sync::Arc;
use std::time::Duration;

fn kitchen(notifier: ChannelNotifier) -> Kitchen {
    let catalog = Catalog::from_json_str(
        r#"[{"id": 1, "name": "Soup", "preparation-time": 2, "complexity": 1, "cooking-apparatus": "stove"}]"#,
    )
    .unwrap();
    let roster = Roster::from_json_str(r#"[{"id": 1, "proficiency": 2}]"#).unwrap();
    Kitchen::start(
        KitchenConfig::new().with_time_unit_ms(1),
        catalog,
        roster,
        Arc::new(notifier),
    )
    .unwrap()
}

#[test]
fn test_submit_and_receive_payload() {
    let (notifier, finished) = ChannelNotifier::new();
    let kitchen = kitchen(notifier);
    assert!(health(&kitchen).ok);

    let order = parse_order(
        r#"{"orderId": 21, "tableId": 4, "waiterId": 2, "items": [1, 1], "priority": 3, "maxWait": 45.5}"#,
    )
    .unwrap();
    let accepted = submit_order(&kitchen, order).unwrap();
    assert_eq!(accepted.order_id, 21);
    assert_eq!(accepted.queued_items, 2);

    let done = finished.recv_timeout(Duration::from_secs(5)).unwrap();
    let json = serde_json::to_value(FinishedOrderPayload::from(&done)).unwrap();
    assert_eq!(json["orderId"], 21);
    assert_eq!(json["tableId"], 4);
    assert_eq!(json["maxWait"], 45.5);
    assert_eq!(json["cookingDetails"].as_array().unwrap().len(), 2);
    assert_eq!(json["cookingDetails"][0]["cookId"], 1);

    assert!(estimate(&kitchen, 21).estimated_waiting_time.abs() < f64::EPSILON);
    kitchen.shutdown();
    assert!(!health(&kitchen).ok);
}

#[test]
fn test_submit_rejection_is_reported() {
    let (notifier, _finished) = ChannelNotifier::new();
    let kitchen = kitchen(notifier);
    let order = parse_order(r#"{"orderId": 5, "items": [42], "priority": 1}"#).unwrap();
    let err = submit_order(&kitchen, order).unwrap_err();
    assert!(matches!(err, KitchenError::UnknownFood { order_id: 5, food_id: 42 }));

    let order = parse_order(r#"{"orderId": 6, "items": [1], "priority": 1}"#).unwrap();
    submit_order(&kitchen, order.clone()).unwrap();
    kitchen.shutdown();
    assert!(matches!(submit_order(&kitchen, order), Err(KitchenError::Shutdown)));
    assert!(matches!(parse_order("{"), Err(KitchenError::MalformedOrder(_))));
}
