//! Tests for utility functions

use kitchen_scheduler::util::{elapsed_ms, now_ms, Equipment, Priority};

#[test]
fn test_priority_ordering() {
    assert!(Priority(1) < Priority(5));
    assert!(Priority(5) < Priority(300));
    assert_eq!(Priority(4).to_string(), "p4");
}

#[test]
fn test_priority_wire_format() {
    assert_eq!(serde_json::to_string(&Priority(3)).unwrap(), "3");
    let p: Priority = serde_json::from_str("2").unwrap();
    assert_eq!(p, Priority(2));
    let wide: Priority = serde_json::from_str("300").unwrap();
    assert_eq!(wide, Priority(300));
    assert!(serde_json::from_str::<Priority>("-1").is_err());
}

#[test]
fn test_equipment_names() {
    assert_eq!(Equipment::Stove.to_string(), "stove");
    assert_eq!(Equipment::ALL, [Equipment::Stove, Equipment::Oven]);
    let oven: Equipment = serde_json::from_str("\"oven\"").unwrap();
    assert_eq!(oven, Equipment::Oven);
}

#[test]
fn test_clock_is_monotonic_enough() {
    let start = now_ms();
    std::thread::sleep(std::time::Duration::from_millis(5));
    assert!(now_ms() >= start);
    assert!(elapsed_ms(start) >= 5);
}
