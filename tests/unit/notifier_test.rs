//! Tests for notifier backends

use kitchen_scheduler::core::{CompletionRecord, FinishedOrder, KitchenError, Notifier, Order};
use kitchen_scheduler::infra::notifier::{ChannelNotifier, InMemoryNotifier};
use kitchen_scheduler::util::Priority;
use std::sync::Arc;
use std::time::Duration;

fn finished(order_id: u32) -> FinishedOrder {
    FinishedOrder {
        order: Arc::new(Order::new(order_id, vec![1], Priority(1))),
        cooking_time: Duration::from_millis(10),
        cooking_details: vec![CompletionRecord { food_id: 1, cook_id: 1 }],
    }
}

#[test]
fn test_in_memory_notifier_records() {
    let notifier = InMemoryNotifier::new();
    notifier.deliver(&finished(1)).unwrap();
    notifier.deliver(&finished(2)).unwrap();
    assert_eq!(notifier.delivered().len(), 2);
    assert_eq!(notifier.count_for(2), 1);
    assert!(notifier.wait_for(2, Duration::ZERO));
    assert!(!notifier.wait_for(3, Duration::from_millis(10)));
}

#[test]
fn test_rejecting_notifier_still_records() {
    let notifier = InMemoryNotifier::rejecting();
    let err = notifier.deliver(&finished(8)).unwrap_err();
    assert!(matches!(err, KitchenError::Delivery { order_id: 8, .. }));
    assert_eq!(notifier.count_for(8), 1);
}

#[test]
fn test_channel_notifier_forwards() {
    let (notifier, rx) = ChannelNotifier::new();
    notifier.deliver(&finished(3)).unwrap();
    assert_eq!(rx.try_recv().unwrap().order_id(), 3);

    drop(rx);
    assert!(notifier.deliver(&finished(4)).is_err());
}
