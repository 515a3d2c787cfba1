//! Tests for work queue backends

use kitchen_scheduler::core::{Item, ItemQueue, KitchenError};
use kitchen_scheduler::infra::queue::{FifoQueue, PriorityQueue};
use kitchen_scheduler::util::{Equipment, Priority};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn item(order_id: u32, priority: u32) -> Item {
    Item {
        food_id: 1,
        order_id,
        priority: Priority(priority),
        equipment: Some(Equipment::Oven),
        preparation_time: 5,
        complexity: 1,
    }
}

fn drain(queue: &dyn ItemQueue) -> Vec<u32> {
    let mut out = Vec::new();
    while let Ok(item) = queue.pop_timeout(Duration::ZERO) {
        out.push(item.order_id);
    }
    out
}

#[test]
fn test_backends_order_items() {
    let fifo = FifoQueue::new();
    let priority = PriorityQueue::new();
    for (order_id, p) in [(1, 3), (2, 1), (3, 3), (4, 0)] {
        fifo.push(item(order_id, p)).unwrap();
        priority.push(item(order_id, p)).unwrap();
    }
    assert_eq!(fifo.len(), 4);
    assert_eq!(drain(&fifo), vec![1, 2, 3, 4]);
    assert_eq!(drain(&priority), vec![4, 2, 1, 3]);
}

#[test]
fn test_closed_queue_drains_then_ends() {
    let queues: [Box<dyn ItemQueue>; 2] = [Box::new(FifoQueue::new()), Box::new(PriorityQueue::new())];
    for queue in queues {
        queue.push(item(1, 1)).unwrap();
        queue.close();
        assert!(matches!(queue.push(item(2, 1)), Err(KitchenError::Shutdown)));
        assert_eq!(queue.pop().map(|i| i.order_id), Some(1));
        assert!(queue.pop().is_none());
        assert!(matches!(
            queue.pop_timeout(Duration::from_millis(5)),
            Err(KitchenError::Shutdown)
        ));
    }
}

#[test]
fn test_blocked_pop_wakes_on_push() {
    let queue = Arc::new(PriorityQueue::new());
    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.pop().map(|i| i.order_id))
    };
    thread::sleep(Duration::from_millis(20));
    queue.push(item(7, 2)).unwrap();
    assert_eq!(consumer.join().unwrap(), Some(7));
}

#[test]
fn test_push_batch_is_all_or_nothing() {
    let queues: [Box<dyn ItemQueue>; 2] = [Box::new(FifoQueue::new()), Box::new(PriorityQueue::new())];
    for queue in queues {
        queue.push_batch(vec![item(1, 2), item(2, 2), item(3, 2)]).unwrap();
        assert_eq!(queue.len(), 3);

        queue.close();
        let err = queue.push_batch(vec![item(4, 1), item(5, 1)]).unwrap_err();
        assert!(matches!(err, KitchenError::Shutdown));
        assert_eq!(drain(queue.as_ref()), vec![1, 2, 3]);
    }
}
