//! Tests for error types

use kitchen_scheduler::core::{AppResult, KitchenError};

#[test]
fn test_error_display() {
    let err = KitchenError::UnknownFood {
        order_id: 4,
        food_id: 17,
    };
    assert_eq!(err.to_string(), "unknown food id 17 in order 4");

    let err = KitchenError::Delivery {
        order_id: 2,
        reason: "connection refused".into(),
    };
    assert!(err.to_string().contains("order 2"));
    assert!(err.to_string().contains("connection refused"));

    assert_eq!(KitchenError::EmptyOrder(9).to_string(), "order 9 has no items");
    assert_eq!(KitchenError::Shutdown.to_string(), "kitchen has been shut down");
}

#[test]
fn test_io_error_converts_to_spawn_failure() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "no threads left");
    let err: KitchenError = io.into();
    assert!(matches!(err, KitchenError::WorkerSpawn(_)));
}

#[test]
fn test_app_result_wraps_kitchen_error() {
    fn fails() -> AppResult<()> {
        Err(KitchenError::DuplicateOrder(3))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KitchenError>(),
        Some(KitchenError::DuplicateOrder(3))
    ));
}
