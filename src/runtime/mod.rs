//! Transport-facing request/response models.

pub mod api;

pub use api::{
    estimate, health, parse_order, submit_order, EstimateResponse, FinishedOrderPayload, Health,
    OrderAccepted,
};
