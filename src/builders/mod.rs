//! Builders to construct a running kitchen from configuration and data files.

pub mod kitchen_builder;

pub use kitchen_builder::{build_kitchen, load_catalog, load_roster};
