//! hotspot server library entry.
//!
//! Wires config, the query dispatcher, the profiling API and operational
//! endpoints into one axum service. Consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
