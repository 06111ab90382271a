//! Public engine facade and its controllers.
//!
//! `TickerEngine` is split across files by concern, each contributing an
//! `impl` block: initialization, velocity input, stepping, measurement,
//! observers and snapshots.

mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod measure_controller;
mod observer_dispatch;
mod observer_registry;
mod step_controller;
mod ticker_model;
mod validation;
mod velocity_controller;

pub use engine::TickerEngine;
pub use engine_config::TickerEngineConfig;
pub use engine_snapshot::TickerSnapshot;
pub use json_contract::{TICKER_SNAPSHOT_JSON_SCHEMA_V1, TickerSnapshotJsonContractV1};
pub use step_controller::StepReport;
pub use ticker_model::LoopState;
