mod cell_model_builder;
mod cell_model_cache;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod gesture_controller;
mod invalidation;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod scroll_controller;
mod validation;

pub use cell_model_cache::CellModelCacheStats;
pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use invalidation::{InvalidationLevel, InvalidationMask, InvalidationTopic};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};

pub use crate::extensions::{TimelineContext, TimelineEvent, TimelinePlugin};
