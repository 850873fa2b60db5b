// src/config/mod.rs

//! Configuration loading and validation for runloop.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate invariants and fold in CLI overrides (`validate.rs`, `plan.rs`).

pub mod loader;
pub mod model;
pub mod plan;
pub mod validate;

pub use loader::{load_and_validate, load_optional, DEFAULT_CONFIG_FILE};
pub use model::{CommandSection, ConfigFile, EnvironmentSection, RawConfigFile, RunSection};
pub use plan::{Overrides, RunPlan};
