// src/config/mod.rs

pub mod ntkit_config;

// Re-export main types for convenience
pub use ntkit_config::{NtkitConfig, OutputConfig, OutputFormat, SieveConfig, TrialDivisionConfig};
