//! taskrank core data models.
//!
//! This crate defines the task records that flow through the scoring
//! engine, the strategy labels callers pick from, the wire payloads of the
//! analyze boundary, and the deployment configuration.

#![warn(missing_docs)]

// Task records
mod bucket;
mod strategy;
mod task;

// Boundary payloads
mod request;

// Deployment configuration
mod config;

pub use bucket::{PriorityBucket, SimpleTask};
pub use config::{
    CalendarConfig, Config, ConfigError, DanglingPolicy, ScoringConfig, DEFAULT_CONFIG_FILE,
};
pub use request::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, InvalidTask, DEFAULT_STRATEGY_LABEL,
};
pub use strategy::Strategy;
pub use task::{ScoredTask, Task, TaskScore, OUTPUT_FIELDS};

/// Calendar date type used throughout taskrank.
pub type Date = chrono::NaiveDate;
