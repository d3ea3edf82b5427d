//! Scoring engine - dependency validation, business-day urgency, and
//! strategy scoring.

#![warn(missing_docs)]

pub mod bucket;
pub mod calendar;
pub mod dependency;
pub mod engine;
pub mod error;
pub mod scorer;

pub use bucket::{BucketScorer, DeadlineOutcome};
pub use calendar::{BusinessCalendar, BusinessDays, MAX_URGENCY};
pub use dependency::{detect_cycle, find_cycle, DanglingDependency, DependencyGraph};
pub use engine::{rank_by_score, ScoringEngine};
pub use error::{EngineError, Result};
pub use scorer::{compute_score, ScoringContext, StrategyScorer};
