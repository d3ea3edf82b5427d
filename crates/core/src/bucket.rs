//! Simple bucket model.
//!
//! A reduced task shape used by the bucket scorer, which ranks a task into
//! one of four tiers from caller-supplied urgency and importance.

use serde::{Deserialize, Serialize};

/// Input to the bucket scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTask {
    /// Caller-supplied urgency
    #[serde(default)]
    pub urgency: i64,

    /// Caller-supplied importance
    #[serde(default)]
    pub importance: i64,

    /// Optional deadline, `YYYY-MM-DD`. Unparseable values are ignored.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl SimpleTask {
    /// Create a task without a deadline.
    pub fn new(urgency: i64, importance: i64) -> Self {
        Self {
            urgency,
            importance,
            deadline: None,
        }
    }

    /// Set the deadline string.
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}

/// Ordered priority tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityBucket {
    /// Total of 2 or less
    Low,
    /// Total of 3 to 6
    Medium,
    /// Total of 7 to 10
    High,
    /// Total above 10
    Critical,
}

impl PriorityBucket {
    /// Bucket for a combined urgency + importance total.
    pub fn from_total(total: i64) -> Self {
        match total {
            t if t <= 2 => Self::Low,
            t if t <= 6 => Self::Medium,
            t if t <= 10 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for PriorityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
