//! Wire payloads of the analyze boundary.

use serde::{Deserialize, Serialize};

use crate::{ScoredTask, Strategy, Task};

/// Strategy label used when a request does not name one.
pub const DEFAULT_STRATEGY_LABEL: &str = "Smart Balance";

/// Body of an analyze request: `{"tasks": [...], "strategy": "<label>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Tasks to rank
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Strategy label, as sent by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl AnalyzeRequest {
    /// Create a request.
    pub fn new(tasks: Vec<Task>, strategy: impl Into<String>) -> Self {
        Self {
            tasks,
            strategy: Some(strategy.into()),
        }
    }

    /// The label sent by the caller, or the default label.
    pub fn strategy_label(&self) -> &str {
        self.strategy.as_deref().unwrap_or(DEFAULT_STRATEGY_LABEL)
    }

    /// Resolve the strategy label.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_label(self.strategy_label())
    }

    /// Check per-task constraints the type system does not carry.
    ///
    /// Effort must be a finite, non-negative number of hours.
    pub fn validate(&self) -> Result<(), InvalidTask> {
        for (index, task) in self.tasks.iter().enumerate() {
            let hours = task.estimated_hours;
            if !hours.is_finite() || hours < 0.0 {
                return Err(InvalidTask {
                    index,
                    reason: format!("estimated_hours must be a non-negative number, got {}", hours),
                });
            }
        }
        Ok(())
    }
}

/// A task that failed request validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid task at index {index}: {reason}")]
pub struct InvalidTask {
    /// Position in the submitted list
    pub index: usize,
    /// What was wrong
    pub reason: String,
}

/// Successful analyze response: tasks ranked by score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    /// Scored tasks, highest score first
    pub results: Vec<ScoredTask>,
}

/// Rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,

    /// Additional detail, such as a parser message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Task indices forming a dependency cycle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycle: Vec<usize>,
}

impl ErrorResponse {
    /// Create an error with only a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            cycle: Vec::new(),
        }
    }

    /// Attach detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the offending cycle.
    pub fn with_cycle(mut self, cycle: Vec<usize>) -> Self {
        self.cycle = cycle;
        self
    }
}
