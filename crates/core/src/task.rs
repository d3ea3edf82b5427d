//! Task model - the record a caller submits for ranking.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Date;

/// Field names attached by the scorer. Input members with these names are
/// replaced by the computed values.
pub const OUTPUT_FIELDS: [&str; 5] = [
    "score",
    "explanation",
    "working_days",
    "skipped_weekends",
    "skipped_holidays",
];

/// A task submitted for scoring.
///
/// Tasks are addressed by their position in the submitted list; the
/// `dependencies` of a task are indices into that same list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-supplied weight, no enforced range
    pub importance: i64,

    /// Effort proxy in hours
    pub estimated_hours: f64,

    /// Due date
    pub due_date: Date,

    /// Indices of the tasks this one depends on
    #[serde(default)]
    pub dependencies: Vec<i64>,

    /// Any other members of the submitted object (title, id, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a task with no dependencies.
    pub fn new(importance: i64, estimated_hours: f64, due_date: Date) -> Self {
        Self {
            importance,
            estimated_hours,
            due_date,
            dependencies: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Set the dependency indices.
    pub fn with_dependencies(mut self, dependencies: impl Into<Vec<i64>>) -> Self {
        self.dependencies = dependencies.into();
        self
    }

    /// Attach a pass-through member such as a title.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The `title` member, if the caller sent one.
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    /// Number of tasks this task depends on (fan-out).
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

/// The output of scoring a single task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskScore {
    /// Priority score, rounded to two decimal places
    pub score: f64,

    /// Human-readable explanation of the score
    pub explanation: String,

    /// Business days from today through the due date
    pub working_days: u32,

    /// Weekend days skipped by the business-day walk
    pub skipped_weekends: Vec<Date>,

    /// Configured holidays skipped by the business-day walk
    pub skipped_holidays: Vec<Date>,
}

/// A task annotated with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    /// The submitted task
    #[serde(flatten)]
    pub task: Task,

    /// Computed output fields
    #[serde(flatten)]
    pub result: TaskScore,
}

impl ScoredTask {
    /// Attach a score to a task, dropping stale output members from the input.
    pub fn new(mut task: Task, result: TaskScore) -> Self {
        for field in OUTPUT_FIELDS {
            task.extra.remove(field);
        }
        Self { task, result }
    }

    /// The computed score.
    pub fn score(&self) -> f64 {
        self.result.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn test_deserialize_keeps_extra_members() {
        let value = json!({
            "title": "Fix login bug",
            "importance": 8,
            "estimated_hours": 2.5,
            "due_date": "2025-11-28",
            "dependencies": [1, 2]
        });

        let task: Task = serde_json::from_value(value).unwrap();
        assert_eq!(task.importance, 8);
        assert_eq!(task.estimated_hours, 2.5);
        assert_eq!(task.due_date, date("2025-11-28"));
        assert_eq!(task.dependencies, vec![1, 2]);
        assert_eq!(task.title(), Some("Fix login bug"));
    }

    #[test]
    fn test_dependencies_default_to_empty() {
        let value = json!({
            "importance": 1,
            "estimated_hours": 1,
            "due_date": "2025-11-28"
        });

        let task: Task = serde_json::from_value(value).unwrap();
        assert!(task.dependencies.is_empty());
        assert_eq!(task.dependency_count(), 0);
    }

    #[test]
    fn test_malformed_due_date_rejected() {
        let value = json!({
            "importance": 1,
            "estimated_hours": 1,
            "due_date": "28/11/2025"
        });

        assert!(serde_json::from_value::<Task>(value).is_err());
    }

    #[test]
    fn test_scored_task_serializes_flat() {
        let task = Task::new(3, 1.0, date("2025-03-14"))
            .with_field("title", "Write docs")
            .with_field("score", 99);
        let scored = ScoredTask::new(
            task,
            TaskScore {
                score: 4.5,
                explanation: "Highly weighted importance (3).".to_string(),
                working_days: 0,
                skipped_weekends: vec![date("2025-03-15")],
                skipped_holidays: vec![],
            },
        );

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["title"], "Write docs");
        assert_eq!(value["score"], 4.5);
        assert_eq!(value["due_date"], "2025-03-14");
        assert_eq!(value["skipped_weekends"], json!(["2025-03-15"]));
        assert_eq!(value["skipped_holidays"], json!([]));
        assert_eq!(scored.score(), 4.5);
    }
}
