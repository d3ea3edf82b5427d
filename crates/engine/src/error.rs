//! Engine error type.

/// Error type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Reasons the engine refuses to score a task list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The dependency graph contains a cycle
    #[error("Circular dependency detected: {}", format_cycle(.cycle))]
    CircularDependency {
        /// Task indices along the cycle, in dependency order
        cycle: Vec<usize>,
    },

    /// A dependency index points outside the task list
    #[error("Task {task} depends on unknown task index {index}")]
    DanglingDependency {
        /// Index of the task carrying the reference
        task: usize,
        /// The out-of-range index
        index: i64,
    },
}

fn format_cycle(cycle: &[usize]) -> String {
    let mut path: Vec<String> = cycle.iter().map(|i| i.to_string()).collect();
    if let Some(first) = cycle.first() {
        path.push(first.to_string());
    }
    path.join(" -> ")
}
