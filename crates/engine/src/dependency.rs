//! Dependency graph validation.
//!
//! Nodes are task indices; an edge `i -> j` means task `i` depends on task
//! `j`. Scoring is only defined on an acyclic graph, so the graph is built
//! and checked before any task is scored.

use taskrank_core::{DanglingPolicy, Task};
use tracing::warn;

use crate::error::{EngineError, Result};

/// A dependency index that points outside the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingDependency {
    /// Index of the task carrying the reference
    pub task: usize,
    /// The out-of-range index
    pub index: i64,
}

/// DFS colour of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Adjacency view of a task list.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// task -> [dependencies], in submitted order
    edges: Vec<Vec<usize>>,
    /// References dropped while building
    dangling: Vec<DanglingDependency>,
}

impl DependencyGraph {
    /// Build the graph, handling out-of-range indices per `policy`.
    pub fn build(tasks: &[Task], policy: DanglingPolicy) -> Result<Self> {
        let graph = Self::from_tasks(tasks);

        match (policy, graph.dangling.first()) {
            (DanglingPolicy::Reject, Some(first)) => {
                return Err(EngineError::DanglingDependency {
                    task: first.task,
                    index: first.index,
                });
            }
            (DanglingPolicy::Ignore, _) => {
                for reference in &graph.dangling {
                    warn!(
                        "Ignoring dependency {} of task {}: no such task",
                        reference.index, reference.task
                    );
                }
            }
            (DanglingPolicy::Reject, None) => {}
        }

        Ok(graph)
    }

    /// Build the graph, ignoring out-of-range indices.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut graph = Self {
            edges: Vec::with_capacity(tasks.len()),
            dangling: Vec::new(),
        };

        for (task_index, task) in tasks.iter().enumerate() {
            let mut targets = Vec::with_capacity(task.dependencies.len());
            for &dep in &task.dependencies {
                match usize::try_from(dep) {
                    Ok(target) if target < tasks.len() => targets.push(target),
                    _ => graph.dangling.push(DanglingDependency { task: task_index, index: dep }),
                }
            }
            graph.edges.push(targets);
        }

        graph
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no tasks.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// In-range dependencies of a task.
    pub fn dependencies_of(&self, index: usize) -> &[usize] {
        self.edges.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tasks that depend on `index` (fan-in).
    pub fn dependents_of(&self, index: usize) -> Vec<usize> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, deps)| deps.contains(&index))
            .map(|(task, _)| task)
            .collect()
    }

    /// References that were dropped while building.
    pub fn dangling(&self) -> &[DanglingDependency] {
        &self.dangling
    }

    /// Whether any cycle is reachable by depth-first traversal.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Find the first cycle, returned as task indices in dependency order.
    ///
    /// Three-colour DFS with an explicit stack: a neighbour that is still on
    /// the stack closes a back-edge, a finished neighbour is skipped.
    pub fn find_cycle(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.edges.len()];
        // (node, next edge to explore)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..self.edges.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            marks[start] = Mark::OnStack;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                let Some(&neighbor) = self.edges[node].get(next) else {
                    marks[node] = Mark::Done;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                match marks[neighbor] {
                    Mark::OnStack => {
                        let begin = stack
                            .iter()
                            .position(|&(n, _)| n == neighbor)
                            .unwrap_or(0);
                        return Some(stack[begin..].iter().map(|&(n, _)| n).collect());
                    }
                    Mark::Done => {}
                    Mark::Unvisited => {
                        marks[neighbor] = Mark::OnStack;
                        stack.push((neighbor, 0));
                    }
                }
            }
        }

        None
    }
}

/// Whether the task list's dependency graph contains a cycle.
///
/// Out-of-range indices are treated as absent edges.
pub fn detect_cycle(tasks: &[Task]) -> bool {
    DependencyGraph::from_tasks(tasks).has_cycle()
}

/// The first dependency cycle in the task list, if any.
pub fn find_cycle(tasks: &[Task]) -> Option<Vec<usize>> {
    DependencyGraph::from_tasks(tasks).find_cycle()
}
