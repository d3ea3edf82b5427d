//! The scoring engine - validates, scores, and ranks a task list.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::result::Result as StdResult;
use taskrank_core::{
    AnalyzeRequest, AnalyzeResponse, Config, ConfigError, DanglingPolicy, ScoredTask, Strategy,
    Task,
};
use tracing::{debug, info, warn};

use crate::calendar::BusinessCalendar;
use crate::dependency::DependencyGraph;
use crate::error::{EngineError, Result};
use crate::scorer::{ScoringContext, StrategyScorer};

/// The scoring engine.
///
/// Runs one ranking pass:
/// ```text
/// Validate dependencies → Score each task → Sort by score
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    context: ScoringContext,
    policy: DanglingPolicy,
}

impl ScoringEngine {
    /// Create an engine that ignores dangling dependencies.
    pub fn new(context: ScoringContext) -> Self {
        Self {
            context,
            policy: DanglingPolicy::default(),
        }
    }

    /// Create an engine from deployment configuration.
    pub fn from_config(config: &Config, today: NaiveDate) -> StdResult<Self, ConfigError> {
        let calendar = BusinessCalendar::from_config(&config.calendar)?;
        Ok(Self::new(ScoringContext::new(today, calendar)).with_policy(config.scoring.dependency_policy))
    }

    /// Set the dangling dependency policy.
    pub fn with_policy(mut self, policy: DanglingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The scoring context.
    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Check that the dependency graph is usable for scoring.
    pub fn validate(&self, tasks: &[Task]) -> Result<DependencyGraph> {
        let graph = DependencyGraph::build(tasks, self.policy)?;

        if let Some(cycle) = graph.find_cycle() {
            warn!("Circular dependency detected: {:?}", cycle);
            return Err(EngineError::CircularDependency { cycle });
        }

        Ok(graph)
    }

    /// Validate, score, and rank `tasks` under `strategy`.
    ///
    /// Nothing is scored when validation fails.
    pub fn analyze(&self, tasks: Vec<Task>, strategy: Strategy) -> Result<Vec<ScoredTask>> {
        info!("Analyzing {} tasks with strategy '{}'", tasks.len(), strategy);
        self.validate(&tasks)?;

        let scorer = StrategyScorer::new(strategy, self.context.clone());
        let mut ranked: Vec<ScoredTask> = tasks
            .into_iter()
            .map(|task| {
                let result = scorer.score(&task);
                ScoredTask::new(task, result)
            })
            .collect();

        rank_by_score(&mut ranked);
        debug!("Ranking complete");

        Ok(ranked)
    }

    /// Run an analyze request from the wire.
    pub fn analyze_request(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        let label = request.strategy_label();
        if !Strategy::is_known_label(label) {
            warn!("Unknown strategy '{}', using '{}'", label, Strategy::SmartBalance);
        }
        let strategy = request.strategy();
        let results = self.analyze(request.tasks, strategy)?;
        Ok(AnalyzeResponse { results })
    }
}

/// Sort by score, highest first. Equal scores keep their relative order.
pub fn rank_by_score(tasks: &mut [ScoredTask]) {
    tasks.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}
