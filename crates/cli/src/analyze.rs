//! The analyze boundary: payload in, ranked tasks or a rejection out.

use taskrank_core::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use taskrank_engine::{EngineError, ScoringEngine};
use tracing::debug;

/// Decode, validate, and rank a request body.
///
/// `strategy` overrides the label in the body; `default_strategy` applies
/// when neither names one.
pub fn handle(
    engine: &ScoringEngine,
    body: &str,
    strategy: Option<&str>,
    default_strategy: &str,
) -> Result<AnalyzeResponse, ErrorResponse> {
    let mut request: AnalyzeRequest = serde_json::from_str(body)
        .map_err(|e| ErrorResponse::new("Invalid JSON").with_detail(e.to_string()))?;

    if let Some(label) = strategy {
        request.strategy = Some(label.to_string());
    }
    if request.strategy.is_none() {
        request.strategy = Some(default_strategy.to_string());
    }

    request
        .validate()
        .map_err(|e| ErrorResponse::new("Invalid task").with_detail(e.to_string()))?;

    debug!("Request for {} tasks, strategy '{}'", request.tasks.len(), request.strategy_label());

    engine.analyze_request(request).map_err(|e| match e {
        EngineError::CircularDependency { cycle } => {
            ErrorResponse::new("Circular dependency detected!").with_cycle(cycle)
        }
        other @ EngineError::DanglingDependency { .. } => {
            ErrorResponse::new("Unknown dependency").with_detail(other.to_string())
        }
    })
}
