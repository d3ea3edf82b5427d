//! Strategy scoring.
//!
//! Turns one task into a score and a human-readable explanation under the
//! selected [`Strategy`]. Urgency comes from the business-day walk in
//! [`crate::calendar`].

use chrono::NaiveDate;
use taskrank_core::{Strategy, Task, TaskScore};
use tracing::debug;

use crate::calendar::BusinessCalendar;

/// Everything scoring needs besides the task itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringContext {
    /// The date urgency is measured from
    pub today: NaiveDate,
    /// Holiday calendar
    pub calendar: BusinessCalendar,
}

impl ScoringContext {
    /// Create a context for a fixed date.
    pub fn new(today: NaiveDate, calendar: BusinessCalendar) -> Self {
        Self { today, calendar }
    }
}

/// Scores tasks under one strategy.
#[derive(Debug, Clone)]
pub struct StrategyScorer {
    strategy: Strategy,
    context: ScoringContext,
}

impl StrategyScorer {
    /// Create a scorer.
    pub fn new(strategy: Strategy, context: ScoringContext) -> Self {
        Self { strategy, context }
    }

    /// The strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The scoring context.
    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Score a single task.
    pub fn score(&self, task: &Task) -> TaskScore {
        compute_score(task, self.strategy, &self.context)
    }
}

/// Score a single task under `strategy`.
pub fn compute_score(task: &Task, strategy: Strategy, context: &ScoringContext) -> TaskScore {
    let importance = task.importance as f64;
    let hours = task.estimated_hours;

    let days = context.calendar.business_days(context.today, task.due_date);
    let urgency = days.urgency() as f64;
    let weekends = days.skipped_weekends.len();
    let holidays = days.skipped_holidays.len();

    let (raw, explanation) = match strategy {
        Strategy::HighImpact => (
            importance * 2.0 - hours * 0.2,
            format!("Highly weighted importance ({}).", task.importance),
        ),
        Strategy::FastestWins => (
            10.0 / (hours + 1.0) + importance * 0.25,
            format!("Low effort ({} hrs) prioritized.", hours),
        ),
        Strategy::DeadlineDriven => (
            urgency + importance * 0.5,
            format!(
                "Due in {} working days. Skipped {} weekends and {} holidays.",
                days.working_days, weekends, holidays
            ),
        ),
        Strategy::SmartBalance => (
            importance * 1.2 + urgency - hours * 0.4 + task.dependency_count() as f64 * 0.6,
            format!(
                "Balanced: working days={}, skipped {} weekends & {} holidays.",
                days.working_days, weekends, holidays
            ),
        ),
    };

    let score = round2(raw);
    debug!(
        "Scored task (strategy={}, due={}, working_days={}): {}",
        strategy, task.due_date, days.working_days, score
    );

    TaskScore {
        score,
        explanation,
        working_days: days.working_days,
        skipped_weekends: days.skipped_weekends,
        skipped_holidays: days.skipped_holidays,
    }
}

/// Round to two decimal places, halves to even. Negative zero becomes zero.
fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
