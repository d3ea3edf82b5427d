//! Simple bucket scoring.
//!
//! A standalone path that ranks a task into LOW / MEDIUM / HIGH / CRITICAL
//! from caller-supplied urgency and importance, with a boost for close
//! deadlines. It shares nothing with [`crate::scorer`] beyond the tier
//! names.

use chrono::NaiveDate;
use taskrank_core::{PriorityBucket, SimpleTask};
use tracing::debug;

/// Outcome of reading a task's deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineOutcome {
    /// No deadline, or an empty string
    Missing,
    /// Deadline present but not a `YYYY-MM-DD` date; no boost applies
    Invalid(String),
    /// Calendar days from today to the deadline, negative when past
    DaysLeft(i64),
}

impl DeadlineOutcome {
    /// Read `deadline` relative to `today`.
    pub fn parse(deadline: Option<&str>, today: NaiveDate) -> Self {
        let Some(raw) = deadline.filter(|s| !s.is_empty()) else {
            return Self::Missing;
        };

        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Self::DaysLeft((date - today).num_days()),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    /// Urgency added for this deadline: +3 within two days (overdue
    /// included), +1 within five.
    pub fn boost(&self) -> i64 {
        match self {
            Self::DaysLeft(days) if *days <= 2 => 3,
            Self::DaysLeft(days) if *days <= 5 => 1,
            _ => 0,
        }
    }
}

/// Buckets simple tasks relative to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketScorer {
    today: NaiveDate,
}

impl BucketScorer {
    /// Create a scorer for a fixed date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Read the task's deadline.
    pub fn deadline(&self, task: &SimpleTask) -> DeadlineOutcome {
        DeadlineOutcome::parse(task.deadline.as_deref(), self.today)
    }

    /// Urgency after the deadline boost.
    pub fn boosted_urgency(&self, task: &SimpleTask) -> i64 {
        let outcome = self.deadline(task);
        if let DeadlineOutcome::Invalid(raw) = &outcome {
            debug!("Ignoring unparseable deadline '{}'", raw);
        }
        task.urgency.saturating_add(outcome.boost())
    }

    /// Bucket a task.
    pub fn bucket(&self, task: &SimpleTask) -> PriorityBucket {
        PriorityBucket::from_total(self.boosted_urgency(task).saturating_add(task.importance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()
    }

    fn in_days(days: i64) -> String {
        (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_low_priority() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.bucket(&SimpleTask::new(1, 1)), PriorityBucket::Low);
    }

    #[test]
    fn test_medium_priority() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.bucket(&SimpleTask::new(3, 3)), PriorityBucket::Medium);
    }

    #[test]
    fn test_high_priority() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.bucket(&SimpleTask::new(5, 5)), PriorityBucket::High);
    }

    #[test]
    fn test_deadline_boost_stops_below_critical() {
        let scorer = BucketScorer::new(today());
        let task = SimpleTask::new(2, 5).with_deadline(in_days(1));
        assert_eq!(scorer.boosted_urgency(&task), 5);
        assert_eq!(scorer.bucket(&task), PriorityBucket::High);

        // One more point of urgency would cross into CRITICAL
        let task = SimpleTask::new(3, 5).with_deadline(in_days(1));
        assert_eq!(scorer.bucket(&task), PriorityBucket::Critical);
    }

    #[test]
    fn test_deadline_boost_moves_bucket() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.bucket(&SimpleTask::new(1, 5)), PriorityBucket::Medium);
        let boosted = SimpleTask::new(1, 5).with_deadline(in_days(2));
        assert_eq!(scorer.bucket(&boosted), PriorityBucket::High);
    }

    #[test]
    fn test_boost_tiers() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.boosted_urgency(&SimpleTask::new(0, 0).with_deadline(in_days(-10))), 3);
        assert_eq!(scorer.boosted_urgency(&SimpleTask::new(0, 0).with_deadline(in_days(2))), 3);
        assert_eq!(scorer.boosted_urgency(&SimpleTask::new(0, 0).with_deadline(in_days(3))), 1);
        assert_eq!(scorer.boosted_urgency(&SimpleTask::new(0, 0).with_deadline(in_days(5))), 1);
        assert_eq!(scorer.boosted_urgency(&SimpleTask::new(0, 0).with_deadline(in_days(6))), 0);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let scorer = BucketScorer::new(today());
        let task = SimpleTask::new(i64::MAX - 1, 5).with_deadline(in_days(1));
        assert_eq!(scorer.boosted_urgency(&task), i64::MAX);
        assert_eq!(scorer.bucket(&task), PriorityBucket::Critical);

        let task = SimpleTask::new(5, i64::MAX);
        assert_eq!(scorer.bucket(&task), PriorityBucket::Critical);

        let task = SimpleTask::new(i64::MIN, i64::MIN);
        assert_eq!(scorer.bucket(&task), PriorityBucket::Low);
    }

    #[test]
    fn test_invalid_deadline_is_ignored() {
        let scorer = BucketScorer::new(today());
        let task = SimpleTask::new(2, 5).with_deadline("next friday");
        assert_eq!(scorer.deadline(&task), DeadlineOutcome::Invalid("next friday".to_string()));
        assert_eq!(scorer.boosted_urgency(&task), 2);
        assert_eq!(scorer.bucket(&task), PriorityBucket::High);
    }

    #[test]
    fn test_missing_deadline() {
        let scorer = BucketScorer::new(today());
        assert_eq!(scorer.deadline(&SimpleTask::new(1, 1)), DeadlineOutcome::Missing);
        let empty = SimpleTask::new(1, 1).with_deadline("");
        assert_eq!(scorer.deadline(&empty), DeadlineOutcome::Missing);
        assert_eq!(DeadlineOutcome::Missing.boost(), 0);
    }
}
