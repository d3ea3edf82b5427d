//! Scoring strategies.

use serde::{Deserialize, Serialize};

/// Which weighted formula combines importance, urgency, effort, and
/// dependency count into a score.
///
/// Labels are matched case-sensitively; any label that is not recognized
/// selects [`Strategy::SmartBalance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    /// Importance dominates, effort is a small penalty
    HighImpact,
    /// Short tasks first
    FastestWins,
    /// Fewest remaining business days first
    DeadlineDriven,
    /// Weighted blend of every factor
    #[default]
    SmartBalance,
}

impl Strategy {
    /// Every strategy, in the order they are presented to users.
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::HighImpact,
        Strategy::FastestWins,
        Strategy::DeadlineDriven,
    ];

    /// Resolve a caller-supplied label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High Impact" => Self::HighImpact,
            "Fastest Wins" => Self::FastestWins,
            "Deadline Driven" => Self::DeadlineDriven,
            _ => Self::SmartBalance,
        }
    }

    /// Whether `label` names a strategy exactly, rather than falling back.
    pub fn is_known_label(label: &str) -> bool {
        Self::ALL.iter().any(|s| s.label() == label)
    }

    /// Canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighImpact => "High Impact",
            Self::FastestWins => "Fastest Wins",
            Self::DeadlineDriven => "Deadline Driven",
            Self::SmartBalance => "Smart Balance",
        }
    }

    /// Short description of the formula.
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighImpact => "importance*2 - hours*0.2",
            Self::FastestWins => "10/(hours+1) + importance*0.25",
            Self::DeadlineDriven => "urgency + importance*0.5",
            Self::SmartBalance => "importance*1.2 + urgency - hours*0.4 + dependencies*0.6",
        }
    }
}

impl From<String> for Strategy {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.label().to_string()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
