//! Business-day calendar.
//!
//! Counts the working days left before a due date, skipping weekends and
//! the configured holidays. The holiday set is injected, never built in.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;
use taskrank_core::{CalendarConfig, ConfigError};

/// Urgency of a task with no working days left.
pub const MAX_URGENCY: u32 = 22;

/// Result of walking the calendar from today to a due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessDays {
    /// Days that are neither weekend nor holiday
    pub working_days: u32,
    /// Saturdays and Sundays passed over
    pub skipped_weekends: Vec<NaiveDate>,
    /// Configured holidays passed over
    pub skipped_holidays: Vec<NaiveDate>,
}

impl BusinessDays {
    /// Urgency derived from the remaining working days, `max(0, 22 - working_days)`.
    pub fn urgency(&self) -> u32 {
        MAX_URGENCY.saturating_sub(self.working_days)
    }
}

/// Weekend and holiday aware calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    /// Create a calendar with no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calendar with the given holidays.
    pub fn with_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Create a calendar from deployment configuration.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            holidays: config.holiday_dates()?,
        })
    }

    /// Configured holidays.
    pub fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    /// Saturday or Sunday.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether `date` is a configured holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Whether `date` is a working day.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.is_holiday(date)
    }

    /// Walk every day from `today` through `due` inclusive.
    ///
    /// An overdue task (`due < today`) has no working days and no skipped
    /// days. A weekend that is also a holiday counts as a weekend.
    pub fn business_days(&self, today: NaiveDate, due: NaiveDate) -> BusinessDays {
        let mut result = BusinessDays::default();
        if due < today {
            return result;
        }

        for day in today.iter_days().take_while(|day| *day <= due) {
            if Self::is_weekend(day) {
                result.skipped_weekends.push(day);
            } else if self.is_holiday(day) {
                result.skipped_holidays.push(day);
            } else {
                result.working_days += 1;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue_has_no_days() {
        let calendar = BusinessCalendar::new();
        let days = calendar.business_days(date(2025, 11, 26), date(2025, 11, 20));
        assert_eq!(days, BusinessDays::default());
        assert_eq!(days.urgency(), MAX_URGENCY);
    }

    #[test]
    fn test_due_today_counts_today() {
        // 2025-11-26 is a Wednesday
        let calendar = BusinessCalendar::new();
        let days = calendar.business_days(date(2025, 11, 26), date(2025, 11, 26));
        assert_eq!(days.working_days, 1);
        assert_eq!(days.urgency(), 21);
    }

    #[test]
    fn test_weekend_skipped() {
        // Friday 2025-11-28 through Monday 2025-12-01
        let calendar = BusinessCalendar::new();
        let days = calendar.business_days(date(2025, 11, 28), date(2025, 12, 1));
        assert_eq!(days.working_days, 2);
        assert_eq!(days.skipped_weekends, vec![date(2025, 11, 29), date(2025, 11, 30)]);
        assert!(days.skipped_holidays.is_empty());
    }

    #[test]
    fn test_holiday_skipped() {
        // Friday 2025-03-14 is a holiday
        let calendar = BusinessCalendar::with_holidays([date(2025, 3, 14)]);
        let days = calendar.business_days(date(2025, 3, 13), date(2025, 3, 17));
        assert_eq!(days.working_days, 2);
        assert_eq!(days.skipped_holidays, vec![date(2025, 3, 14)]);
        assert_eq!(days.skipped_weekends.len(), 2);
    }

    #[test]
    fn test_weekend_holiday_counts_as_weekend() {
        // Sunday 2025-01-26
        let calendar = BusinessCalendar::with_holidays([date(2025, 1, 26)]);
        let days = calendar.business_days(date(2025, 1, 25), date(2025, 1, 27));
        assert_eq!(days.skipped_weekends, vec![date(2025, 1, 25), date(2025, 1, 26)]);
        assert!(days.skipped_holidays.is_empty());
        assert_eq!(days.working_days, 1);
    }

    #[test]
    fn test_urgency_clamps_at_zero() {
        let calendar = BusinessCalendar::new();
        let days = calendar.business_days(date(2025, 1, 1), date(2025, 12, 31));
        assert!(days.working_days > MAX_URGENCY);
        assert_eq!(days.urgency(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = CalendarConfig {
            holidays: vec!["2025-01-01".to_string(), "2025-03-14".to_string()],
        };
        let calendar = BusinessCalendar::from_config(&config).unwrap();
        assert!(calendar.is_holiday(date(2025, 1, 1)));
        assert!(!calendar.is_business_day(date(2025, 3, 14)));
        assert!(calendar.is_business_day(date(2025, 3, 13)));

        let bad = CalendarConfig {
            holidays: vec!["tomorrow".to_string()],
        };
        assert!(BusinessCalendar::from_config(&bad).is_err());
    }
}
