use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{days_passed, TOTAL_WEEKS};

/// Elapsed-time figures shown next to the life table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeStats {
    pub birthdate: NaiveDate,
    pub today: NaiveDate,
    pub days: u32,
    pub weeks: u32,
    pub hours: u64,
    pub minutes: u64,
    /// Whole 365-day years, as a rough age
    pub years: u32,
    /// Share of the 90-year horizon already lived, in percent
    pub percent_lived: f64,
    /// Leap years from the birth year to the current year, both inclusive
    pub leap_years: u32,
}

impl LifeStats {
    pub fn compute(birthdate: NaiveDate, today: NaiveDate) -> Self {
        let days = days_passed(birthdate, today);
        let weeks = days / 7;
        let hours = u64::from(days) * 24;

        Self {
            birthdate,
            today,
            days,
            weeks,
            hours,
            minutes: hours * 60,
            years: days / 365,
            percent_lived: f64::from(weeks) / f64::from(TOTAL_WEEKS) * 100.0,
            leap_years: count_leap_years(birthdate.year(), today.year()),
        }
    }

    pub fn weeks_remaining(&self) -> u32 {
        TOTAL_WEEKS.saturating_sub(self.weeks)
    }
}

/// Gregorian leap years in `start..=end`
pub fn count_leap_years(start: i32, end: i32) -> u32 {
    (start..=end)
        .filter(|year| NaiveDate::from_ymd_opt(*year, 2, 29).is_some())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stats_reference_scenario() {
        let stats = LifeStats::compute(date(2000, 1, 1), date(2024, 1, 1));
        assert_eq!(stats.days, 8766);
        assert_eq!(stats.weeks, 1252);
        assert_eq!(stats.hours, 8766 * 24);
        assert_eq!(stats.minutes, 8766 * 24 * 60);
        assert_eq!(stats.years, 24);
        // 2000, 2004, ..., 2024
        assert_eq!(stats.leap_years, 7);
        assert!((stats.percent_lived - 1252.0 / 4680.0 * 100.0).abs() < 1e-9);
        assert_eq!(stats.weeks_remaining(), 4680 - 1252);
    }

    #[test]
    fn test_stats_future_birthdate_is_zero() {
        let stats = LifeStats::compute(date(2030, 6, 1), date(2024, 1, 1));
        assert_eq!(stats.days, 0);
        assert_eq!(stats.weeks, 0);
        assert_eq!(stats.minutes, 0);
        assert_eq!(stats.percent_lived, 0.0);
    }

    #[test]
    fn test_count_leap_years_century_rules() {
        assert_eq!(count_leap_years(1900, 1900), 0);
        assert_eq!(count_leap_years(2000, 2000), 1);
        assert_eq!(count_leap_years(1896, 1904), 2);
        assert_eq!(count_leap_years(2025, 2024), 0);
    }
}
