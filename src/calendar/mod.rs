//! Calendar facts derived from a birthdate
//!
//! All functions take `today` explicitly so callers (and tests) control the
//! reference day. Day counts come from `chrono` date subtraction, so leap
//! years are accounted for by the calendar itself.

mod stats;
mod zodiac;

pub use stats::{count_leap_years, LifeStats};
pub use zodiac::{localized_zodiac, zodiac_sign, zodiac_sign_of, LocalizedZodiac, ZodiacSign};

use chrono::{Datelike, NaiveDate};

use crate::i18n::{FallbackChain, LocaleTable};

/// Years shown on the life grid
pub const HORIZON_YEARS: u32 = 90;

/// Rows per grid column
pub const WEEKS_PER_YEAR: u32 = 52;

/// Number of cells in the grid
pub const TOTAL_WEEKS: u32 = HORIZON_YEARS * WEEKS_PER_YEAR;

/// Returned by [`weekday_name`] when no weekday list covers the index
pub const UNKNOWN_WEEKDAY: &str = "Unknown";

/// Whole days from `birthdate` to `today`; 0 when the birthdate is today or later
pub fn days_passed(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    if birthdate >= today {
        return 0;
    }
    u32::try_from((today - birthdate).num_days()).unwrap_or(u32::MAX)
}

/// Completed weeks since birth, the birth week being week 0
pub fn weeks_passed(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    days_passed(birthdate, today) / 7
}

/// Age band of the life grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    ChildhoodAdolescence,
    YoungAdulthood,
    MiddleAge,
    Seniority,
}

impl LifeStage {
    pub const ALL: [LifeStage; 4] = [
        LifeStage::ChildhoodAdolescence,
        LifeStage::YoungAdulthood,
        LifeStage::MiddleAge,
        LifeStage::Seniority,
    ];

    /// First and one-past-last age in years
    pub const fn years(self) -> (u32, u32) {
        match self {
            LifeStage::ChildhoodAdolescence => (0, 18),
            LifeStage::YoungAdulthood => (18, 40),
            LifeStage::MiddleAge => (40, 65),
            LifeStage::Seniority => (65, HORIZON_YEARS),
        }
    }

    /// Half-open range of week indices
    pub const fn weeks(self) -> std::ops::Range<u32> {
        let (start, end) = self.years();
        start * WEEKS_PER_YEAR..end * WEEKS_PER_YEAR
    }

    /// Stage containing a week index; `None` past the horizon
    pub fn of_week(index: u32) -> Option<LifeStage> {
        Self::ALL.into_iter().find(|stage| stage.weeks().contains(&index))
    }

    /// Locale key of the legend label
    pub const fn legend_key(self) -> &'static str {
        match self {
            LifeStage::ChildhoodAdolescence => "legend_childhood_adolescence",
            LifeStage::YoungAdulthood => "legend_young_adulthood",
            LifeStage::MiddleAge => "legend_middle_age",
            LifeStage::Seniority => "legend_seniority",
        }
    }

    /// Age span printed before the legend label, e.g. `18-39`
    pub fn age_span(self) -> String {
        match self {
            LifeStage::Seniority => format!("{}-{}", self.years().0, HORIZON_YEARS),
            _ => format!("{}-{}", self.years().0, self.years().1 - 1),
        }
    }
}

/// Localized name of the weekday the subject was born on
///
/// Reads `weekdays.<lang>` (Monday first) and falls back to the English list
/// when the localized one is absent or empty.
pub fn weekday_name(birthdate: NaiveDate, lang: &str, locales: &LocaleTable) -> String {
    let index = birthdate.weekday().num_days_from_monday() as usize;
    locales
        .list_with_fallback("weekdays", &FallbackChain::image(lang))
        .get(index)
        .map_or_else(|| UNKNOWN_WEEKDAY.to_string(), |name| (*name).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_passed_reference_scenario() {
        let birth = date(2000, 1, 1);
        let today = date(2024, 1, 1);
        assert_eq!(days_passed(birth, today), 8766);
        assert_eq!(weeks_passed(birth, today), 1252);
    }

    #[test]
    fn test_weeks_passed_same_day_and_future() {
        let today = date(2024, 5, 10);
        assert_eq!(weeks_passed(today, today), 0);
        assert_eq!(weeks_passed(date(2030, 1, 1), today), 0);
        assert_eq!(days_passed(date(2030, 1, 1), today), 0);
    }

    #[test]
    fn test_weeks_passed_boundary_of_first_week() {
        let birth = date(2024, 2, 26);
        assert_eq!(weeks_passed(birth, date(2024, 3, 3)), 0);
        // Crosses Feb 29 of a leap year
        assert_eq!(weeks_passed(birth, date(2024, 3, 4)), 1);
    }

    #[test]
    fn test_weeks_passed_monotonic() {
        let birth = date(1987, 7, 14);
        let mut today = date(1987, 7, 1);
        let mut previous = 0;
        for _ in 0..2000 {
            let weeks = weeks_passed(birth, today);
            assert!(weeks >= previous);
            previous = weeks;
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_life_stage_bands() {
        assert_eq!(LifeStage::ChildhoodAdolescence.weeks(), 0..936);
        assert_eq!(LifeStage::YoungAdulthood.weeks(), 936..2080);
        assert_eq!(LifeStage::MiddleAge.weeks(), 2080..3380);
        assert_eq!(LifeStage::Seniority.weeks(), 3380..4680);

        assert_eq!(LifeStage::of_week(0), Some(LifeStage::ChildhoodAdolescence));
        assert_eq!(LifeStage::of_week(935), Some(LifeStage::ChildhoodAdolescence));
        assert_eq!(LifeStage::of_week(936), Some(LifeStage::YoungAdulthood));
        assert_eq!(LifeStage::of_week(3379), Some(LifeStage::MiddleAge));
        assert_eq!(LifeStage::of_week(4679), Some(LifeStage::Seniority));
        assert_eq!(LifeStage::of_week(TOTAL_WEEKS), None);
    }

    #[test]
    fn test_age_span_labels() {
        let spans: Vec<String> = LifeStage::ALL.iter().map(|s| s.age_span()).collect();
        assert_eq!(spans, vec!["0-17", "18-39", "40-64", "65-90"]);
    }

    #[test]
    fn test_weekday_name() {
        let locales = LocaleTable::from_value(json!({
            "weekdays": {
                "en": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
                "uz": ["Dushanba", "Seshanba", "Chorshanba", "Payshanba", "Juma", "Shanba", "Yakshanba"],
                "ru": []
            }
        }));
        let birth = date(2000, 1, 1);
        assert_eq!(weekday_name(birth, "en", &locales), "Saturday");
        assert_eq!(weekday_name(birth, "uz", &locales), "Shanba");
        assert_eq!(weekday_name(birth, "ru", &locales), "Saturday");
        assert_eq!(weekday_name(birth, "xx", &locales), "Saturday");
    }

    #[test]
    fn test_weekday_name_unknown_without_lists() {
        let locales = LocaleTable::from_value(json!({"weekdays": {"en": ["Monday"]}}));
        assert_eq!(weekday_name(date(2000, 1, 1), "en", &locales), UNKNOWN_WEEKDAY);
        assert_eq!(weekday_name(date(2000, 1, 1), "en", &LocaleTable::default()), UNKNOWN_WEEKDAY);
    }
}
