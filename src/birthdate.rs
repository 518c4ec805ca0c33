//! Birthdate text parsing for callers of the renderer

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::{LifeTableError, Result};

/// Accepted layouts, tried in order. Day-first wins over month-first, so
/// `03/04/1990` is 3 April.
pub const ACCEPTED_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%m/%d/%Y"];

/// Parse a birthdate and reject days after `today`
pub fn parse(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let birthdate = ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| LifeTableError::InvalidBirthdate {
            input: Arc::new(trimmed.to_string()),
        })?;

    if birthdate > today {
        return Err(LifeTableError::BirthdateInFuture { birthdate, today });
    }

    debug!("Parsed birthdate {} from '{}'", birthdate, trimmed);
    Ok(birthdate)
}

/// Display form stored back to the user, `DD.MM.YYYY`
pub fn format_short(birthdate: NaiveDate) -> String {
    birthdate.format("%d.%m.%Y").to_string()
}
