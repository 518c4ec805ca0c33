//! Western zodiac lookup

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::i18n::LocaleTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// For each month: (sign before the cusp, first day of the next sign, next sign)
const CUSPS: [(ZodiacSign, u32, ZodiacSign); 12] = [
    (ZodiacSign::Capricorn, 20, ZodiacSign::Aquarius),
    (ZodiacSign::Aquarius, 19, ZodiacSign::Pisces),
    (ZodiacSign::Pisces, 21, ZodiacSign::Aries),
    (ZodiacSign::Aries, 20, ZodiacSign::Taurus),
    (ZodiacSign::Taurus, 21, ZodiacSign::Gemini),
    (ZodiacSign::Gemini, 21, ZodiacSign::Cancer),
    (ZodiacSign::Cancer, 23, ZodiacSign::Leo),
    (ZodiacSign::Leo, 23, ZodiacSign::Virgo),
    (ZodiacSign::Virgo, 23, ZodiacSign::Libra),
    (ZodiacSign::Libra, 23, ZodiacSign::Scorpio),
    (ZodiacSign::Scorpio, 22, ZodiacSign::Sagittarius),
    (ZodiacSign::Sagittarius, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Key used under `zodiac_signs` in the locale table
    pub const fn key(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Sign for a day of month and month number
///
/// Months outside 1..=12 are clamped, so the function is total.
pub fn zodiac_sign(day: u32, month: u32) -> ZodiacSign {
    let (before, cusp, after) = CUSPS[(month.clamp(1, 12) - 1) as usize];
    if day < cusp {
        before
    } else {
        after
    }
}

pub fn zodiac_sign_of(date: NaiveDate) -> ZodiacSign {
    zodiac_sign(date.day(), date.month())
}

/// Display name and date span of a sign in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedZodiac {
    pub sign: ZodiacSign,
    pub name: String,
    pub dates: String,
}

/// Reads `zodiac_signs.<key>.name.<lang>` (falls back to the key) and
/// `zodiac_signs.<key>.dates` (falls back to an empty string)
pub fn localized_zodiac(sign: ZodiacSign, lang: &str, locales: &LocaleTable) -> LocalizedZodiac {
    let entry = locales.node(&format!("zodiac_signs.{}", sign.key()));
    let name = entry
        .and_then(|e| e.get("name"))
        .and_then(|names| names.get(lang))
        .and_then(Value::as_str)
        .unwrap_or(sign.key())
        .to_string();
    let dates = entry
        .and_then(|e| e.get("dates"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    LocalizedZodiac { sign, name, dates }
}
