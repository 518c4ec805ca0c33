//! Localized text that accompanies the life table image
//!
//! Templates come from the locale table and use `{name}` placeholders.
//! Missing keys show up as `_key_` in the output rather than failing.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::birthdate::format_short;
use crate::calendar::{localized_zodiac, weekday_name, zodiac_sign_of, LifeStats};
use crate::i18n::{Catalog, FallbackChain, DEFAULT_BOT_QUOTE};

const RULE: &str = "--------------------";

/// Substitute `{name}` placeholders; unknown placeholders are left as-is
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Birthdate spelled with the localized month name, e.g. `1 January 2000`
pub fn format_birthday(birthdate: NaiveDate, lang: &str, catalog: &Catalog) -> String {
    let months = catalog.locales.list("months", lang);
    let Some(month) = months.get(birthdate.month0() as usize) else {
        return format_short(birthdate);
    };

    let formatted = format!("{} {} {}", birthdate.day(), month, birthdate.year());
    if lang == "ru" {
        format!("{formatted} г.")
    } else {
        formatted
    }
}

/// Full caption sent with an on-demand table
pub fn table_caption<R: Rng + ?Sized>(
    stats: &LifeStats,
    lang: &str,
    catalog: &Catalog,
    rng: &mut R,
) -> String {
    let chain = FallbackChain::bot(lang);
    let text = |key: &str| catalog.text(&format!("table_text_details.{key}"), &chain);

    let zodiac = localized_zodiac(zodiac_sign_of(stats.birthdate), lang, &catalog.locales);
    let weekday = weekday_name(stats.birthdate, lang, &catalog.locales);
    let quote = catalog
        .quotes
        .pick(&FallbackChain::exact(lang), DEFAULT_BOT_QUOTE, rng);

    let weeks = stats.weeks.to_string();
    let days = group_thousands(u64::from(stats.days));
    let hours = group_thousands(stats.hours);
    let minutes = group_thousands(stats.minutes);
    let birthday = format_birthday(stats.birthdate, lang, catalog);

    [
        text("header"),
        fill_template(&text("weeks_passed"), &[("weeks", &weeks)]),
        String::new(),
        text("personal_info_header"),
        RULE.to_string(),
        fill_template(&text("birthday_line"), &[("birthday", &birthday)]),
        fill_template(&text("weekday_line"), &[("weekday", &weekday)]),
        fill_template(
            &text("zodiac_line"),
            &[("zodiac_name", &zodiac.name), ("zodiac_dates", &zodiac.dates)],
        ),
        String::new(),
        text("life_in_numbers_header"),
        RULE.to_string(),
        fill_template(&text("days_line"), &[("days", &days)]),
        fill_template(&text("hours_line"), &[("hours", &hours)]),
        fill_template(&text("minutes_line"), &[("minutes", &minutes)]),
        String::new(),
        format!("{}: {}", text("wisdom_prefix"), quote),
    ]
    .join("\n")
}

/// Caption of the periodic update; a quote is appended when the language has one
pub fn weekly_caption<R: Rng + ?Sized>(
    weeks_passed: u32,
    lang: &str,
    catalog: &Catalog,
    rng: &mut R,
) -> String {
    let chain = FallbackChain::bot(lang);
    let weeks = weeks_passed.to_string();
    let mut caption = fill_template(
        &catalog.text("table_caption", &chain),
        &[("weeks_passed", &weeks)],
    );

    let quote_lang = FallbackChain::exact(lang);
    if catalog.quotes.candidates(&quote_lang).is_some() {
        let quote = catalog.quotes.pick(&quote_lang, DEFAULT_BOT_QUOTE, rng);
        let title = catalog.text("weekly_update.quote_of_the_week", &chain);
        caption.push_str(&format!("\n\n{title}:\n{quote}"));
    }
    caption
}

/// Confirmation after a birthdate is accepted: date, weekday, zodiac sign
pub fn birthday_saved_message(birthdate: NaiveDate, lang: &str, catalog: &Catalog) -> String {
    let chain = FallbackChain::bot(lang);
    let weekday = weekday_name(birthdate, lang, &catalog.locales);
    let zodiac = localized_zodiac(zodiac_sign_of(birthdate), lang, &catalog.locales);
    let short = format_short(birthdate);

    format!(
        "{}\n\n{}\n{}",
        fill_template(&catalog.text("birthday_saved", &chain), &[("birthday", &short)]),
        fill_template(&catalog.text("birthday_weekday_info", &chain), &[("weekday", &weekday)]),
        fill_template(&catalog.text("zodiac_info", &chain), &[("zodiac_sign", &zodiac.name)]),
    )
}
