//! Captions built from the bundled string tables.

use std::path::Path;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use life_table::calendar::{weekday_name, zodiac_sign_of, LifeStats};
use life_table::{birthdate, summary, Catalog, ZodiacSign};

fn catalog() -> Catalog {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    Catalog::load(&root.join("locales.json"), &root.join("quotes.json")).unwrap()
}

fn reference_stats() -> LifeStats {
    LifeStats::compute(
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

#[test]
fn test_reference_birthdate_facts() {
    let catalog = catalog();
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let born = birthdate::parse("01.01.2000", today).unwrap();
    let stats = LifeStats::compute(born, today);

    assert_eq!(stats.days, 8766);
    assert_eq!(stats.weeks, 1252);
    assert_eq!(zodiac_sign_of(born), ZodiacSign::Capricorn);
    assert_eq!(weekday_name(born, "en", &catalog.locales), "Saturday");
    assert_eq!(weekday_name(born, "ru", &catalog.locales), "Суббота");
}

#[test]
fn test_russian_caption() {
    let catalog = catalog();
    let caption = summary::table_caption(&reference_stats(), "ru", &catalog, &mut StdRng::seed_from_u64(5));

    assert!(caption.contains("Прожито недель: 1252"));
    assert!(caption.contains("1 января 2000 г."));
    assert!(caption.contains("Козерог (22.12 - 19.01)"));
    assert!(caption.contains("Дней: 8,766"));
    assert!(!caption.contains('_'));
}

#[test]
fn test_unknown_language_caption_uses_uzbek() {
    let catalog = catalog();
    let caption = summary::table_caption(&reference_stats(), "xx", &catalog, &mut StdRng::seed_from_u64(5));

    assert!(caption.starts_with("Hayot jadvalingiz"));
    // Labels fall back to Uzbek, the quote does not
    assert!(caption.ends_with("Hikmat: -"));
}

#[test]
fn test_weekly_caption_with_quote() {
    let catalog = catalog();
    let caption = summary::weekly_caption(1300, "en", &catalog, &mut StdRng::seed_from_u64(1));
    assert!(caption.starts_with("Here is your life table. 1300 weeks lived."));
    assert!(caption.contains("\n\nQuote of the week:\n"));
}
