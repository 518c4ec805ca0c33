//! # Life Table
//!
//! Renders a "life calendar": 90 columns of years, 52 rows of weeks, one
//! cell per week of a 90-year horizon. Lived weeks are colored by life
//! stage, the current week is highlighted and the rest stay white. Title,
//! axes, legend and a quote come from localized string tables.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use life_table::i18n::Catalog;
//! use life_table::render::{FontSet, LifeTableRenderer, RenderRequest};
//!
//! # fn main() -> life_table::Result<()> {
//! let catalog = Catalog::load("locales.json".as_ref(), "quotes.json".as_ref())?;
//! let renderer = LifeTableRenderer::new(&catalog, FontSet::load("assets/NotoSans-Regular.ttf".as_ref()));
//! let birthdate = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
//! let image = renderer.render(
//!     &RenderRequest::new(birthdate, "en"),
//!     &mut rand::rngs::StdRng::seed_from_u64(7),
//! )?;
//! std::fs::write("life_table.png", image.png).unwrap();
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod birthdate;
pub mod calendar;
pub mod canvas;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod render;
pub mod summary;

pub use calendar::{weeks_passed, zodiac_sign, LifeStage, LifeStats, ZodiacSign};
pub use errors::{LifeTableError, Result};
pub use i18n::{Catalog, FallbackChain};
pub use render::{FontSet, LifeTableRenderer, RenderRequest, RenderedImage};
