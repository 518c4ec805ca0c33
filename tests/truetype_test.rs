//! Rendering with a real TrueType font.
//!
//! The font is looked up in `LIFE_TABLE_TEST_FONT`, `assets/` and a few
//! common system locations. When none is present the tests return early.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use life_table::canvas::{Canvas, Font};
use life_table::render::layout::{self, cell_origin, palette, week_index};
use life_table::render::{legend, quote};
use life_table::{Catalog, FallbackChain, FontSet, LifeTableRenderer, RenderRequest};

const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
];

fn truetype_font() -> Option<Font> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let candidates = std::env::var("LIFE_TABLE_TEST_FONT")
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .chain(std::iter::once(root.join("assets/NotoSans-Regular.ttf")))
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates.filter(|p| p.exists()) {
        let font = Font::load_or_builtin(&path);
        if !font.is_builtin() {
            return Some(font);
        }
    }
    eprintln!("no TrueType font found, skipping");
    None
}

fn catalog() -> Catalog {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    Catalog::load(&root.join("locales.json"), &root.join("quotes.json")).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn is_ink(canvas: &Canvas, x: u32, y: u32) -> bool {
    canvas.get_pixel(x, y).unwrap().to_rgb8().iter().all(|&c| c < 0xC0)
}

fn ink_in(canvas: &Canvas, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> Vec<(u32, u32)> {
    ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
        .filter(|&(x, y)| is_ink(canvas, x, y))
        .collect()
}

#[test]
fn test_truetype_render_places_every_element() {
    let Some(font) = truetype_font() else { return };
    let catalog = catalog();
    let fonts = FontSet::new(&font);
    let renderer = LifeTableRenderer::new(&catalog, fonts.clone());
    let grid_top = layout::MARGIN_TOP;
    let grid_bottom = layout::HEIGHT - layout::MARGIN_BOTTOM;

    for lang in ["en", "ru", "uz", "xx"] {
        let request = RenderRequest::new(date(2000, 1, 1), lang).as_of(date(2024, 1, 1));
        let painted = renderer.render_canvas(&request, &mut StdRng::seed_from_u64(3));
        let canvas = &painted.canvas;

        assert_eq!((canvas.width, canvas.height), (layout::WIDTH, layout::HEIGHT));
        assert_eq!(painted.weeks_passed, 1252);
        let (x, y) = cell_origin(24, 4);
        assert_eq!(week_index(24, 4), 1252);
        assert_eq!(
            canvas.get_pixel(x + 6, y + 6).unwrap().to_rgb8(),
            palette::current_week().to_rgb8()
        );

        // Title, centered above the x-axis label
        assert!(!ink_in(canvas, 500..1077, 25..70).is_empty(), "{lang}: no title");

        // Rotated y label sits left of the axis, within the grid's height
        let label = ink_in(canvas, 0..110, 0..layout::HEIGHT);
        assert!(!label.is_empty(), "{lang}: no y label");
        assert!(label.iter().all(|&(x, _)| x < layout::Y_AXIS_X - layout::Y_LABEL_GAP));
        assert!(label.iter().all(|&(_, y)| (grid_top..grid_bottom).contains(&y)));

        // Legend entries never pass the right margin
        let chain = FallbackChain::image(lang);
        let entries = legend::legend_entries(&catalog, &chain);
        let widths: Vec<f32> = entries
            .iter()
            .map(|e| fonts.legend.measure(&e.label).width)
            .collect();
        let right_limit = (layout::WIDTH - layout::MARGIN_RIGHT) as f32;
        let slots = legend::layout_legend(
            &widths,
            layout::MARGIN_LEFT as f32,
            right_limit,
            (layout::HEIGHT - layout::LEGEND_TOP_OFFSET) as f32,
        );
        assert_eq!(slots.last().unwrap().row + 1, painted.legend_rows);
        for (slot, width) in slots.iter().zip(&widths) {
            assert!(slot.right(*width) <= right_limit, "{lang}: legend overflows");
        }

        // Quote lines fit between the side margins
        let available = (layout::WIDTH - layout::MARGIN_LEFT - layout::MARGIN_RIGHT) as f32;
        assert!(!painted.quote_lines.is_empty());
        for line in &painted.quote_lines {
            assert!(fonts.quote.measure(line).width <= available, "{lang}: '{line}' too wide");
        }
    }
}

#[test]
fn test_truetype_long_quote_wraps_inside_margins() {
    let Some(font) = truetype_font() else { return };
    let face = FontSet::new(&font).quote;
    let available = (layout::WIDTH - layout::MARGIN_LEFT - layout::MARGIN_RIGHT) as f32;
    let text = "It is not that we have a short time to live, but that we waste a lot of it. \
                Life is long enough, and a sufficiently generous amount has been given to us \
                for the highest achievements if it were all well invested.";

    let max_chars = quote::max_chars_per_line(available, face.average_char_width());
    let lines = quote::wrap_quote(text, max_chars);

    assert!(lines.len() >= 2);
    for line in &lines {
        assert!(face.measure(line).width <= available, "'{line}' too wide");
    }
}
