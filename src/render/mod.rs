//! Life table renderer
//!
//! Paints the 90 x 52 week grid with its title, axes, legend, quote and
//! footer onto a fresh canvas and encodes it as PNG. A renderer only borrows
//! the catalog and holds a shared read-only font, so one instance can serve
//! many threads; every call allocates its own canvas.

pub mod layout;
pub mod legend;
pub mod quote;

use std::path::Path;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, instrument};

use crate::calendar::weeks_passed;
use crate::canvas::{Anchor, Canvas, Color, Font, FontFace, Line, Point, Polygon, Rectangle};
use crate::errors::Result;
use crate::i18n::{Catalog, FallbackChain, DEFAULT_IMAGE_QUOTE};
use layout::{cell_origin, cells, font_size, palette, week_index, CellKind};

/// What to draw: whose life, as of which day, in which language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub birthdate: NaiveDate,
    pub today: NaiveDate,
    pub lang: String,
}

impl RenderRequest {
    /// Request for the local calendar day
    pub fn new(birthdate: NaiveDate, lang: impl Into<String>) -> Self {
        Self {
            birthdate,
            today: chrono::Local::now().date_naive(),
            lang: lang.into(),
        }
    }

    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// Encoded image handed back to the caller
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub weeks_passed: u32,
    /// Quote printed under the legend
    pub quote: String,
}

/// Painted canvas before encoding
#[derive(Debug, Clone)]
pub struct PaintedTable {
    pub canvas: Canvas,
    pub weeks_passed: u32,
    pub quote: String,
    pub quote_lines: Vec<String>,
    pub legend_rows: usize,
}

/// One typeface at the six sizes the image uses
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: FontFace,
    pub axis: FontFace,
    pub tick: FontFace,
    pub legend: FontFace,
    pub quote: FontFace,
    pub footer: FontFace,
}

impl FontSet {
    pub fn new(font: &Font) -> Self {
        Self {
            title: font.at_size(font_size::TITLE),
            axis: font.at_size(font_size::AXIS),
            tick: font.at_size(font_size::TICK),
            legend: font.at_size(font_size::LEGEND),
            quote: font.at_size(font_size::QUOTE),
            footer: font.at_size(font_size::FOOTER),
        }
    }

    /// Load a font file; unreadable files fall back to the built-in font
    pub fn load(path: &Path) -> Self {
        Self::new(&Font::load_or_builtin(path))
    }

    pub fn builtin() -> Self {
        Self::new(&Font::Builtin)
    }
}

pub struct LifeTableRenderer<'a> {
    catalog: &'a Catalog,
    fonts: FontSet,
    footer: String,
}

impl<'a> LifeTableRenderer<'a> {
    pub fn new(catalog: &'a Catalog, fonts: FontSet) -> Self {
        Self {
            catalog,
            fonts,
            footer: layout::DEFAULT_FOOTER.to_string(),
        }
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Render and encode as PNG
    pub fn render<R: Rng + ?Sized>(&self, request: &RenderRequest, rng: &mut R) -> Result<RenderedImage> {
        let painted = self.render_canvas(request, rng);
        let png = painted.canvas.encode_png()?;
        debug!("Encoded life table: {} bytes", png.len());

        Ok(RenderedImage {
            png,
            width: painted.canvas.width,
            height: painted.canvas.height,
            weeks_passed: painted.weeks_passed,
            quote: painted.quote,
        })
    }

    /// Paint every element; never fails
    #[instrument(level = "debug", skip(self, rng), fields(lang = %request.lang))]
    pub fn render_canvas<R: Rng + ?Sized>(&self, request: &RenderRequest, rng: &mut R) -> PaintedTable {
        let chain = FallbackChain::image(&request.lang);
        let weeks = weeks_passed(request.birthdate, request.today);
        debug!("Rendering life table: {} weeks passed", weeks);

        let mut canvas = Canvas::with_background(layout::WIDTH, layout::HEIGHT, Color::WHITE);

        self.draw_title(&mut canvas, &chain);
        self.draw_x_axis(&mut canvas, &chain);
        self.draw_y_axis(&mut canvas, &chain);
        draw_grid(&mut canvas, weeks);
        let legend_rows = self.draw_legend(&mut canvas, &chain);

        let quote = self.catalog.quotes.pick(&chain, DEFAULT_IMAGE_QUOTE, rng);
        let quote_lines = self.draw_quote(&mut canvas, &quote);
        self.draw_footer(&mut canvas);

        PaintedTable {
            canvas,
            weeks_passed: weeks,
            quote,
            quote_lines,
            legend_rows,
        }
    }

    fn draw_title(&self, canvas: &mut Canvas, chain: &FallbackChain<'_>) {
        let title = self.catalog.text("image_title", chain);
        let width = self.fonts.title.measure(&title).width;
        self.fonts.title.draw(
            canvas,
            &title,
            (layout::WIDTH as f32 - width) / 2.0,
            layout::TITLE_Y,
            Anchor::LeftTop,
            palette::text(),
        );
    }

    fn draw_x_axis(&self, canvas: &mut Canvas, chain: &FallbackChain<'_>) {
        let y = f64::from(layout::X_AXIS_Y);
        let start = f64::from(layout::MARGIN_LEFT);
        let end = f64::from(layout::WIDTH - layout::MARGIN_RIGHT);

        canvas.draw(
            &Line::new(Point::new(start, y), Point::new(end, y), palette::arrow())
                .with_width(layout::AXIS_WIDTH),
        );
        canvas.draw(&Polygon::new(
            vec![
                Point::new(end, y - layout::ARROW_HALF_WIDTH),
                Point::new(end, y + layout::ARROW_HALF_WIDTH),
                Point::new(end + layout::ARROW_LENGTH, y),
            ],
            palette::arrow(),
        ));

        self.fonts.axis.draw(
            canvas,
            &self.catalog.text("x_axis_label", chain),
            layout::MARGIN_LEFT as f32,
            (layout::X_AXIS_Y - 50) as f32,
            Anchor::LeftTop,
            palette::text(),
        );

        let pitch = layout::COLUMN_PITCH as f32;
        for year in (layout::TICK_STEP..=layout::COLUMNS).step_by(layout::TICK_STEP as usize) {
            let x = layout::MARGIN_LEFT as f32 + year as f32 * pitch - pitch / 2.0;
            self.fonts.tick.draw(
                canvas,
                &year.to_string(),
                x,
                (layout::X_AXIS_Y + 10) as f32,
                Anchor::MiddleTop,
                palette::text(),
            );
        }
    }

    fn draw_y_axis(&self, canvas: &mut Canvas, chain: &FallbackChain<'_>) {
        let x = f64::from(layout::Y_AXIS_X);
        let start = f64::from(layout::MARGIN_TOP);
        let end = f64::from(layout::HEIGHT - layout::MARGIN_BOTTOM);

        canvas.draw(
            &Line::new(Point::new(x, start), Point::new(x, end), palette::arrow())
                .with_width(layout::AXIS_WIDTH),
        );
        canvas.draw(&Polygon::new(
            vec![
                Point::new(x - layout::ARROW_HALF_WIDTH, end),
                Point::new(x + layout::ARROW_HALF_WIDTH, end),
                Point::new(x, end + layout::ARROW_LENGTH),
            ],
            palette::arrow(),
        ));

        // Label is drawn horizontally on its own layer, then turned upright
        let label = self.catalog.text("y_axis_label", chain);
        let rotated = self.fonts.axis.render_layer(&label, palette::text()).rotated_ccw();
        let grid_height = layout::HEIGHT - layout::MARGIN_TOP - layout::MARGIN_BOTTOM;
        let paste_x = i64::from(layout::Y_AXIS_X) - i64::from(rotated.width) - i64::from(layout::Y_LABEL_GAP);
        let paste_y = i64::from(layout::MARGIN_TOP + grid_height / 2) - i64::from(rotated.height / 2);
        canvas.composite(&rotated, paste_x, paste_y);

        let pitch = layout::ROW_PITCH as f32;
        for week in (layout::TICK_STEP..=layout::ROWS).step_by(layout::TICK_STEP as usize) {
            let y = layout::MARGIN_TOP as f32 + week as f32 * pitch - pitch / 2.0;
            self.fonts.tick.draw(
                canvas,
                &week.to_string(),
                (layout::Y_AXIS_X + 15) as f32,
                y,
                Anchor::LeftMiddle,
                palette::text(),
            );
        }
    }

    /// Returns the number of legend rows used
    fn draw_legend(&self, canvas: &mut Canvas, chain: &FallbackChain<'_>) -> usize {
        let entries = legend::legend_entries(self.catalog, chain);
        let widths: Vec<f32> = entries
            .iter()
            .map(|e| self.fonts.legend.measure(&e.label).width)
            .collect();
        let slots = legend::layout_legend(
            &widths,
            layout::MARGIN_LEFT as f32,
            (layout::WIDTH - layout::MARGIN_RIGHT) as f32,
            (layout::HEIGHT - layout::LEGEND_TOP_OFFSET) as f32,
        );

        let swatch = i64::from(layout::LEGEND_SWATCH);
        for (entry, slot) in entries.iter().zip(&slots) {
            let (x, y) = (slot.swatch_x.round() as i64, slot.y.round() as i64);
            canvas.draw(
                &Rectangle::new(x, y, x + swatch, y + swatch)
                    .with_fill(entry.color)
                    .with_outline(palette::outline()),
            );
            self.fonts.legend.draw(
                canvas,
                &entry.label,
                slot.label_x,
                slot.y + layout::LEGEND_SWATCH as f32 / 2.0,
                Anchor::LeftMiddle,
                palette::text(),
            );
        }

        slots.last().map_or(0, |s| s.row + 1)
    }

    fn draw_quote(&self, canvas: &mut Canvas, text: &str) -> Vec<String> {
        let available = (layout::WIDTH - layout::MARGIN_LEFT - layout::MARGIN_RIGHT) as f32;
        let max_chars = quote::max_chars_per_line(available, self.fonts.quote.average_char_width());
        let lines = quote::wrap_quote(text, max_chars);

        let top = (layout::HEIGHT - layout::QUOTE_TOP_OFFSET) as f32;
        let pitch = self.fonts.quote.size() + layout::QUOTE_LINE_SPACING;
        for (i, line) in lines.iter().enumerate() {
            let width = self.fonts.quote.measure(line).width;
            self.fonts.quote.draw(
                canvas,
                line,
                (layout::WIDTH as f32 - width) / 2.0,
                top + i as f32 * pitch,
                Anchor::LeftTop,
                palette::text(),
            );
        }
        lines
    }

    fn draw_footer(&self, canvas: &mut Canvas) {
        let width = self.fonts.footer.measure(&self.footer).width;
        self.fonts.footer.draw(
            canvas,
            &self.footer,
            (layout::WIDTH - layout::MARGIN_RIGHT) as f32 - width,
            (layout::HEIGHT - layout::FOOTER_BOTTOM_OFFSET) as f32,
            Anchor::LeftTop,
            palette::footer(),
        );
    }
}

/// Fill every week cell, column by column
fn draw_grid(canvas: &mut Canvas, weeks_passed: u32) {
    let size = i64::from(layout::CELL_SIZE);
    for (year, week) in cells() {
        let (x, y) = cell_origin(year, week);
        let (x, y) = (i64::from(x), i64::from(y));
        let kind = CellKind::classify(week_index(year, week), weeks_passed);
        canvas.draw(
            &Rectangle::new(x, y, x + size, y + size)
                .with_fill(kind.color())
                .with_outline(palette::outline()),
        );
    }
}
