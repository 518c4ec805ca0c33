//! Fixed geometry and palette of the life table image

use crate::calendar::{LifeStage, HORIZON_YEARS, TOTAL_WEEKS, WEEKS_PER_YEAR};
use crate::canvas::Color;

pub const COLUMNS: u32 = HORIZON_YEARS;
pub const ROWS: u32 = WEEKS_PER_YEAR;

pub const CELL_SIZE: u32 = 12;
pub const CELL_GAP_X: u32 = 3;
pub const CELL_GAP_Y: u32 = 4;

pub const MARGIN_TOP: u32 = 170;
pub const MARGIN_BOTTOM: u32 = 220;
pub const MARGIN_LEFT: u32 = 180;
pub const MARGIN_RIGHT: u32 = 50;

/// Horizontal distance between column origins
pub const COLUMN_PITCH: u32 = CELL_SIZE + CELL_GAP_X;
/// Vertical distance between row origins
pub const ROW_PITCH: u32 = CELL_SIZE + CELL_GAP_Y;

pub const WIDTH: u32 = MARGIN_LEFT + COLUMNS * COLUMN_PITCH - CELL_GAP_X + MARGIN_RIGHT;
pub const HEIGHT: u32 = MARGIN_TOP + ROWS * ROW_PITCH - CELL_GAP_Y + MARGIN_BOTTOM;

pub const TITLE_Y: f32 = 30.0;
pub const X_AXIS_Y: u32 = 120;
pub const Y_AXIS_X: u32 = 120;
pub const AXIS_WIDTH: f64 = 2.0;
pub const ARROW_HALF_WIDTH: f64 = 6.0;
pub const ARROW_LENGTH: f64 = 10.0;
pub const TICK_STEP: u32 = 5;
/// Gap between the rotated Y label and the Y axis
pub const Y_LABEL_GAP: u32 = 50;

pub const LEGEND_TOP_OFFSET: u32 = 150;
pub const LEGEND_SWATCH: u32 = 20;
pub const LEGEND_LABEL_GAP: f32 = 10.0;
pub const LEGEND_ENTRY_GAP: f32 = 30.0;
/// Extra room required past a label before it is allowed on the current row
pub const LEGEND_WRAP_SLACK: f32 = 40.0;
pub const LEGEND_ROW_PITCH: f32 = 35.0;

pub const QUOTE_TOP_OFFSET: u32 = 85;
pub const QUOTE_LINE_SPACING: f32 = 5.0;
pub const FOOTER_BOTTOM_OFFSET: u32 = 30;
pub const DEFAULT_FOOTER: &str = "t.me/life_table_time_bot";

/// Pixel sizes of the text roles
pub mod font_size {
    pub const TITLE: f32 = 40.0;
    pub const AXIS: f32 = 30.0;
    pub const TICK: f32 = 22.0;
    pub const LEGEND: f32 = 24.0;
    pub const QUOTE: f32 = 28.0;
    pub const FOOTER: f32 = 20.0;
}

pub mod palette {
    use crate::canvas::Color;

    pub fn text() -> Color {
        Color::from_hex(0x33_33_33)
    }
    pub fn outline() -> Color {
        Color::from_hex(0xCC_CC_CC)
    }
    pub fn arrow() -> Color {
        Color::from_hex(0x00_00_00)
    }
    pub fn footer() -> Color {
        Color::from_hex(0xAA_AA_AA)
    }
    pub fn current_week() -> Color {
        Color::from_hex(0xFF_45_00)
    }
    pub fn future() -> Color {
        Color::from_hex(0xFF_FF_FF)
    }
}

impl LifeStage {
    /// Fill color of lived weeks in this stage
    pub fn color(self) -> Color {
        match self {
            LifeStage::ChildhoodAdolescence => Color::from_hex(0x89_CF_F0),
            LifeStage::YoungAdulthood => Color::from_hex(0x90_EE_90),
            LifeStage::MiddleAge => Color::from_hex(0xFF_D7_00),
            LifeStage::Seniority => Color::from_hex(0xDA_70_D6),
        }
    }
}

/// How one grid cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Lived(LifeStage),
    Current,
    Future,
}

impl CellKind {
    /// Classify week `index` given the number of completed weeks
    pub fn classify(index: u32, weeks_passed: u32) -> Self {
        if index == weeks_passed {
            return CellKind::Current;
        }
        if index < weeks_passed {
            if let Some(stage) = LifeStage::of_week(index) {
                return CellKind::Lived(stage);
            }
        }
        CellKind::Future
    }

    pub fn color(self) -> Color {
        match self {
            CellKind::Lived(stage) => stage.color(),
            CellKind::Current => palette::current_week(),
            CellKind::Future => palette::future(),
        }
    }
}

/// Week index of a grid cell
pub const fn week_index(year: u32, week_of_year: u32) -> u32 {
    year * WEEKS_PER_YEAR + week_of_year
}

/// Top-left pixel of a grid cell
pub const fn cell_origin(year: u32, week_of_year: u32) -> (u32, u32) {
    (
        MARGIN_LEFT + year * COLUMN_PITCH,
        MARGIN_TOP + week_of_year * ROW_PITCH,
    )
}

/// All cells, column by column
pub fn cells() -> impl Iterator<Item = (u32, u32)> {
    (0..COLUMNS).flat_map(|year| (0..ROWS).map(move |week| (year, week)))
}

const _: () = assert!(COLUMNS * ROWS == TOTAL_WEEKS);
