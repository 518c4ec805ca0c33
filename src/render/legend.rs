//! Legend entries and their first-fit row layout

use super::layout::{
    palette, LEGEND_ENTRY_GAP, LEGEND_LABEL_GAP, LEGEND_ROW_PITCH, LEGEND_SWATCH,
    LEGEND_WRAP_SLACK,
};
use crate::calendar::LifeStage;
use crate::canvas::Color;
use crate::i18n::{Catalog, FallbackChain};

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Where one entry lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSlot {
    pub swatch_x: f32,
    pub label_x: f32,
    pub y: f32,
    pub row: usize,
}

impl LegendSlot {
    /// Right edge of the label
    pub fn right(&self, label_width: f32) -> f32 {
        self.label_x + label_width
    }
}

/// The six legend entries: four life stages, current week, future
pub fn legend_entries(catalog: &Catalog, chain: &FallbackChain<'_>) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = LifeStage::ALL
        .iter()
        .map(|stage| LegendEntry {
            label: format!("{} ({})", stage.age_span(), catalog.text(stage.legend_key(), chain)),
            color: stage.color(),
        })
        .collect();

    entries.push(LegendEntry {
        label: catalog.text("legend_current", chain),
        color: palette::current_week(),
    });
    entries.push(LegendEntry {
        label: catalog.text("legend_future", chain),
        color: palette::future(),
    });
    entries
}

/// Greedy left-to-right placement
///
/// An entry moves to a new row when `x + label_width + slack` would pass
/// `right_limit`. Rows are never rebalanced. An entry that starts a row stays
/// there even when it alone is too wide.
pub fn layout_legend(label_widths: &[f32], left: f32, right_limit: f32, top: f32) -> Vec<LegendSlot> {
    let mut slots = Vec::with_capacity(label_widths.len());
    let mut x = left;
    let mut y = top;
    let mut row = 0;

    for &width in label_widths {
        if x > left && x + width + LEGEND_WRAP_SLACK > right_limit {
            x = left;
            y += LEGEND_ROW_PITCH;
            row += 1;
        }
        let swatch_x = x;
        x += LEGEND_SWATCH as f32 + LEGEND_LABEL_GAP;
        slots.push(LegendSlot {
            swatch_x,
            label_x: x,
            y,
            row,
        });
        x += width + LEGEND_ENTRY_GAP;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleTable, QuoteTable};
    use serde_json::json;

    #[test]
    fn test_single_row_when_everything_fits() {
        let slots = layout_legend(&[50.0, 50.0, 50.0], 0.0, 1000.0, 10.0);
        assert!(slots.iter().all(|s| s.row == 0 && s.y == 10.0));
        assert_eq!(slots[0].swatch_x, 0.0);
        assert_eq!(slots[0].label_x, 30.0);
        // 30 (swatch + gap) + 50 (label) + 30 (gap)
        assert_eq!(slots[1].swatch_x, 110.0);
    }

    #[test]
    fn test_wraps_into_rows_that_fit() {
        let widths = [300.0, 300.0, 300.0, 300.0, 120.0, 90.0];
        let (left, right_limit) = (180.0, 1527.0);
        let slots = layout_legend(&widths, left, right_limit, 1068.0);

        let rows = slots.iter().map(|s| s.row).max().unwrap() + 1;
        assert!(rows >= 2);
        for (slot, width) in slots.iter().zip(widths) {
            assert!(slot.swatch_x >= left);
            assert!(slot.right(width) <= right_limit);
            assert_eq!(slot.y, 1068.0 + slot.row as f32 * LEGEND_ROW_PITCH);
        }
        // Wrapped rows restart at the left margin
        let first_of_row_two = slots.iter().find(|s| s.row == 1).unwrap();
        assert_eq!(first_of_row_two.swatch_x, left);
    }

    #[test]
    fn test_is_first_fit_not_rebalanced() {
        // The third entry would fit after the first one, but placement only
        // ever moves forward.
        let slots = layout_legend(&[400.0, 400.0, 5.0], 0.0, 510.0, 0.0);
        assert_eq!(slots.iter().map(|s| s.row).collect::<Vec<_>>(), vec![0, 1, 1]);
    }

    #[test]
    fn test_oversized_entry_does_not_leave_empty_row() {
        let slots = layout_legend(&[900.0, 10.0], 0.0, 500.0, 0.0);
        assert_eq!(slots[0].row, 0);
        assert_eq!(slots[1].row, 1);
    }

    #[test]
    fn test_entries_localized_with_fallback() {
        let locales = LocaleTable::from_value(json!({
            "legend_childhood_adolescence": {"en": "Childhood", "uz": "Bolalik"},
            "legend_young_adulthood": {"en": "Youth"},
            "legend_current": {"en": "This week"}
        }));
        let catalog = Catalog::new(locales, QuoteTable::default());
        let entries = legend_entries(&catalog, &FallbackChain::image("uz"));

        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].label, "0-17 (Bolalik)");
        assert_eq!(entries[1].label, "18-39 (Youth)");
        assert_eq!(entries[2].label, "40-64 (_legend_middle_age_)");
        assert_eq!(entries[4].label, "This week");
        assert_eq!(entries[5].label, "_legend_future_");
        assert_eq!(entries[4].color, palette::current_week());
    }
}
