// src/layout/rows.rs
//! Row packing for chip-like items: contact fields, any short label:value
//! boxes that flow left-to-right and wrap onto new rows.
//!
//! Two passes, deliberately separate: greedy packing first, then gap
//! justification per row. Packing decisions must not depend on the eventual
//! gap distribution.

use crate::layout::cursor::LayoutCursor;

/// A pre-measured, self-drawing box. The closure receives the cursor and the
/// chip's origin (left edge, top edge) once the row placing it is drawn.
pub struct Chip {
    pub width: f32,
    pub height: f32,
    pub draw: Box<dyn FnOnce(&mut LayoutCursor, f32, f32)>,
}

impl std::fmt::Debug for Chip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chip")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// A chip placed within its row, `x` relative to the row's left edge.
#[derive(Debug)]
pub struct PlacedChip {
    pub x: f32,
    pub chip: Chip,
}

/// One packed row. Height is the tallest chip's height.
#[derive(Debug)]
pub struct Row {
    pub items: Vec<PlacedChip>,
    pub height: f32,
}

impl Row {
    /// Draws the row at the cursor's current position and advances past it.
    pub fn draw(self, cursor: &mut LayoutCursor) {
        cursor.ensure_space(self.height);
        let top = cursor.y();
        let left = cursor.content_left();
        let height = self.height;
        for item in self.items {
            (item.chip.draw)(cursor, left + item.x, top);
        }
        cursor.advance(height);
    }
}

/// Greedily packs `chips` into rows no wider than `page_width`, then
/// justifies each multi-chip row so its items span the full width.
///
/// A chip joins the current row while the row's width plus `min_gap` plus
/// the chip still fits. Justification divides the leftover width evenly
/// among the row's gaps, clamped to at least `min_gap`; a single-chip row
/// stays left-aligned.
pub fn pack(chips: Vec<Chip>, page_width: f32, min_gap: f32) -> Vec<Row> {
    let mut rows: Vec<Vec<Chip>> = Vec::new();
    let mut current: Vec<Chip> = Vec::new();
    let mut current_width = 0.0f32;

    for chip in chips {
        if current.is_empty() {
            current_width = chip.width;
            current.push(chip);
        } else if current_width + chip.width + min_gap <= page_width {
            current_width += chip.width + min_gap;
            current.push(chip);
        } else {
            rows.push(std::mem::take(&mut current));
            current_width = chip.width;
            current.push(chip);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows.into_iter().map(|row| justify(row, page_width, min_gap)).collect()
}

fn justify(chips: Vec<Chip>, page_width: f32, min_gap: f32) -> Row {
    let height = chips.iter().map(|c| c.height).fold(0.0f32, f32::max);
    let total_width: f32 = chips.iter().map(|c| c.width).sum();

    let gap = if chips.len() > 1 {
        let leftover = page_width - total_width;
        (leftover / (chips.len() - 1) as f32).max(min_gap)
    } else {
        0.0
    };

    let mut x = 0.0f32;
    let items = chips
        .into_iter()
        .map(|chip| {
            let placed = PlacedChip { x, chip };
            x += placed.chip.width + gap;
            placed
        })
        .collect();

    Row { items, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip(width: f32) -> Chip {
        Chip {
            width,
            height: 11.0,
            draw: Box::new(|_, _, _| {}),
        }
    }

    fn chips(widths: &[f32]) -> Vec<Chip> {
        widths.iter().copied().map(chip).collect()
    }

    #[test]
    fn single_chip_row_is_left_aligned() {
        let rows = pack(chips(&[180.0]), 500.0, 20.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].items.len(), 1);
        assert_eq!(rows[0].items[0].x, 0.0);
    }

    #[test]
    fn four_chips_split_into_expected_rows() {
        // 120+80 (+gap 20) = 220 fits in 300; adding 150 would exceed.
        let rows = pack(chips(&[120.0, 80.0, 150.0, 60.0]), 300.0, 20.0);
        assert_eq!(rows.len(), 2);
        let row_widths: Vec<Vec<f32>> = rows
            .iter()
            .map(|r| r.items.iter().map(|i| i.chip.width).collect())
            .collect();
        assert_eq!(row_widths[0], vec![120.0, 80.0]);
        assert_eq!(row_widths[1], vec![150.0, 60.0]);
    }

    #[test]
    fn no_row_exceeds_page_width() {
        let widths = [90.0, 45.0, 130.0, 60.0, 75.0, 110.0, 40.0, 85.0];
        let page_width = 280.0;
        let min_gap = 15.0;
        let rows = pack(chips(&widths), page_width, min_gap);
        for row in &rows {
            let total: f32 = row.items.iter().map(|i| i.chip.width).sum();
            let with_gaps = total + min_gap * (row.items.len().saturating_sub(1)) as f32;
            assert!(with_gaps <= page_width, "row too wide: {with_gaps}");
        }
    }

    #[test]
    fn justified_row_spans_exactly_the_page_width() {
        let rows = pack(chips(&[120.0, 80.0]), 300.0, 20.0);
        let last = rows[0].items.last().unwrap();
        assert!((last.x + last.chip.width - 300.0).abs() < 1e-4);
    }

    #[test]
    fn justified_gaps_are_even() {
        let rows = pack(chips(&[50.0, 50.0, 50.0]), 350.0, 10.0);
        assert_eq!(rows.len(), 1);
        let items = &rows[0].items;
        let gap1 = items[1].x - (items[0].x + items[0].chip.width);
        let gap2 = items[2].x - (items[1].x + items[1].chip.width);
        assert!((gap1 - gap2).abs() < 1e-4);
        assert!((gap1 - 100.0).abs() < 1e-4);
    }

    #[test]
    fn gap_never_shrinks_below_min_gap() {
        // A chip wider than the page still lands in a row; the following row
        // is dense but its gap stays clamped.
        let rows = pack(chips(&[400.0, 140.0, 139.0]), 300.0, 12.0);
        for row in &rows {
            for pair in row.items.windows(2) {
                let gap = pair[1].x - (pair[0].x + pair[0].chip.width);
                assert!(gap >= 12.0 - 1e-4, "gap {gap} below minimum");
            }
        }
    }

    #[test]
    fn row_height_is_the_tallest_chip() {
        let mut items = chips(&[40.0, 40.0]);
        items[1].height = 24.0;
        let rows = pack(items, 300.0, 10.0);
        assert_eq!(rows[0].height, 24.0);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(pack(Vec::new(), 300.0, 10.0).is_empty());
    }
}
