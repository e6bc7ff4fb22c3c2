//! Visible-range calculation for the virtualized grid.
//!
//! The window is centered on the row nearest the vertical midpoint of the
//! viewport and extends a fixed number of rows in each direction. This is
//! deliberately coarse: it only changes when the midpoint crosses a row-pitch
//! bucket, is tolerant of row-height estimation error, and needs no per-pixel
//! recomputation.

/// Rows kept mounted above and below the center row (window of 7 rows total).
pub const HALF_WINDOW_ROWS: i64 = 3;

/// Inclusive row-index window that should be mounted.
///
/// Bounds are signed and unclamped: `start` may be negative and `end` may
/// exceed the data's row count. Consumers clamp when mapping rows to item
/// indices, keeping this layer in raw row arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: i64,
    pub end: i64,
}

impl Default for VisibleRange {
    fn default() -> Self {
        // Value before the first computation.
        Self { start: 0, end: 0 }
    }
}

impl VisibleRange {
    /// Intersects the window with `[0, rows)`, returning inclusive row
    /// bounds, or None when the window misses the data entirely.
    pub fn clamp_to_rows(&self, rows: usize) -> Option<(usize, usize)> {
        if rows == 0 || self.end < 0 {
            return None;
        }
        let last_row = (rows - 1) as i64;
        if self.start > last_row {
            return None;
        }
        let start = self.start.max(0) as usize;
        let end = self.end.min(last_row) as usize;
        Some((start, end))
    }

    /// Item-index window covered by the clamped rows of this range.
    pub fn item_window(&self, rows: usize, columns: usize, item_count: usize) -> std::ops::Range<usize> {
        match self.clamp_to_rows(rows) {
            Some((start_row, end_row)) => {
                let first = start_row * columns;
                let past_last = ((end_row + 1) * columns).min(item_count);
                first..past_last.max(first)
            }
            None => 0..0,
        }
    }
}

/// Computes the row window for the current scroll position.
///
/// `row_pitch` is row height plus inter-row gap. Returns None for a zero
/// pitch, in which case the caller retains its previous range; this guards
/// the degenerate state before the first metrics measurement lands.
pub fn visible_row_range(scroll_top: f32, viewport_height: f32, row_pitch: f32) -> Option<VisibleRange> {
    if row_pitch == 0.0 {
        return None;
    }

    let midpoint = (scroll_top + viewport_height / 2.0).floor();
    let center_row = (midpoint / row_pitch).floor() as i64;

    Some(VisibleRange {
        start: center_row - HALF_WINDOW_ROWS,
        end: center_row + HALF_WINDOW_ROWS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_at_top_of_grid() {
        // pitch 110, midpoint 400, center row 3
        let range = visible_row_range(0.0, 800.0, 110.0).unwrap();
        assert_eq!(range, VisibleRange { start: 0, end: 6 });
    }

    #[test]
    fn test_range_after_scrolling() {
        // midpoint 1500, center row 13
        let range = visible_row_range(1100.0, 800.0, 110.0).unwrap();
        assert_eq!(range, VisibleRange { start: 10, end: 16 });
    }

    #[test]
    fn test_range_can_go_negative_near_top() {
        let range = visible_row_range(0.0, 200.0, 110.0).unwrap();
        assert_eq!(range, VisibleRange { start: -3, end: 3 });
    }

    #[test]
    fn test_zero_pitch_skips_computation() {
        assert!(visible_row_range(500.0, 800.0, 0.0).is_none());
    }

    #[test]
    fn test_clamp_to_rows() {
        let range = VisibleRange { start: -3, end: 3 };
        assert_eq!(range.clamp_to_rows(10), Some((0, 3)));
        assert_eq!(range.clamp_to_rows(2), Some((0, 1)));
        assert_eq!(range.clamp_to_rows(0), None);

        let below = VisibleRange { start: 12, end: 18 };
        assert_eq!(below.clamp_to_rows(10), None);

        let above = VisibleRange { start: -9, end: -2 };
        assert_eq!(above.clamp_to_rows(10), None);
    }

    #[test]
    fn test_item_window_maps_rows_to_items() {
        let range = VisibleRange { start: 1, end: 2 };
        // 3 columns: rows 1..=2 cover items 3..9
        assert_eq!(range.item_window(5, 3, 100), 3..9);
        // Short final row: clamped to the item count
        assert_eq!(range.item_window(3, 3, 8), 3..8);
        // Empty data
        assert_eq!(range.item_window(0, 3, 0), 0..0);
    }
}
