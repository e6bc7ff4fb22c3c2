//! Measured grid layout metrics.
//!
//! Single holder of the grid's measured parameters, written by the grid
//! view's measurement pass and read by the range calculation and item
//! positioning. The view is the only writer; everything else reads.

use crate::utils::geometry;

/// Outer padding around the grid content, included in position queries.
pub const GRID_PADDING: f32 = 16.0;

/// Measured layout parameters of the movie grid.
///
/// While `is_calculation_loading` is true the measured values are stale
/// (before the first measurement, or right after a resize changed the
/// column count) and position queries must not be trusted; the view shows
/// a placeholder instead of positioned items.
#[derive(Debug, Clone)]
pub struct GridMetricsState {
    /// Height of one row in pixels
    row_height: f32,
    /// Items per row
    columns_count: usize,
    /// Width of one column in pixels
    column_width: f32,
    /// Vertical gap between rows in pixels
    vertical_gap: f32,
    /// Horizontal gap between columns in pixels
    horizontal_gap: f32,
    /// Number of rows covered by the current item collection
    rows_count: usize,
    /// True while a (re-)measurement pass is outstanding
    is_calculation_loading: bool,
}

impl Default for GridMetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridMetricsState {
    /// Creates metrics in the pre-measurement state.
    pub fn new() -> Self {
        Self {
            row_height: 0.0,
            columns_count: 0,
            column_width: 0.0,
            vertical_gap: 0.0,
            horizontal_gap: 0.0,
            rows_count: 0,
            is_calculation_loading: true,
        }
    }

    // ===== Metric Queries =====

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn columns_count(&self) -> usize {
        self.columns_count
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    pub fn rows_count(&self) -> usize {
        self.rows_count
    }

    pub fn is_calculation_loading(&self) -> bool {
        self.is_calculation_loading
    }

    /// Vertical stride between successive rows (row height plus gap).
    ///
    /// Zero until the first measurement lands; the range calculator skips
    /// recomputation at zero pitch.
    pub fn row_pitch(&self) -> f32 {
        self.row_height + self.vertical_gap
    }

    // ===== Position Queries =====

    /// Absolute top offset of the item at `index`, including the outer
    /// padding. Valid only while metrics are not loading.
    pub fn item_top_offset(&self, index: usize) -> f32 {
        let row = geometry::row_of_index(index, self.columns_count);
        GRID_PADDING + geometry::top_offset(row, self.row_height, self.vertical_gap)
    }

    /// Absolute left offset of the item at `index`, including the outer
    /// padding. Valid only while metrics are not loading.
    pub fn item_left_offset(&self, index: usize) -> f32 {
        GRID_PADDING
            + geometry::left_offset(
                index,
                self.columns_count,
                self.column_width,
                self.horizontal_gap,
            )
    }

    /// Total scrollable content height, padding included. An empty grid
    /// contributes no inner height.
    pub fn content_height(&self) -> f32 {
        if self.rows_count == 0 {
            return 2.0 * GRID_PADDING;
        }
        geometry::container_height(self.row_height, self.rows_count, self.vertical_gap)
            + 2.0 * GRID_PADDING
    }

    // ===== Metric Mutations =====

    pub fn set_row_height(&mut self, height: f32) {
        self.row_height = height;
    }

    pub fn set_columns_count(&mut self, count: usize) {
        self.columns_count = count;
    }

    pub fn set_column_width(&mut self, width: f32) {
        self.column_width = width;
    }

    pub fn set_vertical_gap(&mut self, gap: f32) {
        self.vertical_gap = gap;
    }

    pub fn set_horizontal_gap(&mut self, gap: f32) {
        self.horizontal_gap = gap;
    }

    pub fn set_rows_count(&mut self, count: usize) {
        self.rows_count = count;
    }

    pub fn set_is_calculation_loading(&mut self, loading: bool) {
        self.is_calculation_loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured() -> GridMetricsState {
        let mut metrics = GridMetricsState::new();
        metrics.set_row_height(300.0);
        metrics.set_columns_count(3);
        metrics.set_column_width(200.0);
        metrics.set_vertical_gap(20.0);
        metrics.set_horizontal_gap(16.0);
        metrics.set_rows_count(4);
        metrics.set_is_calculation_loading(false);
        metrics
    }

    #[test]
    fn test_starts_in_loading_state() {
        let metrics = GridMetricsState::new();
        assert!(metrics.is_calculation_loading());
        assert_eq!(metrics.row_pitch(), 0.0);
    }

    #[test]
    fn test_position_queries_include_padding() {
        let metrics = measured();
        // Item 0: first row, first column
        assert_eq!(metrics.item_top_offset(0), GRID_PADDING);
        assert_eq!(metrics.item_left_offset(0), GRID_PADDING);

        // Item 4: second row, second column
        assert_eq!(metrics.item_top_offset(4), GRID_PADDING + 320.0);
        assert_eq!(metrics.item_left_offset(4), GRID_PADDING + 216.0);
    }

    #[test]
    fn test_row_pitch() {
        assert_eq!(measured().row_pitch(), 320.0);
    }

    #[test]
    fn test_content_height() {
        let mut metrics = measured();
        // 4 rows: 4*300 + 3*20 = 1260, plus padding on both sides
        assert_eq!(metrics.content_height(), 1260.0 + 2.0 * GRID_PADDING);

        metrics.set_rows_count(0);
        assert_eq!(metrics.content_height(), 2.0 * GRID_PADDING);
    }
}
