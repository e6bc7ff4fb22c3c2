//! Grid geometry helpers.
//!
//! Pure functions mapping a flat item index to its row/column and to pixel
//! offsets, given the measured grid parameters. All stateless; the metrics
//! store builds its position queries on top of these.

/// Row containing item `index` in a grid with `columns` items per row.
///
/// `columns` must be non-zero; column count is only read once metric
/// calculation has finished.
pub fn row_of_index(index: usize, columns: usize) -> usize {
    index / columns
}

/// Column of item `index` within its row.
pub fn column_of_index(index: usize, columns: usize) -> usize {
    index - row_of_index(index, columns) * columns
}

/// Pixel offset of a row's top edge from the grid origin.
pub fn top_offset(row: usize, row_height: f32, vertical_gap: f32) -> f32 {
    row as f32 * (row_height + vertical_gap)
}

/// Pixel offset of an item's left edge from the grid origin.
pub fn left_offset(index: usize, columns: usize, column_width: f32, horizontal_gap: f32) -> f32 {
    column_of_index(index, columns) as f32 * (column_width + horizontal_gap)
}

/// Total content height of a grid with `rows` rows.
///
/// Yields a negative value for `rows == 0`; callers treat an empty grid as
/// contributing no height rather than clamping here.
pub fn container_height(row_height: f32, rows: usize, vertical_gap: f32) -> f32 {
    row_height * rows as f32 + vertical_gap * (rows as f32 - 1.0)
}
