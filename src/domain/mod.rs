//! Domain logic for the flicks GUI.
//!
//! Core windowing math lives here, independent of egui and of the host
//! observer plumbing:
//! - Visible-range calculation (scroll position -> mounted row window)

pub mod visible_range;

pub use visible_range::{visible_row_range, VisibleRange, HALF_WINDOW_ROWS};
