//! State management modules for the flicks GUI.
//!
//! State-only logic, no UI concerns:
//! - Catalog state (loaded movies, pagination, loading flags)
//! - Filter state (search text, genre selection, change revision)
//! - Grid metrics (measured layout parameters, position queries)
//! - Selection state (selected movie, fetched details)
//! - Favorites state (persisted favorite movies)
//! - Theme state (theme manager, current theme)

mod catalog_state;
mod favorites_state;
mod filter_state;
mod grid_metrics;
mod selection;
mod theme_state;

pub use catalog_state::CatalogState;
pub use favorites_state::FavoritesState;
pub use filter_state::FilterState;
pub use grid_metrics::{GridMetricsState, GRID_PADDING};
pub use selection::SelectionState;
pub use theme_state::ThemeState;
