//! Centralized application state for the flicks GUI.
//!
//! Composes focused state components, each owning one aspect of the
//! application. Components keep their invariants behind intent-revealing
//! methods; this struct only wires them together and hosts the few
//! top-level fields that belong to no single component.

use std::sync::Arc;

use rflicks::CatalogSource;

use crate::state::{
    CatalogState, FavoritesState, FilterState, GridMetricsState, SelectionState, ThemeState,
};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded movies and pagination
    pub catalog: CatalogState,

    /// Search text and genre selection
    pub filters: FilterState,

    /// Measured grid layout metrics
    pub metrics: GridMetricsState,

    /// Selected movie and fetched details
    pub selection: SelectionState,

    /// Persisted favorites
    pub favorites: FavoritesState,

    /// Theme manager and current theme
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Active catalog source; None until the user picks one
    pub source: Option<Arc<dyn CatalogSource>>,

    /// Search text the current catalog contents were fetched for
    pub fetched_search: String,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::new(),
            filters: FilterState::new(),
            metrics: GridMetricsState::new(),
            selection: SelectionState::new(),
            favorites: FavoritesState::new(),
            theme: ThemeState::new(),
            source: None,
            fetched_search: String::new(),
            error_message: None,
        }
    }

    /// Creates state with theme and favorites restored from storage.
    pub fn with_persisted(theme_name: String, favorites: FavoritesState) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            favorites,
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Switches the active catalog source, dropping source-bound state.
    pub fn switch_source(&mut self, source: Arc<dyn CatalogSource>) {
        self.catalog.clear();
        self.catalog.set_source_name(source.name().to_string());
        self.selection.clear();
        self.error_message = None;
        self.source = Some(source);
    }
}
