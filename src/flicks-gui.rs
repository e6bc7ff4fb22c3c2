//! Flicks movie browser GUI application
//!
//! Interactive desktop browser for a third-party movie catalog built on the
//! egui framework. Features:
//! - Virtualized movie grid: only the rows near the viewport are mounted
//! - Infinite scroll pagination driven by a sentinel visibility trigger
//! - Search and genre filtering with scroll-reset on change

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Background page/details fetching with loading indicators
//! - Online (TMDB), generated offline, and snapshot-file catalog sources
//! - Favorites and theme preferences persisted across sessions
//!
//! Modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core windowing math (visible-range calculation)
//! - `observe/` - Scroll/resize/intersection observers and host traits
//! - `state/` - State components (catalog, filters, metrics, selection)
//! - `io/` - Background catalog fetching
//! - `presentation/` - Color mapping separated from domain logic
//! - `rendering/` - Low-level card painting and text fitting
//! - `ui/` - Panel rendering, the grid view, and the egui host adapter
//! - `utils/` - Grid geometry and formatting helpers

use eframe::egui;
use std::path::PathBuf;

mod app;
mod domain;
mod io;
mod observe;
mod presentation;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncFetcher;
use rflicks::Movie;
use state::FavoritesState;
use ui::egui_surface::{EguiGridSurface, EguiVisibilityHost};
use ui::grid_view::GridView;
use ui::panel_manager::{PanelInteraction, PanelManager};

const FAVORITES_KEY: &str = "favorites";

/// Main application entry point for the flicks movie browser.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Optional snapshot file to open on startup
    let initial_snapshot = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Flicks"),
        ..Default::default()
    };

    eframe::run_native(
        "Flicks",
        options,
        Box::new(move |cc| Ok(Box::new(FlicksApp::new(cc, initial_snapshot)))),
    )
}

/// The flicks movie browser application.
///
/// Delegates to coordinators: `ApplicationCoordinator` for fetching and
/// source workflows, `ThemeCoordinator` and `SettingsCoordinator` for
/// persistence, and `PanelManager` for layout and rendering. The grid view
/// and its host surface live here because their lifetime is the window's.
struct FlicksApp {
    /// Centralized application state
    state: AppState,
    /// Background catalog fetcher
    fetcher: AsyncFetcher,
    /// Windowing state machine for the movie grid
    grid: GridView,
    /// egui host adapter feeding the grid's scroll/resize observers
    surface: EguiGridSurface,
    /// egui host adapter for sentinel visibility
    visibility: EguiVisibilityHost,
    /// Snapshot file to load on the first frame
    pending_snapshot_load: Option<PathBuf>,
}

impl FlicksApp {
    fn new(cc: &eframe::CreationContext<'_>, initial_snapshot: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let favorites: Vec<Movie> = SettingsCoordinator::load_setting(cc.storage, FAVORITES_KEY);
        tracing::info!(theme = %theme_name, favorites = favorites.len(), "starting up");

        Self {
            state: AppState::with_persisted(theme_name, FavoritesState::from_persisted(favorites)),
            fetcher: AsyncFetcher::new(),
            grid: GridView::new(),
            surface: EguiGridSurface::new(),
            visibility: EguiVisibilityHost::new(),
            pending_snapshot_load: initial_snapshot,
        }
    }

    /// Tears the grid down ahead of a source switch; the movies panel
    /// remounts it on the next frame with fresh per-mount state.
    fn remount_grid(&mut self) {
        self.grid.unmount(&mut self.surface, &mut self.visibility);
    }
}

impl eframe::App for FlicksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.pending_snapshot_load.take() {
            self.remount_grid();
            ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.fetcher, &path, ctx);
        }

        // Apply completed background fetches before rendering
        ApplicationCoordinator::check_fetch_completion(&mut self.state, &mut self.fetcher);

        // A changed search text refetches from page one
        ApplicationCoordinator::check_search_change(&mut self.state, &mut self.fetcher, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let interaction = PanelManager::render_all_panels(
            ctx,
            &mut self.state,
            &mut self.grid,
            &mut self.surface,
            &mut self.visibility,
        );

        match interaction {
            Some(PanelInteraction::OpenTmdbRequested) => {
                self.remount_grid();
                ApplicationCoordinator::open_tmdb(&mut self.state, &mut self.fetcher, ctx);
            }
            Some(PanelInteraction::OpenVirtualCatalogRequested) => {
                self.remount_grid();
                ApplicationCoordinator::open_virtual_catalog(&mut self.state, &mut self.fetcher, ctx);
            }
            Some(PanelInteraction::OpenSnapshotRequested(path)) => {
                self.remount_grid();
                ApplicationCoordinator::open_snapshot(&mut self.state, &mut self.fetcher, &path, ctx);
            }
            Some(PanelInteraction::MovieSelected(id)) => {
                ApplicationCoordinator::handle_movie_selected(
                    &mut self.state,
                    &mut self.fetcher,
                    id,
                    ctx,
                );
            }
            Some(PanelInteraction::FavoriteToggled(id)) => {
                ApplicationCoordinator::handle_favorite_toggled(&mut self.state, id);
            }
            Some(PanelInteraction::LoadMoreRequested) => {
                ApplicationCoordinator::handle_load_more(&mut self.state, &mut self.fetcher, ctx);
            }
            Some(PanelInteraction::ResetFiltersRequested) => {
                self.state.filters.reset();
            }
            None => {}
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            FAVORITES_KEY,
            &self.state.favorites.to_persisted(),
        );
    }
}
