//! Application-level coordination and workflow management.
//!
//! Wires the catalog sources, the background fetcher, and the state
//! components together: source switching, fetch completion handling,
//! filter-driven refetches, load-more, selection, and favorites.

use std::path::Path;
use std::sync::Arc;

use eframe::egui;
use rflicks::{load_snapshot, CatalogSource, MovieId, TmdbCatalog, VirtualCatalog};

use crate::app::AppState;
use crate::io::{AsyncFetcher, DetailsFetch, GenresFetch, PageFetch};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Switches to the TMDB REST source.
    pub fn open_tmdb(state: &mut AppState, fetcher: &mut AsyncFetcher, ctx: &egui::Context) {
        match TmdbCatalog::from_env() {
            Ok(catalog) => Self::set_source(state, fetcher, Arc::new(catalog), ctx),
            Err(e) => {
                state.error_message = Some(format!("TMDB unavailable: {}", e));
            }
        }
    }

    /// Switches to the generated offline catalog.
    pub fn open_virtual_catalog(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        ctx: &egui::Context,
    ) {
        Self::set_source(state, fetcher, Arc::new(VirtualCatalog::new()), ctx);
    }

    /// Loads a snapshot file and switches to it.
    pub fn open_snapshot(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        path: &Path,
        ctx: &egui::Context,
    ) {
        let path_string = path.to_string_lossy().to_string();
        match load_snapshot(&path_string) {
            Ok(catalog) => {
                tracing::info!(path = %path_string, movies = catalog.movie_count(), "snapshot loaded");
                Self::set_source(state, fetcher, Arc::new(catalog), ctx);
            }
            Err(e) => {
                state.error_message = Some(format!("Error loading snapshot: {}", e));
            }
        }
    }

    /// Installs a source and kicks off the initial page and genre fetches.
    fn set_source(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        source: Arc<dyn CatalogSource>,
        ctx: &egui::Context,
    ) {
        tracing::info!(source = source.name(), "switching catalog source");
        state.switch_source(source.clone());

        state.fetched_search = state.filters.search().to_string();
        let query = state.catalog.begin_initial_load(&state.fetched_search);
        fetcher.start_page_fetch(source.clone(), query, ctx);
        fetcher.start_genres_fetch(source, ctx);
    }

    /// Applies completed background fetches to application state.
    ///
    /// Called once per frame in the update loop.
    pub fn check_fetch_completion(state: &mut AppState, fetcher: &mut AsyncFetcher) {
        match fetcher.check_page_completion() {
            PageFetch::Ready { query, page } => {
                tracing::debug!(page = page.page, results = page.results.len(), "page applied");
                state.catalog.apply_page(&query, page);
                state.error_message = None;
            }
            PageFetch::Error { query, message } => {
                tracing::warn!(page = query.page, %message, "page fetch failed");
                state.catalog.fail_load();
                state.error_message = Some(format!("Error fetching movies: {}", message));
            }
            PageFetch::None => {}
        }

        match fetcher.check_details_completion() {
            DetailsFetch::Ready(details) => state.selection.set_details(details),
            DetailsFetch::Error(message) => {
                state.selection.set_details_loading(false);
                state.error_message = Some(format!("Error fetching details: {}", message));
            }
            DetailsFetch::None => {}
        }

        match fetcher.check_genres_completion() {
            GenresFetch::Ready(genres) => state.catalog.set_genres(genres),
            GenresFetch::Error(message) => {
                // The grid works without genre names; just log it
                tracing::warn!(%message, "genre table fetch failed");
            }
            GenresFetch::None => {}
        }
    }

    /// Refetches from page one when the search text changed. Genre changes
    /// filter client-side and need no refetch.
    pub fn check_search_change(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        ctx: &egui::Context,
    ) {
        if state.filters.search() == state.fetched_search {
            return;
        }
        let Some(source) = state.source.clone() else {
            return;
        };

        state.fetched_search = state.filters.search().to_string();
        let query = state.catalog.begin_initial_load(&state.fetched_search);
        fetcher.start_page_fetch(source, query, ctx);
    }

    /// Handles the sentinel's load-more request. A no-op while a fetch is
    /// in flight or when no pages remain.
    pub fn handle_load_more(state: &mut AppState, fetcher: &mut AsyncFetcher, ctx: &egui::Context) {
        let Some(source) = state.source.clone() else {
            return;
        };
        if let Some(query) = state.catalog.request_load_more() {
            fetcher.start_page_fetch(source, query, ctx);
        }
    }

    /// Handles a movie card selection, fetching details for new selections.
    pub fn handle_movie_selected(
        state: &mut AppState,
        fetcher: &mut AsyncFetcher,
        id: MovieId,
        ctx: &egui::Context,
    ) {
        if !state.selection.select_movie(id) {
            return;
        }
        if let Some(source) = state.source.clone() {
            state.selection.set_details_loading(true);
            fetcher.start_details_fetch(source, id, ctx);
        }
    }

    /// Toggles a movie's favorite status.
    pub fn handle_favorite_toggled(state: &mut AppState, id: MovieId) {
        let movie = state
            .catalog
            .movies()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .or_else(|| {
                state
                    .favorites
                    .to_persisted()
                    .into_iter()
                    .find(|m| m.id == id)
            });

        if let Some(movie) = movie {
            state.favorites.toggle(&movie);
        }
    }
}
