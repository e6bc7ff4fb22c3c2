//! Catalog data and pagination state.
//!
//! This is the grid's item source: the movie list accumulated across pages,
//! the loading flags the grid view renders from, and the load-more gate that
//! keeps the infinite-scroll sentinel honest.

use rflicks::{CatalogPage, CatalogQuery, Genre, Movie};

/// State of the loaded movie collection and its pagination.
///
/// Responsibilities:
/// - Accumulating pages into the ordered movie list
/// - Tracking initial-load vs load-more fetches
/// - Gating `load_more` so it is idempotent while a fetch is in flight
///   and inert once no pages remain (or a fetch has failed)
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Movies accumulated across all applied pages, in catalog order
    movies: Vec<Movie>,
    /// Genre table of the active source
    genres: Vec<Genre>,
    /// Query of the most recent (re)load, page field tracking the last
    /// applied page
    query: CatalogQuery,
    /// True while the first page of a query is in flight
    is_loading: bool,
    /// True while a subsequent page is in flight
    is_loading_more: bool,
    /// True when the source reported more pages after the last applied one.
    /// Forced false by a fetch failure so the sentinel cannot retry-loop.
    can_load_more: bool,
    /// Total results reported by the source
    total_results: u64,
    /// Name of the active source for the status bar
    source_name: String,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            genres: Vec::new(),
            query: CatalogQuery::popular(1),
            is_loading: false,
            is_loading_more: false,
            can_load_more: false,
            total_results: 0,
            source_name: String::new(),
        }
    }

    // ===== Queries =====

    /// All loaded movies, unfiltered.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Loaded movies passing the genre selection, in catalog order.
    pub fn display_movies(&self, selected_genres: &[u64]) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.matches_genres(selected_genres))
            .collect()
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn genre_name(&self, id: u64) -> Option<&str> {
        self.genres.iter().find(|g| g.id == id).map(|g| g.name.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn has_source(&self) -> bool {
        !self.source_name.is_empty()
    }

    // ===== Mutations =====

    pub fn set_source_name(&mut self, name: impl Into<String>) {
        self.source_name = name.into();
    }

    pub fn set_genres(&mut self, genres: Vec<Genre>) {
        self.genres = genres;
    }

    /// Starts a fresh load for the given search text, clearing loaded data.
    /// Returns the first-page query to hand to the fetcher.
    pub fn begin_initial_load(&mut self, search: &str) -> CatalogQuery {
        self.movies.clear();
        self.total_results = 0;
        self.is_loading = true;
        self.is_loading_more = false;
        self.can_load_more = false;
        self.query = if search.is_empty() {
            CatalogQuery::popular(1)
        } else {
            CatalogQuery::search(search, 1)
        };
        self.query.clone()
    }

    /// Requests the next page. Returns the query to fetch, or None when a
    /// fetch is already in flight or no more pages exist (no-op by contract).
    pub fn request_load_more(&mut self) -> Option<CatalogQuery> {
        if self.is_loading || self.is_loading_more || !self.can_load_more {
            return None;
        }
        self.is_loading_more = true;
        Some(self.query.next_page())
    }

    /// Applies a fetched page. Pages for a stale search (the user typed a
    /// new query while the response was in flight) are dropped.
    pub fn apply_page(&mut self, query: &CatalogQuery, page: CatalogPage) {
        if query.search != self.query.search {
            tracing::debug!(search = %query.search, "dropping page for stale query");
            return;
        }

        self.can_load_more = page.has_more();

        if page.page <= 1 {
            self.movies = page.results;
        } else {
            self.movies.extend(page.results);
        }

        self.query.page = page.page;
        self.total_results = page.total_results;
        self.is_loading = false;
        self.is_loading_more = false;
    }

    /// Records a terminal fetch failure. Loading flags clear and
    /// `can_load_more` goes false so the sentinel stops driving retries.
    pub fn fail_load(&mut self) {
        self.is_loading = false;
        self.is_loading_more = false;
        self.can_load_more = false;
    }

    /// Drops all loaded data, e.g. when switching sources.
    pub fn clear(&mut self) {
        self.movies.clear();
        self.genres.clear();
        self.query = CatalogQuery::popular(1);
        self.is_loading = false;
        self.is_loading_more = false;
        self.can_load_more = false;
        self.total_results = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, genre_ids: Vec<u64>) -> Movie {
        Movie {
            id,
            title: format!("M{}", id),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 5.0,
            vote_count: 1,
            popularity: 1.0,
            genre_ids,
            adult: false,
            original_language: "en".to_string(),
            original_title: format!("M{}", id),
        }
    }

    fn page(page_no: u32, total_pages: u32, ids: &[u64]) -> CatalogPage {
        CatalogPage {
            page: page_no,
            results: ids.iter().map(|&id| movie(id, vec![28])).collect(),
            total_pages,
            total_results: (total_pages as u64) * 2,
        }
    }

    #[test]
    fn test_initial_load_then_append() {
        let mut state = CatalogState::new();
        let query = state.begin_initial_load("");
        assert!(state.is_loading());
        assert_eq!(query.page, 1);

        state.apply_page(&query, page(1, 3, &[1, 2]));
        assert!(!state.is_loading());
        assert!(state.can_load_more());
        assert_eq!(state.movies().len(), 2);

        let more = state.request_load_more().unwrap();
        assert_eq!(more.page, 2);
        assert!(state.is_loading_more());

        state.apply_page(&more, page(2, 3, &[3, 4]));
        assert!(!state.is_loading_more());
        let ids: Vec<u64> = state.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_load_more_is_idempotent_while_in_flight() {
        let mut state = CatalogState::new();
        let query = state.begin_initial_load("");
        state.apply_page(&query, page(1, 3, &[1, 2]));

        assert!(state.request_load_more().is_some());
        // Second request while the first is still in flight: no-op
        assert!(state.request_load_more().is_none());
    }

    #[test]
    fn test_load_more_noop_when_exhausted() {
        let mut state = CatalogState::new();
        let query = state.begin_initial_load("");
        state.apply_page(&query, page(1, 1, &[1, 2]));

        assert!(!state.can_load_more());
        assert!(state.request_load_more().is_none());
    }

    #[test]
    fn test_load_more_noop_during_initial_load() {
        let mut state = CatalogState::new();
        state.begin_initial_load("");
        assert!(state.request_load_more().is_none());
    }

    #[test]
    fn test_failure_disables_load_more() {
        let mut state = CatalogState::new();
        let query = state.begin_initial_load("");
        state.apply_page(&query, page(1, 5, &[1, 2]));
        assert!(state.can_load_more());

        state.request_load_more().unwrap();
        state.fail_load();
        assert!(!state.is_loading_more());
        // A failed fetch must not leave the sentinel retry-looping
        assert!(!state.can_load_more());
        assert!(state.request_load_more().is_none());
    }

    #[test]
    fn test_stale_search_page_is_dropped() {
        let mut state = CatalogState::new();
        let old_query = state.begin_initial_load("batman");

        // User typed a new search before the response arrived
        let new_query = state.begin_initial_load("superman");
        state.apply_page(&old_query, page(1, 2, &[1, 2]));
        assert!(state.movies().is_empty());
        assert!(state.is_loading());

        state.apply_page(&new_query, page(1, 2, &[3]));
        assert_eq!(state.movies().len(), 1);
    }

    #[test]
    fn test_display_movies_filters_by_genre() {
        let mut state = CatalogState::new();
        let query = state.begin_initial_load("");
        let mut p = page(1, 1, &[]);
        p.results = vec![movie(1, vec![28]), movie(2, vec![35]), movie(3, vec![28, 35])];
        state.apply_page(&query, p);

        assert_eq!(state.display_movies(&[]).len(), 3);
        let comedy: Vec<u64> = state.display_movies(&[35]).iter().map(|m| m.id).collect();
        assert_eq!(comedy, vec![2, 3]);
    }

    #[test]
    fn test_genre_name_lookup() {
        let mut state = CatalogState::new();
        state.set_genres(vec![Genre { id: 28, name: "Action".to_string() }]);
        assert_eq!(state.genre_name(28), Some("Action"));
        assert_eq!(state.genre_name(99), None);
    }
}
