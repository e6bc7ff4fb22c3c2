//! Movie selection and details state.

use rflicks::{MovieDetails, MovieId};

/// Currently selected movie and its lazily fetched details.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Id of the movie shown in the details panel
    selected_movie_id: Option<MovieId>,
    /// Details for the selected movie once fetched
    details: Option<MovieDetails>,
    /// True while a details fetch for the selection is in flight
    is_details_loading: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn selected_movie_id(&self) -> Option<MovieId> {
        self.selected_movie_id
    }

    pub fn is_selected(&self, id: MovieId) -> bool {
        self.selected_movie_id == Some(id)
    }

    pub fn details(&self) -> Option<&MovieDetails> {
        self.details.as_ref()
    }

    pub fn is_details_loading(&self) -> bool {
        self.is_details_loading
    }

    // ===== Mutations =====

    /// Selects a movie. Returns true when the selection actually changed,
    /// in which case stale details are dropped and a fetch is warranted.
    pub fn select_movie(&mut self, id: MovieId) -> bool {
        if self.selected_movie_id == Some(id) {
            return false;
        }
        self.selected_movie_id = Some(id);
        self.details = None;
        self.is_details_loading = false;
        true
    }

    pub fn set_details_loading(&mut self, loading: bool) {
        self.is_details_loading = loading;
    }

    /// Stores fetched details. Details for a movie that is no longer
    /// selected are dropped.
    pub fn set_details(&mut self, details: MovieDetails) {
        if self.selected_movie_id == Some(details.id) {
            self.details = Some(details);
        }
        self.is_details_loading = false;
    }

    pub fn clear(&mut self) {
        self.selected_movie_id = None;
        self.details = None;
        self.is_details_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(id: MovieId) -> MovieDetails {
        MovieDetails {
            id,
            title: format!("M{}", id),
            overview: String::new(),
            tagline: String::new(),
            status: String::new(),
            runtime: None,
            genres: vec![],
            release_date: String::new(),
            vote_average: 5.0,
            vote_count: 1,
            budget: 0,
            revenue: 0,
            homepage: String::new(),
            original_language: "en".to_string(),
        }
    }

    #[test]
    fn test_selecting_new_movie_drops_stale_details() {
        let mut selection = SelectionState::new();
        assert!(selection.select_movie(1));
        selection.set_details(details(1));
        assert!(selection.details().is_some());

        assert!(selection.select_movie(2));
        assert!(selection.details().is_none());

        // Re-selecting the current movie changes nothing
        assert!(!selection.select_movie(2));
    }

    #[test]
    fn test_details_for_other_movie_are_dropped() {
        let mut selection = SelectionState::new();
        selection.select_movie(1);
        selection.set_details_loading(true);

        selection.set_details(details(9));
        assert!(selection.details().is_none());
        assert!(!selection.is_details_loading());
    }
}
