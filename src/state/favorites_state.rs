//! Favorite movies state.
//!
//! Favorites keep the full movie payload (not just the id) so the favorites
//! view works without the catalog source that produced them. The list is
//! persisted through the settings coordinator as plain JSON.

use std::collections::HashMap;

use rflicks::{Movie, MovieId};

/// Movies the user has marked as favorites, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    favorites: HashMap<MovieId, Movie>,
}

impl FavoritesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores favorites from their persisted form.
    pub fn from_persisted(movies: Vec<Movie>) -> Self {
        Self {
            favorites: movies.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    /// The persisted form: favorites sorted by title for stable output.
    pub fn to_persisted(&self) -> Vec<Movie> {
        let mut movies: Vec<Movie> = self.favorites.values().cloned().collect();
        movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        movies
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.contains_key(&id)
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Adds the movie when absent, removes it when present.
    pub fn toggle(&mut self, movie: &Movie) {
        if self.favorites.remove(&movie.id).is_none() {
            self.favorites.insert(movie.id, movie.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 5.0,
            vote_count: 1,
            popularity: 1.0,
            genre_ids: vec![],
            adult: false,
            original_language: "en".to_string(),
            original_title: title.to_string(),
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut favorites = FavoritesState::new();
        let m = movie(1, "Alpha");

        favorites.toggle(&m);
        assert!(favorites.is_favorite(1));

        favorites.toggle(&m);
        assert!(!favorites.is_favorite(1));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut favorites = FavoritesState::new();
        favorites.toggle(&movie(2, "Beta"));
        favorites.toggle(&movie(1, "Alpha"));

        let persisted = favorites.to_persisted();
        let titles: Vec<&str> = persisted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);

        let restored = FavoritesState::from_persisted(persisted);
        assert!(restored.is_favorite(1));
        assert!(restored.is_favorite(2));
    }
}
