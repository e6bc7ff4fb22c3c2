//! Search and genre filter state.

/// Current search text and genre selection.
///
/// Every change bumps a revision counter; views compare revisions to react
/// to filter changes (refetch, scroll the grid back to the top) without
/// diffing the values themselves.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Search text as entered in the header
    search: String,
    /// Selected genre ids; empty means all genres
    selected_genres: Vec<u64>,
    /// Bumped on every search or genre change
    revision: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            selected_genres: Vec::new(),
            revision: 0,
        }
    }

    // ===== Queries =====

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_genres(&self) -> &[u64] {
        &self.selected_genres
    }

    pub fn is_genre_selected(&self, id: u64) -> bool {
        self.selected_genres.contains(&id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.selected_genres.is_empty()
    }

    // ===== Mutations =====

    /// Sets the search text. An unchanged value does not bump the revision.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search == self.search {
            return;
        }
        self.search = search;
        self.revision += 1;
    }

    /// Adds or removes a genre from the selection.
    pub fn toggle_genre(&mut self, id: u64) {
        match self.selected_genres.iter().position(|&g| g == id) {
            Some(index) => {
                self.selected_genres.remove(index);
            }
            None => self.selected_genres.push(id),
        }
        self.revision += 1;
    }

    /// Clears search and genre selection (the empty state's "Clear filters").
    pub fn reset(&mut self) {
        if !self.has_active_filters() {
            return;
        }
        self.search.clear();
        self.selected_genres.clear();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_bump_revision() {
        let mut filters = FilterState::new();
        assert_eq!(filters.revision(), 0);

        filters.set_search("batman");
        assert_eq!(filters.revision(), 1);

        // Unchanged search: no bump
        filters.set_search("batman");
        assert_eq!(filters.revision(), 1);

        filters.toggle_genre(28);
        assert_eq!(filters.revision(), 2);
        assert!(filters.is_genre_selected(28));

        filters.toggle_genre(28);
        assert_eq!(filters.revision(), 3);
        assert!(!filters.is_genre_selected(28));
    }

    #[test]
    fn test_reset_clears_everything_once() {
        let mut filters = FilterState::new();
        filters.set_search("x");
        filters.toggle_genre(12);
        assert!(filters.has_active_filters());

        let before = filters.revision();
        filters.reset();
        assert!(!filters.has_active_filters());
        assert_eq!(filters.revision(), before + 1);

        // Resetting clean filters is a no-op
        filters.reset();
        assert_eq!(filters.revision(), before + 1);
    }
}
