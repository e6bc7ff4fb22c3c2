use serde::{Deserialize, Serialize};

/// Unique identifier of a movie within the catalog.
pub type MovieId = u64;

/// A single catalog entry as returned by the paged listing endpoints.
///
/// Field names follow the TMDB wire format so the same struct deserializes
/// API responses and snapshot files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
}

impl Movie {
    /// Four-digit release year, or None for an empty/odd date string.
    pub fn release_year(&self) -> Option<&str> {
        let year = self.release_date.get(0..4)?;
        if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
            Some(year)
        } else {
            None
        }
    }

    /// True if any of the movie's genre ids is in `selected`.
    ///
    /// An empty selection matches every movie.
    pub fn matches_genres(&self, selected: &[u64]) -> bool {
        selected.is_empty() || self.genre_ids.iter().any(|id| selected.contains(id))
    }
}

/// A genre id/name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Extended information for a single movie, fetched on demand for the
/// details panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub original_language: String,
}

/// One page of catalog results, in TMDB's paged response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl CatalogPage {
    /// True if pages beyond this one exist.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Parameters for a paged catalog request.
///
/// An empty search string means "browse popular"; a non-empty one selects
/// the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub page: u32,
    pub language: String,
}

impl CatalogQuery {
    pub fn popular(page: u32) -> Self {
        Self {
            search: String::new(),
            page,
            language: "en-US".to_string(),
        }
    }

    pub fn search(text: impl Into<String>, page: u32) -> Self {
        Self {
            search: text.into(),
            page,
            language: "en-US".to_string(),
        }
    }

    /// The same query, one page further.
    pub fn next_page(&self) -> Self {
        Self {
            search: self.search.clone(),
            page: self.page + 1,
            language: self.language.clone(),
        }
    }
}

/// A provider of paged movie data.
///
/// Implementations: `TmdbCatalog` (REST), `VirtualCatalog` (generated
/// in-memory), `SnapshotCatalog` (loaded from a catalog file). Sources are
/// consumed from background threads, hence the Send + Sync bound.
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name for the status bar.
    fn name(&self) -> &str;

    /// Fetches one page of results for the given query.
    fn fetch_page(&self, query: &CatalogQuery) -> anyhow::Result<CatalogPage>;

    /// Fetches extended details for a single movie.
    fn fetch_details(&self, id: MovieId) -> anyhow::Result<MovieDetails>;

    /// Returns the genre table used to resolve `Movie::genre_ids`.
    fn genres(&self) -> anyhow::Result<Vec<Genre>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, genre_ids: Vec<u64>) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: "2023-06-01".to_string(),
            vote_average: 7.0,
            vote_count: 100,
            popularity: 10.0,
            genre_ids,
            adult: false,
            original_language: "en".to_string(),
            original_title: format!("Movie {}", id),
        }
    }

    #[test]
    fn test_release_year() {
        let mut m = movie(1, vec![]);
        assert_eq!(m.release_year(), Some("2023"));

        m.release_date = String::new();
        assert_eq!(m.release_year(), None);

        m.release_date = "n/a".to_string();
        assert_eq!(m.release_year(), None);
    }

    #[test]
    fn test_genre_matching() {
        let m = movie(1, vec![28, 12]);
        assert!(m.matches_genres(&[]));
        assert!(m.matches_genres(&[12]));
        assert!(m.matches_genres(&[99, 28]));
        assert!(!m.matches_genres(&[99]));
    }

    #[test]
    fn test_page_has_more() {
        let page = CatalogPage {
            page: 1,
            results: vec![],
            total_pages: 3,
            total_results: 60,
        };
        assert!(page.has_more());

        let last = CatalogPage {
            page: 3,
            results: vec![],
            total_pages: 3,
            total_results: 60,
        };
        assert!(!last.has_more());
    }

    #[test]
    fn test_movie_deserializes_from_tmdb_shape() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker learns the truth.",
            "poster_path": "/p.jpg",
            "backdrop_path": null,
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "vote_count": 24000,
            "popularity": 85.3,
            "genre_ids": [28, 878],
            "adult": false,
            "original_language": "en",
            "original_title": "The Matrix"
        }"#;

        let m: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 603);
        assert_eq!(m.genre_ids, vec![28, 878]);
        assert_eq!(m.release_year(), Some("1999"));
    }
}
