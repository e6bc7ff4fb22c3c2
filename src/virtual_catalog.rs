use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::{CatalogPage, CatalogQuery, CatalogSource, Genre, Movie, MovieDetails, MovieId};

const DEFAULT_MOVIE_COUNT: usize = 600;
const DEFAULT_SEED: u64 = 42;

/// Movies per page, matching the TMDB page size.
pub const PAGE_SIZE: usize = 20;

/// Built-in genre table shared by all virtual catalogs (TMDB ids).
pub static VIRTUAL_GENRES: Lazy<Vec<Genre>> = Lazy::new(|| {
    [
        (28, "Action"),
        (12, "Adventure"),
        (16, "Animation"),
        (35, "Comedy"),
        (80, "Crime"),
        (18, "Drama"),
        (14, "Fantasy"),
        (27, "Horror"),
        (9648, "Mystery"),
        (878, "Science Fiction"),
        (53, "Thriller"),
        (37, "Western"),
    ]
    .iter()
    .map(|&(id, name)| Genre {
        id,
        name: name.to_string(),
    })
    .collect()
});

const TITLE_ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Forgotten", "Electric", "Midnight", "Golden", "Savage", "Hidden",
    "Burning", "Frozen", "Distant", "Broken", "Endless", "Hollow", "Scarlet", "Iron",
];

const TITLE_NOUNS: &[&str] = &[
    "Horizon", "Empire", "Shadow", "Garden", "Voyage", "Protocol", "Kingdom", "Harvest",
    "Signal", "Paradox", "Labyrinth", "Frontier", "Reckoning", "Covenant", "Mirage", "Echo",
];

const OVERVIEW_SENTENCES: &[&str] = &[
    "A reluctant hero is pulled back into a world they tried to leave behind.",
    "Nothing is what it seems in a city that never asks questions.",
    "An unlikely alliance forms as the clock runs out.",
    "One discovery changes everything for a small crew at the edge of the map.",
    "Old debts come due in the most unexpected way.",
    "The past refuses to stay buried.",
];

/// Deterministic in-memory catalog source.
///
/// Generates a fixed population of movies from a seed, then serves them in
/// pages through the regular `CatalogSource` interface. Search filters by
/// case-insensitive title substring, which makes it a drop-in stand-in for
/// the REST source in tests and offline mode.
pub struct VirtualCatalog {
    name: String,
    movies: Vec<Movie>,
    seed: u64,
}

impl VirtualCatalog {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MOVIE_COUNT, DEFAULT_SEED)
    }

    pub fn with_config(movie_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let movies = (0..movie_count)
            .map(|i| generate_movie(&mut rng, (i + 1) as MovieId))
            .collect();

        Self {
            name: "Offline Catalog".to_string(),
            movies,
            seed,
        }
    }

    /// Wraps an existing movie list, e.g. one loaded from a snapshot file.
    pub fn from_movies(name: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            name: name.into(),
            movies,
            seed: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// All movies matching the query's search text, before paging.
    fn matching<'a>(&'a self, query: &CatalogQuery) -> Vec<&'a Movie> {
        if query.search.is_empty() {
            return self.movies.iter().collect();
        }
        let needle = query.search.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for VirtualCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for VirtualCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_page(&self, query: &CatalogQuery) -> anyhow::Result<CatalogPage> {
        let matching = self.matching(query);
        let total_results = matching.len() as u64;
        let total_pages = (matching.len().div_ceil(PAGE_SIZE)).max(1) as u32;

        let page = query.page.max(1);
        let start = (page as usize - 1) * PAGE_SIZE;
        let results = matching
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        Ok(CatalogPage {
            page,
            results,
            total_pages,
            total_results,
        })
    }

    fn fetch_details(&self, id: MovieId) -> anyhow::Result<MovieDetails> {
        let movie = self
            .movies
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| anyhow::anyhow!("No movie with id {} in {}", id, self.name))?;

        let genres = VIRTUAL_GENRES
            .iter()
            .filter(|g| movie.genre_ids.contains(&g.id))
            .cloned()
            .collect();

        Ok(MovieDetails {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            tagline: String::new(),
            status: "Released".to_string(),
            runtime: Some(80 + (movie.id % 80) as u32),
            genres,
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            budget: 0,
            revenue: 0,
            homepage: String::new(),
            original_language: movie.original_language.clone(),
        })
    }

    fn genres(&self) -> anyhow::Result<Vec<Genre>> {
        Ok(VIRTUAL_GENRES.clone())
    }
}

fn generate_movie(rng: &mut StdRng, id: MovieId) -> Movie {
    let adjective = TITLE_ADJECTIVES[rng.gen_range(0..TITLE_ADJECTIVES.len())];
    let noun = TITLE_NOUNS[rng.gen_range(0..TITLE_NOUNS.len())];
    let title = if rng.gen_bool(0.2) {
        format!("{} {} {}", adjective, noun, rng.gen_range(2..=4))
    } else {
        format!("{} {}", adjective, noun)
    };

    // 1-3 genres per movie
    let genre_count = rng.gen_range(1..=3);
    let mut genre_ids: Vec<u64> = Vec::with_capacity(genre_count);
    while genre_ids.len() < genre_count {
        let genre = &VIRTUAL_GENRES[rng.gen_range(0..VIRTUAL_GENRES.len())];
        if !genre_ids.contains(&genre.id) {
            genre_ids.push(genre.id);
        }
    }

    let year = rng.gen_range(1965..=2025);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);

    let overview = OVERVIEW_SENTENCES[rng.gen_range(0..OVERVIEW_SENTENCES.len())].to_string();
    let vote_count = rng.gen_range(50..50_000);

    Movie {
        id,
        title: title.clone(),
        overview,
        poster_path: None,
        backdrop_path: None,
        release_date: format!("{:04}-{:02}-{:02}", year, month, day),
        vote_average: (rng.gen_range(20..=95) as f64) / 10.0,
        vote_count,
        popularity: rng.gen_range(1.0..500.0),
        genre_ids,
        adult: false,
        original_language: "en".to_string(),
        original_title: title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = VirtualCatalog::with_config(50, 7);
        let b = VirtualCatalog::with_config(50, 7);

        let page_a = a.fetch_page(&CatalogQuery::popular(1)).unwrap();
        let page_b = b.fetch_page(&CatalogQuery::popular(1)).unwrap();

        let titles_a: Vec<_> = page_a.results.iter().map(|m| m.title.clone()).collect();
        let titles_b: Vec<_> = page_b.results.iter().map(|m| m.title.clone()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn test_paging_covers_all_movies_without_overlap() {
        let catalog = VirtualCatalog::with_config(45, 1);
        let mut seen = std::collections::HashSet::new();

        let first = catalog.fetch_page(&CatalogQuery::popular(1)).unwrap();
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_results, 45);

        for page in 1..=first.total_pages {
            let result = catalog.fetch_page(&CatalogQuery::popular(page)).unwrap();
            for movie in &result.results {
                assert!(seen.insert(movie.id), "movie {} served twice", movie.id);
            }
        }
        assert_eq!(seen.len(), 45);
    }

    #[test]
    fn test_last_page_is_partial() {
        let catalog = VirtualCatalog::with_config(45, 1);
        let last = catalog.fetch_page(&CatalogQuery::popular(3)).unwrap();
        assert_eq!(last.results.len(), 5);
        assert!(!last.has_more());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let catalog = VirtualCatalog::with_config(45, 1);
        let past = catalog.fetch_page(&CatalogQuery::popular(4)).unwrap();
        assert!(past.results.is_empty());
    }

    #[test]
    fn test_search_filters_by_title_substring() {
        let catalog = VirtualCatalog::with_config(200, 3);
        let result = catalog.fetch_page(&CatalogQuery::search("echo", 1)).unwrap();
        for movie in &result.results {
            assert!(movie.title.to_lowercase().contains("echo"), "{}", movie.title);
        }
    }

    #[test]
    fn test_empty_search_result_reports_one_page() {
        let catalog = VirtualCatalog::with_config(20, 3);
        let result = catalog
            .fetch_page(&CatalogQuery::search("zzzzzz-no-such-title", 1))
            .unwrap();
        assert!(result.results.is_empty());
        assert_eq!(result.total_pages, 1);
        assert!(!result.has_more());
    }

    #[test]
    fn test_details_resolves_genres() {
        let catalog = VirtualCatalog::with_config(20, 3);
        let movie = catalog.fetch_page(&CatalogQuery::popular(1)).unwrap().results[0].clone();

        let details = catalog.fetch_details(movie.id).unwrap();
        assert_eq!(details.id, movie.id);
        assert_eq!(details.genres.len(), movie.genre_ids.len());
        for genre in &details.genres {
            assert!(movie.genre_ids.contains(&genre.id));
        }
    }

    #[test]
    fn test_details_for_unknown_id_fails() {
        let catalog = VirtualCatalog::with_config(20, 3);
        assert!(catalog.fetch_details(9_999_999).is_err());
    }
}
