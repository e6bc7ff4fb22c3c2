//! TMDB REST catalog source.
//!
//! Thin blocking HTTP client for the TMDB v3 API: popular listing, search,
//! movie details, and the genre table. All calls run on background threads
//! (see the GUI's async fetcher), so the blocking reqwest client is fine here.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::traits::{CatalogPage, CatalogQuery, CatalogSource, Genre, MovieDetails, MovieId};

/// TMDB v3 API base URL.
pub const TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Environment variable holding the API key.
pub const TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves the TMDB API key from the environment, falling back to
/// `<config dir>/rflicks/api_key`.
pub fn resolve_api_key() -> Result<String> {
    if let Ok(key) = std::env::var(TMDB_API_KEY_ENV) {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let path = dirs::config_dir()
        .map(|dir| dir.join("rflicks").join("api_key"))
        .context("No config directory available for the API key file")?;
    let key = std::fs::read_to_string(&path)
        .with_context(|| format!("TMDB API key not found: set {} or create {}", TMDB_API_KEY_ENV, path.display()))?;
    let key = key.trim().to_string();
    anyhow::ensure!(!key.is_empty(), "API key file {} is empty", path.display());
    Ok(key)
}

/// Builds a request URL for the given endpoint path and query parameters.
///
/// The api_key parameter always comes first; empty parameter values are
/// skipped, matching the upstream client behavior.
fn build_url(api_key: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}?api_key={}", TMDB_API_BASE_URL, path, api_key);
    for (name, value) in params {
        if !value.is_empty() {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencode(value));
        }
    }
    url
}

/// Percent-encodes a query parameter value.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[derive(Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

/// Catalog source backed by the TMDB REST API.
pub struct TmdbCatalog {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl TmdbCatalog {
    /// Creates a client with the key resolved from the environment or the
    /// config-dir key file.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_api_key(resolve_api_key()?))
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction only fails on TLS backend misconfiguration");

        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// URL for a paged listing query. Empty search selects /movie/popular,
    /// otherwise /search/movie.
    pub fn page_url(&self, query: &CatalogQuery) -> String {
        let page = query.page.max(1).to_string();
        if query.search.is_empty() {
            build_url(
                &self.api_key,
                "/movie/popular",
                &[("page", &page), ("language", &query.language)],
            )
        } else {
            build_url(
                &self.api_key,
                "/search/movie",
                &[
                    ("query", &query.search),
                    ("page", &page),
                    ("language", &query.language),
                ],
            )
        }
    }

    /// URL for a movie details request.
    pub fn details_url(&self, id: MovieId) -> String {
        build_url(&self.api_key, &format!("/movie/{}", id), &[("language", "en-US")])
    }

    /// URL for the movie genre table.
    pub fn genres_url(&self) -> String {
        build_url(&self.api_key, "/genre/movie/list", &[("language", "en-US")])
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %redact_key(url), "tmdb request");
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request failed: {}", redact_key(url)))?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "TMDB returned HTTP {}", status);

        response
            .json::<T>()
            .context("Failed to decode TMDB response body")
    }
}

/// Strips the api_key value out of a URL for log output.
fn redact_key(url: &str) -> String {
    match url.find("api_key=") {
        Some(start) => {
            let value_start = start + "api_key=".len();
            let value_end = url[value_start..]
                .find('&')
                .map(|i| value_start + i)
                .unwrap_or(url.len());
            format!("{}<key>{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

impl CatalogSource for TmdbCatalog {
    fn name(&self) -> &str {
        "TMDB"
    }

    fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage> {
        self.get_json(&self.page_url(query))
    }

    fn fetch_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.get_json(&self.details_url(id))
    }

    fn genres(&self) -> Result<Vec<Genre>> {
        let response: GenreListResponse = self.get_json(&self.genres_url())?;
        Ok(response.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TmdbCatalog {
        TmdbCatalog::with_api_key("k123")
    }

    #[test]
    fn test_popular_url() {
        let url = catalog().page_url(&CatalogQuery::popular(2));
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/popular?api_key=k123&page=2&language=en-US"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = catalog().page_url(&CatalogQuery::search("dark knight", 1));
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=k123&query=dark%20knight&page=1&language=en-US"
        );
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let mut query = CatalogQuery::popular(1);
        query.page = 0;
        assert!(catalog().page_url(&query).contains("page=1"));
    }

    #[test]
    fn test_details_url() {
        let url = catalog().details_url(603);
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/603?api_key=k123&language=en-US"
        );
    }

    #[test]
    fn test_redact_key() {
        let url = "https://x/y?api_key=secret&page=1";
        assert_eq!(redact_key(url), "https://x/y?api_key=<key>&page=1");

        let bare = "https://x/y?api_key=secret";
        assert_eq!(redact_key(bare), "https://x/y?api_key=<key>");
    }

    #[test]
    fn test_genre_list_deserializes() {
        let json = r#"{"genres": [{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]}"#;
        let parsed: GenreListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.genres.len(), 2);
        assert_eq!(parsed.genres[0].name, "Action");
    }
}
