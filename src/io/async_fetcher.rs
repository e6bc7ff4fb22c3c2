//! Asynchronous catalog fetching.
//!
//! Runs catalog source calls (page listings, movie details, the genre
//! table) on background threads, keeping the GUI responsive. Results come
//! back through channels and are polled once per frame from the update
//! loop; completion requests a repaint so the UI wakes up promptly.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

use eframe::egui;
use rflicks::{CatalogPage, CatalogQuery, CatalogSource, Genre, MovieDetails, MovieId};

/// Result of polling an in-flight page fetch.
pub enum PageFetch {
    /// Fetch completed; the query it was issued for rides along so stale
    /// responses can be detected.
    Ready {
        query: CatalogQuery,
        page: CatalogPage,
    },
    /// Fetch failed terminally.
    Error { query: CatalogQuery, message: String },
    /// Nothing finished (still running, or no fetch active).
    None,
}

/// Result of polling an in-flight details fetch.
pub enum DetailsFetch {
    Ready(MovieDetails),
    Error(String),
    None,
}

/// Result of polling an in-flight genre-table fetch.
pub enum GenresFetch {
    Ready(Vec<Genre>),
    Error(String),
    None,
}

/// Coordinates background catalog fetches with the main GUI thread.
///
/// One page fetch, one details fetch, and one genres fetch may be in
/// flight at a time; starting a new one replaces the previous receiver, so
/// an abandoned fetch's result is simply never read.
pub struct AsyncFetcher {
    page_receiver: Option<Receiver<(CatalogQuery, Result<CatalogPage, String>)>>,
    details_receiver: Option<Receiver<Result<MovieDetails, String>>>,
    genres_receiver: Option<Receiver<Result<Vec<Genre>, String>>>,
}

impl AsyncFetcher {
    pub fn new() -> Self {
        Self {
            page_receiver: None,
            details_receiver: None,
            genres_receiver: None,
        }
    }

    /// True while a page fetch is in flight.
    pub fn is_fetching_page(&self) -> bool {
        self.page_receiver.is_some()
    }

    /// Starts fetching one page of results on a background thread.
    pub fn start_page_fetch(
        &mut self,
        source: Arc<dyn CatalogSource>,
        query: CatalogQuery,
        ctx: &egui::Context,
    ) {
        let (sender, receiver) = channel();
        self.page_receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            tracing::debug!(search = %query.search, page = query.page, "fetching page");
            let result = source.fetch_page(&query).map_err(|e| e.to_string());
            let _ = sender.send((query, result));
            ctx_handle.request_repaint();
        });
    }

    /// Starts fetching details for a movie on a background thread.
    pub fn start_details_fetch(
        &mut self,
        source: Arc<dyn CatalogSource>,
        id: MovieId,
        ctx: &egui::Context,
    ) {
        let (sender, receiver) = channel();
        self.details_receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = source.fetch_details(id).map_err(|e| e.to_string());
            let _ = sender.send(result);
            ctx_handle.request_repaint();
        });
    }

    /// Starts fetching the genre table on a background thread.
    pub fn start_genres_fetch(&mut self, source: Arc<dyn CatalogSource>, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.genres_receiver = Some(receiver);

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = source.genres().map_err(|e| e.to_string());
            let _ = sender.send(result);
            ctx_handle.request_repaint();
        });
    }

    /// Polls for page fetch completion. Called once per frame.
    pub fn check_page_completion(&mut self) -> PageFetch {
        if let Some(receiver) = &self.page_receiver {
            if let Ok((query, result)) = receiver.try_recv() {
                self.page_receiver = None;
                return match result {
                    Ok(page) => PageFetch::Ready { query, page },
                    Err(message) => PageFetch::Error { query, message },
                };
            }
        }
        PageFetch::None
    }

    /// Polls for details fetch completion. Called once per frame.
    pub fn check_details_completion(&mut self) -> DetailsFetch {
        if let Some(receiver) = &self.details_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.details_receiver = None;
                return match result {
                    Ok(details) => DetailsFetch::Ready(details),
                    Err(message) => DetailsFetch::Error(message),
                };
            }
        }
        DetailsFetch::None
    }

    /// Polls for genre-table fetch completion. Called once per frame.
    pub fn check_genres_completion(&mut self) -> GenresFetch {
        if let Some(receiver) = &self.genres_receiver {
            if let Ok(result) = receiver.try_recv() {
                self.genres_receiver = None;
                return match result {
                    Ok(genres) => GenresFetch::Ready(genres),
                    Err(message) => GenresFetch::Error(message),
                };
            }
        }
        GenresFetch::None
    }
}

impl Default for AsyncFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_starts_idle() {
        let mut fetcher = AsyncFetcher::new();
        assert!(!fetcher.is_fetching_page());
        assert!(matches!(fetcher.check_page_completion(), PageFetch::None));
        assert!(matches!(fetcher.check_details_completion(), DetailsFetch::None));
        assert!(matches!(fetcher.check_genres_completion(), GenresFetch::None));
    }
}
