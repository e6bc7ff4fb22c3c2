//! I/O modules for background catalog fetching.

pub mod async_fetcher;

// Re-export commonly used types
pub use async_fetcher::{AsyncFetcher, DetailsFetch, GenresFetch, PageFetch};
