pub mod traits;
pub mod tmdb;
pub mod virtual_catalog;
pub mod catalog_file;
pub mod theme;

// Export catalog model and source trait
pub use traits::{
    CatalogPage, CatalogQuery, CatalogSource,
    Genre, Movie, MovieDetails, MovieId,
};

// Export REST implementation
pub use tmdb::{TmdbCatalog, resolve_api_key};

// Export virtual implementation
pub use virtual_catalog::{VirtualCatalog, PAGE_SIZE, VIRTUAL_GENRES};

// Export snapshot support
pub use catalog_file::{SnapshotWriter, load_snapshot, SNAPSHOT_VERSION};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
