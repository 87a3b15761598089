/// Error types for the gallery state
///
/// Cursor errors are caller mistakes (building a cursor over nothing).
/// Catalog errors come from reading or parsing catalog files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when constructing a [`GalleryCursor`](super::cursor::GalleryCursor)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor needs at least one artwork to point at
    #[error("invalid configuration: catalog size must be at least 1 (got {catalog_size})")]
    InvalidConfiguration { catalog_size: usize },
}

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog with no artworks cannot drive the gallery
    #[error("catalog contains no artworks")]
    Empty,
}
