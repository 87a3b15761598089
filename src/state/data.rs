/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use std::path::PathBuf;

/// Represents a single artwork in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Position in the catalog (0-based)
    pub id: usize,
    /// Full path to the image file
    pub image: PathBuf,
    /// Title of the piece (e.g., "The Starry Night")
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Year as displayed, may be empty or approximate ("c. 1665")
    pub year: String,
    /// Whether the image file was on disk when the catalog was built
    pub image_found: bool,
}
