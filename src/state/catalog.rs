use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use walkdir::WalkDir;

use super::cursor::GalleryCursor;
use super::data::Artwork;
use super::error::{CatalogError, CursorError};

/// Image extensions picked up by folder import
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Artist shown for imported images (files carry no artist metadata)
const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Built-in artworks: (image file, title, artist, year)
const BUILTIN_ARTWORKS: [(&str, &str, &str, &str); 6] = [
    ("picture_1.jpg", "The Starry Night", "Vincent van Gogh", "1889"),
    ("picture_2.jpg", "Girl with a Pearl Earring", "Johannes Vermeer", "c. 1665"),
    ("picture_3.jpg", "The Great Wave off Kanagawa", "Katsushika Hokusai", "c. 1831"),
    ("picture_4.jpg", "Water Lilies", "Claude Monet", "1906"),
    ("picture_5.jpg", "The Birth of Venus", "Sandro Botticelli", "c. 1485"),
    ("picture_6.jpg", "Wanderer above the Sea of Fog", "Caspar David Friedrich", "1818"),
];

/// On-disk catalog format
///
/// ```json
/// {
///   "initial_index": 5,
///   "artworks": [
///     { "image": "starry_night.jpg", "title": "The Starry Night",
///       "artist": "Vincent van Gogh", "year": "1889" }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug)]
struct CatalogFile {
    #[serde(default)]
    initial_index: i64,
    artworks: Vec<ArtworkEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
struct ArtworkEntry {
    image: PathBuf,
    title: String,
    artist: String,
    #[serde(default)]
    year: String,
}

/// The Catalog is the ordered, immutable list of artworks the gallery cycles through.
///
/// It is never empty, so a [`GalleryCursor`] can always be built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    initial_index: i64,
}

impl Catalog {
    /// Build a catalog from artworks in display order.
    /// Artwork ids are renumbered to match their position.
    pub fn new(artworks: Vec<Artwork>, initial_index: i64) -> Result<Self, CatalogError> {
        if artworks.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self::from_artworks(artworks, initial_index))
    }

    /// Renumber artworks and record which images are on disk.
    /// The file system is checked here once, not on every redraw.
    fn from_artworks(artworks: Vec<Artwork>, initial_index: i64) -> Self {
        let artworks = artworks
            .into_iter()
            .enumerate()
            .map(|(id, artwork)| Artwork {
                id,
                image_found: artwork.image.is_file(),
                ..artwork
            })
            .collect();

        Catalog {
            artworks,
            initial_index,
        }
    }

    /// The six artworks shipped with the app.
    ///
    /// Images are looked up in the user's asset directory:
    /// - Linux: ~/.local/share/art-space/pictures
    /// - macOS: ~/Library/Application Support/art-space/pictures
    /// - Windows: %APPDATA%\art-space\pictures
    pub fn builtin() -> Self {
        let pictures = data_dir().join("pictures");

        let artworks = BUILTIN_ARTWORKS
            .iter()
            .enumerate()
            .map(|(id, (image, title, artist, year))| Artwork {
                id,
                image: pictures.join(image),
                title: title.to_string(),
                artist: artist.to_string(),
                year: year.to_string(),
                image_found: false,
            })
            .collect();

        Self::from_artworks(artworks, 0)
    }

    /// Parse a catalog from JSON.
    /// Relative image paths are resolved against `base_dir`.
    pub fn from_json(json: &str, base_dir: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let artworks = file
            .artworks
            .into_iter()
            .enumerate()
            .map(|(id, entry)| Artwork {
                id,
                image: base_dir.join(entry.image),
                title: entry.title,
                artist: entry.artist,
                year: entry.year,
                image_found: false,
            })
            .collect();

        Self::new(artworks, file.initial_index)
    }

    /// Convert to a pretty-printed JSON string in the catalog file format
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let file = CatalogFile {
            initial_index: self.initial_index,
            artworks: self
                .artworks
                .iter()
                .map(|artwork| ArtworkEntry {
                    image: artwork.image.clone(),
                    title: artwork.title.clone(),
                    artist: artwork.artist.clone(),
                    year: artwork.year.clone(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&file)
    }

    /// Number of artworks (always at least one)
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    /// A fresh cursor positioned at the configured initial artwork
    pub fn cursor(&self) -> Result<GalleryCursor, CursorError> {
        GalleryCursor::new(self.len(), self.initial_index)
    }
}

/// Per-user application directory.
/// Falls back to the home directory, then the working directory.
fn data_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("art-space");
    path
}

/// Location of the user's catalog file, loaded at startup when present
pub fn default_catalog_path() -> PathBuf {
    data_dir().join("catalog.json")
}

/// Load a catalog file on a background thread
pub async fn load_catalog(path: PathBuf) -> Result<Catalog, String> {
    task::spawn_blocking(move || load_catalog_blocking(&path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of catalog loading
pub fn load_catalog_blocking(path: &Path) -> Result<Catalog, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = Catalog::from_json(&json, base_dir)?;

    println!("🖼️  Loaded {} artworks from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Write a catalog file on a background thread
pub async fn save_catalog(catalog: Catalog, path: PathBuf) -> Result<PathBuf, String> {
    task::spawn_blocking(move || {
        save_catalog_blocking(&catalog, &path)
            .map(|_| path)
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of catalog saving
pub fn save_catalog_blocking(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let json = catalog.to_json()?;

    fs::write(path, json).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    println!("💾 Saved {} artworks to {}", catalog.len(), path.display());
    Ok(())
}

/// Build a catalog from every image in a folder (recursively)
pub async fn import_folder(folder_path: PathBuf) -> Result<Catalog, String> {
    task::spawn_blocking(move || import_folder_blocking(&folder_path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

/// Blocking implementation of folder import.
/// Images are ordered by path and titled after their file name.
pub fn import_folder_blocking(folder_path: &Path) -> Result<Catalog, CatalogError> {
    println!("🔍 Scanning folder: {}", folder_path.display());

    let mut images: Vec<PathBuf> = WalkDir::new(folder_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();

    images.sort();

    let artworks = images
        .into_iter()
        .enumerate()
        .map(|(id, image)| {
            let title = image
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            Artwork {
                id,
                image,
                title,
                artist: UNKNOWN_ARTIST.to_string(),
                year: String::new(),
                image_found: false,
            }
        })
        .collect();

    let catalog = Catalog::new(artworks, 0)?;
    println!("✅ Import complete: {} images", catalog.len());
    Ok(catalog)
}

/// Check if this is an image file by extension
fn is_image(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    #[test]
    fn test_builtin_has_six_numbered_artworks() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.cursor().unwrap().current(), 0);
        for position in 0..catalog.len() {
            let artwork = catalog.get(position).unwrap();
            assert_eq!(artwork.id, position);
            assert!(!artwork.title.is_empty());
        }
        assert!(catalog.get(6).is_none());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Catalog::new(Vec::new(), 0), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json_resolves_paths_and_defaults() {
        let json = r#"{
            "artworks": [
                { "image": "a.jpg", "title": "A", "artist": "Anon", "year": "1900" },
                { "image": "/abs/b.png", "title": "B", "artist": "Anon" }
            ]
        }"#;

        let catalog = Catalog::from_json(json, Path::new("/gallery")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.cursor().unwrap().current(), 0);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.image, PathBuf::from("/gallery/a.jpg"));
        assert_eq!(first.year, "1900");

        let second = catalog.get(1).unwrap();
        assert_eq!(second.id, 1);
        assert_eq!(second.image, PathBuf::from("/abs/b.png"));
        assert_eq!(second.year, "");
    }

    #[test]
    fn test_initial_index_drives_cursor() {
        let json = r#"{
            "initial_index": 5,
            "artworks": [
                { "image": "1.jpg", "title": "1", "artist": "x" },
                { "image": "2.jpg", "title": "2", "artist": "x" },
                { "image": "3.jpg", "title": "3", "artist": "x" }
            ]
        }"#;

        let catalog = Catalog::from_json(json, Path::new(".")).unwrap();
        let cursor = catalog.cursor().unwrap();
        assert_eq!(cursor.current(), 2);
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Catalog::from_json(r#"{ "artworks": [] }"#, Path::new(".")),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json("not json", Path::new(".")),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_json_written_back_reloads() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        let restored = Catalog::from_json(&json, Path::new("")).unwrap();
        assert_eq!(catalog, restored);
    }

    #[test]
    fn test_load_catalog_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{ "artworks": [ { "image": "x.png", "title": "X", "artist": "Y" } ] }"#,
        )
        .unwrap();

        let catalog = load_catalog_blocking(&path).unwrap();
        assert_eq!(catalog.get(0).unwrap().image, dir.path().join("x.png"));
    }

    #[test]
    fn test_saved_catalog_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let catalog = Catalog::builtin();

        save_catalog_blocking(&catalog, &path).unwrap();
        assert_eq!(load_catalog_blocking(&path).unwrap(), catalog);
    }

    #[tokio::test]
    async fn test_load_missing_catalog_fails() {
        let result = load_catalog(PathBuf::from("/nonexistent/catalog.json")).await;
        let message = result.unwrap_err();
        assert!(message.contains("cannot access"), "unexpected error: {}", message);
    }

    #[tokio::test]
    async fn test_save_catalog_returns_written_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let saved = save_catalog(Catalog::builtin(), path.clone()).await.unwrap();
        assert_eq!(saved, path);
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_save_catalog_into_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");

        let message = save_catalog(Catalog::builtin(), path).await.unwrap_err();
        assert!(message.contains("cannot access"), "unexpected error: {}", message);
    }

    #[test]
    fn test_image_presence_recorded_on_load() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("here.png"), b"").unwrap();

        let json = r#"{ "artworks": [
            { "image": "here.png", "title": "Here", "artist": "x" },
            { "image": "gone.png", "title": "Gone", "artist": "x" }
        ] }"#;
        let catalog = Catalog::from_json(json, dir.path()).unwrap();

        assert!(catalog.get(0).unwrap().image_found);
        assert!(!catalog.get(1).unwrap().image_found);
    }

    #[test]
    fn test_import_folder_collects_sorted_images() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b_sunset.JPG"), b"").unwrap();
        fs::write(dir.path().join("a_portrait.png"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("nested").join("c_river.webp"), b"").unwrap();

        let catalog = import_folder_blocking(dir.path()).unwrap();
        let titles: Vec<&str> = (0..catalog.len())
            .filter_map(|i| catalog.get(i))
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a_portrait", "b_sunset", "c_river"]);
        assert_eq!(catalog.get(2).unwrap().id, 2);
        assert_eq!(catalog.get(0).unwrap().artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_import_folder_without_images_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"").unwrap();

        assert!(matches!(import_folder_blocking(dir.path()), Err(CatalogError::Empty)));
    }
}
