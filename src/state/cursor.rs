/// Cyclic navigation over a fixed-size catalog
///
/// The cursor only knows the catalog size. It never looks at artwork
/// content; the view asks it for the current index and looks the
/// artwork up in the catalog.

use super::error::CursorError;

/// Current position in the gallery
///
/// Invariant: `0 <= current < len`, and `len >= 1`.
/// `next` and `previous` wrap around at both ends, so the positions
/// form a cycle and navigation never stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    current: usize,
    len: usize,
}

impl GalleryCursor {
    /// Create a cursor over `catalog_size` artworks
    ///
    /// An `initial_index` outside `[0, catalog_size)` is wrapped into range
    /// (so `-1` lands on the last artwork). Only an empty catalog is rejected.
    pub fn new(catalog_size: usize, initial_index: i64) -> Result<Self, CursorError> {
        if catalog_size < 1 {
            return Err(CursorError::InvalidConfiguration { catalog_size });
        }

        let current = initial_index.rem_euclid(catalog_size as i64) as usize;

        Ok(Self {
            current,
            len: catalog_size,
        })
    }

    /// Move to the next artwork, wrapping to the first after the last
    pub fn next(&mut self) -> usize {
        self.current = if self.current < self.len - 1 {
            self.current + 1
        } else {
            0
        };
        self.current
    }

    /// Move to the previous artwork, wrapping to the last before the first
    pub fn previous(&mut self) -> usize {
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            self.len - 1
        };
        self.current
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of positions in the cycle (the catalog size)
    pub fn len(&self) -> usize {
        self.len
    }
}
