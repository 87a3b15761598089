/// User interface building blocks
///
/// - Artwork frame, information card and navigation row (gallery.rs)

pub mod gallery;
