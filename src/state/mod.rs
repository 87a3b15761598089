/// State management module
///
/// This module handles all application state, including:
/// - The navigation cursor over the catalog (cursor.rs)
/// - The artwork catalog, its file format and folder import (catalog.rs)
/// - Shared data structures (data.rs)
/// - Error types (error.rs)

pub mod catalog;
pub mod cursor;
pub mod data;
pub mod error;
