use iced::keyboard::{self, key};
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the state and ui modules
mod state;
mod ui;

use state::catalog::{self, Catalog};
use state::cursor::GalleryCursor;

/// Main application state
struct ArtSpace {
    /// The artworks being shown
    catalog: Catalog,
    /// Which artwork is on screen
    cursor: GalleryCursor,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// "Previous" button or left arrow
    Previous,
    /// "Next" button or right arrow
    Next,
    /// User clicked "Open Catalog…"
    OpenCatalog,
    /// User clicked "Import Folder…"
    ImportFolder,
    /// User clicked "Save Catalog…"
    SaveCatalog,
    /// Background catalog load or folder import finished
    CatalogLoaded(Result<Catalog, String>),
    /// Background catalog save finished
    CatalogSaved(Result<PathBuf, String>),
}

impl ArtSpace {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = Catalog::builtin();

        // The built-in catalog is never empty, so this cannot fail
        let cursor = catalog
            .cursor()
            .expect("Built-in catalog must contain artworks");

        println!("🎨 ArtSpace initialized with {} built-in artworks", catalog.len());

        // Pick up the user's catalog in the background if there is one
        let catalog_path = catalog::default_catalog_path();
        let task = if catalog_path.is_file() {
            Task::perform(catalog::load_catalog(catalog_path), Message::CatalogLoaded)
        } else {
            Task::none()
        };

        let mut app = ArtSpace {
            catalog,
            cursor,
            status: String::new(),
        };
        app.status = app.position_status();

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Previous => {
                self.cursor.previous();
                self.status = self.position_status();
                Task::none()
            }
            Message::Next => {
                self.cursor.next();
                self.status = self.position_status();
                Task::none()
            }
            Message::OpenCatalog => {
                let file = FileDialog::new()
                    .set_title("Open Art Catalog")
                    .add_filter("Catalog", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());
                    return Task::perform(catalog::load_catalog(path), Message::CatalogLoaded);
                }

                Task::none()
            }
            Message::ImportFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Folder with Artwork Images")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Importing from {}...", folder_path.display());
                    return Task::perform(
                        catalog::import_folder(folder_path),
                        Message::CatalogLoaded,
                    );
                }

                Task::none()
            }
            Message::SaveCatalog => {
                let file = FileDialog::new()
                    .set_title("Save Art Catalog")
                    .add_filter("Catalog", &["json"])
                    .set_file_name("catalog.json")
                    .save_file();

                if let Some(path) = file {
                    return Task::perform(
                        catalog::save_catalog(self.catalog.clone(), path),
                        Message::CatalogSaved,
                    );
                }

                Task::none()
            }
            Message::CatalogSaved(Ok(path)) => {
                self.status = format!("✅ Catalog saved to {}", path.display());
                Task::none()
            }
            Message::CatalogSaved(Err(e)) => {
                eprintln!("⚠️  Failed to save catalog: {}", e);
                self.status = format!("❌ {}", e);
                Task::none()
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                match catalog.cursor() {
                    Ok(cursor) => {
                        println!("📚 Showing catalog of {} artworks", catalog.len());
                        self.catalog = catalog;
                        self.cursor = cursor;
                        self.status = self.position_status();
                    }
                    Err(e) => {
                        eprintln!("⚠️  Rejected catalog: {}", e);
                        self.status = format!("❌ {}", e);
                    }
                }
                Task::none()
            }
            Message::CatalogLoaded(Err(e)) => {
                // Keep showing the current catalog
                eprintln!("⚠️  Failed to load catalog: {}", e);
                self.status = format!("❌ {}", e);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            button("Open Catalog…")
                .on_press(Message::OpenCatalog)
                .padding(10),
            button("Import Folder…")
                .on_press(Message::ImportFolder)
                .padding(10),
            button("Save Catalog…")
                .on_press(Message::SaveCatalog)
                .padding(10),
        ]
        .spacing(10);

        let artwork: Element<'_, Message> = match self.catalog.get(self.cursor.current()) {
            Some(artwork) => ui::gallery::view(artwork),
            None => text("Nothing to show").into(),
        };

        let content: Column<'_, Message> = column![
            toolbar,
            artwork,
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(16)
        .align_x(Alignment::Center);

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    fn title(&self) -> String {
        match self.catalog.get(self.cursor.current()) {
            Some(artwork) => format!("ArtSpace: {}", artwork.title),
            None => String::from("ArtSpace"),
        }
    }

    /// Arrow keys navigate like the buttons
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// "3 / 6"
    fn position_status(&self) -> String {
        format!("{} / {}", self.cursor.current() + 1, self.cursor.len())
    }
}

fn handle_key(pressed: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match pressed.as_ref() {
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(ArtSpace::title, ArtSpace::update, ArtSpace::view)
        .theme(ArtSpace::theme)
        .subscription(ArtSpace::subscription)
        .centered()
        .run_with(ArtSpace::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_navigation() {
        let none = keyboard::Modifiers::default();
        assert!(matches!(
            handle_key(keyboard::Key::Named(key::Named::ArrowLeft), none),
            Some(Message::Previous)
        ));
        assert!(matches!(
            handle_key(keyboard::Key::Named(key::Named::ArrowRight), none),
            Some(Message::Next)
        ));
        assert!(handle_key(keyboard::Key::Named(key::Named::Enter), none).is_none());
    }

    #[test]
    fn test_buttons_wrap_around_catalog() {
        let catalog = Catalog::builtin();
        let mut app = ArtSpace {
            cursor: catalog.cursor().unwrap(),
            catalog,
            status: String::new(),
        };

        let _ = app.update(Message::Previous);
        assert_eq!(app.cursor.current(), 5);
        assert_eq!(app.status, "6 / 6");

        let _ = app.update(Message::Next);
        let _ = app.update(Message::Next);
        assert_eq!(app.cursor.current(), 1);
        assert_eq!(app.status, "2 / 6");
    }

    #[test]
    fn test_failed_load_keeps_catalog() {
        let catalog = Catalog::builtin();
        let mut app = ArtSpace {
            cursor: catalog.cursor().unwrap(),
            catalog,
            status: String::new(),
        };
        let _ = app.update(Message::Next);

        let _ = app.update(Message::CatalogLoaded(Err("bad file".to_string())));
        assert_eq!(app.catalog.len(), 6);
        assert_eq!(app.cursor.current(), 1);
        assert!(app.status.contains("bad file"));
    }

    #[test]
    fn test_loaded_catalog_replaces_cursor() {
        let catalog = Catalog::builtin();
        let mut app = ArtSpace {
            cursor: catalog.cursor().unwrap(),
            catalog,
            status: String::new(),
        };
        let _ = app.update(Message::Next);

        let json = r#"{ "initial_index": -1, "artworks": [
            { "image": "a.jpg", "title": "A", "artist": "x" },
            { "image": "b.jpg", "title": "B", "artist": "x" }
        ] }"#;
        let loaded = Catalog::from_json(json, std::path::Path::new("/tmp")).unwrap();

        let _ = app.update(Message::CatalogLoaded(Ok(loaded)));
        assert_eq!(app.cursor.len(), 2);
        assert_eq!(app.cursor.current(), 1);
        assert_eq!(app.title(), "ArtSpace: B");
    }

    #[test]
    fn test_save_result_reported_in_status() {
        let catalog = Catalog::builtin();
        let mut app = ArtSpace {
            cursor: catalog.cursor().unwrap(),
            catalog,
            status: String::new(),
        };

        let _ = app.update(Message::CatalogSaved(Err("disk full".to_string())));
        assert_eq!(app.status, "❌ disk full");

        let _ = app.update(Message::CatalogSaved(Ok(PathBuf::from("/gallery/catalog.json"))));
        assert_eq!(app.status, "✅ Catalog saved to /gallery/catalog.json");
        assert_eq!(app.cursor.current(), 0);
    }
}
