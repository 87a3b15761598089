/// Gallery screen widgets
///
/// Layout, top to bottom: framed artwork image, information card
/// (title, artist, year), Previous/Next buttons.
use iced::font::{self, Font};
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, Image, Space};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Shadow, Theme, Vector};

use crate::state::data::Artwork;
use crate::Message;

/// Frame size, 0.8 aspect ratio (portrait)
const FRAME_WIDTH: f32 = 320.0;
const FRAME_HEIGHT: f32 = 400.0;

/// White passe-partout around the image
const MAT_WIDTH: f32 = 24.0;

/// Information card background (#F5F1FF)
const CARD_BACKGROUND: Color = Color::from_rgb(0.961, 0.945, 1.0);

const BUTTON_WIDTH: f32 = 154.0;
const BUTTON_HEIGHT: f32 = 40.0;

const LIGHT: Font = Font {
    weight: font::Weight::Light,
    ..Font::DEFAULT
};

const EXTRA_BOLD: Font = Font {
    weight: font::Weight::ExtraBold,
    ..Font::DEFAULT
};

/// The whole gallery page for one artwork
pub fn view<'a>(artwork: &'a Artwork) -> Element<'a, Message> {
    column![
        artwork_frame(artwork),
        Space::with_height(48),
        information_card(artwork),
        Space::with_height(16),
        navigation_row(),
    ]
    .width(FRAME_WIDTH)
    .align_x(Alignment::Center)
    .into()
}

/// Artwork image with a white mat and drop shadow.
/// Shows a placeholder when the image file is missing.
fn artwork_frame<'a>(artwork: &'a Artwork) -> Element<'a, Message> {
    let content: Element<'a, Message> = if artwork.image_found {
        Image::new(Handle::from_path(&artwork.image))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        container(
            text(format!("Image not found:\n{}", artwork.image.display()))
                .size(14)
                .color(Color::from_rgb(0.45, 0.45, 0.45)),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    };

    container(content)
        .padding(MAT_WIDTH)
        .width(FRAME_WIDTH)
        .height(FRAME_HEIGHT)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::WHITE.into()),
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}

/// Title on the first line, "Artist (year)" on the second
fn information_card<'a>(artwork: &'a Artwork) -> Element<'a, Message> {
    let year = if artwork.year.is_empty() {
        String::new()
    } else {
        format!("({})", artwork.year)
    };

    let content = column![
        text(&artwork.title).size(22).font(LIGHT),
        row![
            text(&artwork.artist).size(18).font(EXTRA_BOLD),
            Space::with_width(4),
            text(year).size(18).font(LIGHT),
        ],
    ]
    .spacing(8);

    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(CARD_BACKGROUND.into()),
            text_color: Some(Color::BLACK),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn navigation_row<'a>() -> Element<'a, Message> {
    row![
        button(text("Previous"))
            .on_press(Message::Previous)
            .width(BUTTON_WIDTH)
            .height(BUTTON_HEIGHT),
        horizontal_space(),
        button(text("Next"))
            .on_press(Message::Next)
            .width(BUTTON_WIDTH)
            .height(BUTTON_HEIGHT),
    ]
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .into()
}
