// SPDX-License-Identifier: MPL-2.0
//! Portrait with fallback.
//!
//! Only local files are displayed. Remote URLs and missing files render a
//! round avatar carrying the person's initials.

use crate::content::PhotoSource;
use crate::ui::components::BOLD;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{text, Container};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Renders `source` at `size`, falling back to the initials of `name`.
pub fn view<'a, Message: 'a>(
    source: Option<PhotoSource>,
    name: &str,
    size: f32,
) -> Element<'a, Message> {
    match source {
        Some(PhotoSource::Local(path)) if Path::new(path).is_file() => {
            Image::new(Handle::from_path(path))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .content_fit(ContentFit::Cover)
                .into()
        }
        _ => avatar(initials(name), size),
    }
}

fn avatar<'a, Message: 'a>(initials: String, size: f32) -> Element<'a, Message> {
    Container::new(text(initials).size(size * 0.35).font(BOLD))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::avatar)
        .into()
}

/// First letters of the last two words of `name`, upper-cased.
///
/// Titles such as "Prof." or "Dr." come first, so the last two words are the
/// given name and the family name.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let start = words.len().saturating_sub(2);
    words[start..]
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
