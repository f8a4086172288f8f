// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple pages.
//!
//! # Components
//!
//! - [`photo`] - Portrait with an initials avatar fallback
//! - [`section_heading`], [`banner`], [`badge`] - Repeated page building blocks
//! - [`grid`] - Fixed-column layout for card lists

pub mod photo;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Row};
use iced::{Color, Element, Font, Length, Theme};

/// Bold variant of the default font.
pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Centers `content` and caps it at the page content width.
pub fn content_width<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
}

/// Centered title and subtitle opening a page section.
pub fn section_heading<'a, Message: 'a>(title: String, subtitle: String) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(text(title).size(typography::TITLE_MD).font(BOLD))
        .push(
            text(subtitle)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).text_secondary),
                }),
        )
}

/// Full-width dark banner with a page title.
pub fn banner<'a, Message: 'a>(title: String, subtitle: String) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(title).size(typography::TITLE_LG).font(BOLD))
        .push(
            text(subtitle)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::of(theme).banner_text_muted),
                }),
        );

    Container::new(content_width(inner).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .style(styles::container::banner)
        .into()
}

/// Small pill with a label.
pub fn badge<'a, Message: 'a>(
    label: String,
    background: Color,
    foreground: Color,
) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(background, foreground))
        .into()
}

/// Lays `items` out in rows of `columns` equally wide cells.
///
/// The last row is padded with empty cells so every card keeps the same width.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
) -> Column<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut filled = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Container::new(Column::new()).width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid
}
