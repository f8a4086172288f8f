// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::{self, Gradient};
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

/// Whole-window page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternating section background (grids of cards).
pub fn section(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_section)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Dark strip used by page banners, the header top row and the footer.
pub fn banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.banner_background)),
        text_color: Some(colors.banner_text),
        ..Default::default()
    }
}

/// White bordered card.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Blue to purple gradient panel (mission card, expert profile).
pub fn brand_gradient(_theme: &Theme) -> container::Style {
    let linear = gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::BLUE_500)
        .add_stop(1.0, palette::PURPLE_600);
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(linear))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Translucent tile laid over a dark or gradient background.
pub fn glass(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS,
            ..palette::WHITE
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::GLASS_STRONG,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Small pill label with the given colors.
pub fn badge(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round avatar filled with the brand gradient.
pub fn avatar(_theme: &Theme) -> container::Style {
    let linear = gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::BLUE_600)
        .add_stop(1.0, palette::PURPLE_600);
    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(linear))),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::GRAY_200,
            width: 4.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Bullet dot in lists.
pub fn bullet(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
