// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (calls to action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BLUE_500,
        button::Status::Disabled => palette::GRAY_300,
        _ => palette::BLUE_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::BLUE_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Outlined button drawn on a dark banner.
pub fn outline_on_dark(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(palette::WHITE), palette::GRAY_900),
        _ => (None, palette::WHITE),
    };
    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link, brand colored.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => colors.brand_accent,
            _ => colors.brand_primary,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header navigation entry; `active` marks the current page.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let text_color = if active || status == button::Status::Hovered {
            colors.brand_primary
        } else {
            colors.text_primary
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    colors.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: if active { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Muted link in the dark top strip and footer.
pub fn on_dark_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::WHITE,
        _ => Color {
            a: opacity::MUTED,
            ..palette::WHITE
        },
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Pill showing the other language.
pub fn language_toggle(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::BORDER_ON_DARK,
        _ => opacity::GLASS_STRONG,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            color: Color {
                a: opacity::BORDER_ON_DARK,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable card (experts grid).
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: colors.text_primary,
        border: Border {
            color: if hovered {
                colors.brand_primary
            } else {
                colors.border
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if hovered { shadow::MD } else { shadow::SM },
        snap: true,
    }
}
