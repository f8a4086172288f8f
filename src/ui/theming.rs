// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the configured theme mode.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the page views.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_section: Color,
    pub surface_card: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Dark banner (header strip, page banners, footer) in both modes
    pub banner_background: Color,
    pub banner_text: Color,
    pub banner_text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::WHITE,
            surface_section: palette::GRAY_50,
            surface_card: palette::WHITE,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            banner_background: palette::GRAY_900,
            banner_text: palette::WHITE,
            banner_text_muted: palette::GRAY_300,

            brand_primary: palette::BLUE_600,
            brand_accent: palette::PURPLE_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_section: Color::from_rgb(0.09, 0.12, 0.18),
            surface_card: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_50,
            text_secondary: palette::GRAY_300,

            banner_background: Color::from_rgb(0.04, 0.06, 0.10),
            banner_text: palette::WHITE,
            banner_text_muted: palette::GRAY_300,

            brand_primary: palette::BLUE_400,
            brand_accent: palette::PURPLE_600,
        }
    }

    /// Scheme matching the active Iced theme.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The site is light-first: only an explicit dark system setting
            // switches to dark.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
