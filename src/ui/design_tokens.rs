// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for colors, spacing, sizes and typography.

## Organization

- **Palette**: Base colors (grays, brand blue and purple, accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (photos, canvas, content width)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use ai_center::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let banner_text = Color {
    a: opacity::MUTED,
    ..palette::WHITE
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Grayscale (cool)
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);

    // Brand blue
    pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847);

    // Accents
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918);
    pub const CYAN_400: Color = Color::from_rgb(0.133, 0.827, 0.933);
    pub const ORANGE_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const GLASS: f32 = 0.1;
    pub const GLASS_STRONG: f32 = 0.2;
    pub const BORDER_ON_DARK: f32 = 0.3;
    pub const MUTED: f32 = 0.75;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Portrait in the experts grid.
    pub const PHOTO_CARD: f32 = 128.0;
    /// Portrait in the expert detail header.
    pub const PHOTO_DETAIL: f32 = 192.0;
    /// Height of the home page network canvas.
    pub const NETWORK_CANVAS_HEIGHT: f32 = 260.0;
    /// Maximum width of page content.
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    /// Height of the header bar rows.
    pub const HEADER_ROW_HEIGHT: f32 = 44.0;
    /// Bullet in achievement lists.
    pub const BULLET: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, largest first.

    /// Hero headline
    pub const DISPLAY: f32 = 44.0;
    /// Page banners
    pub const TITLE_LG: f32 = 36.0;
    /// Section headings
    pub const TITLE_MD: f32 = 28.0;
    /// Card titles
    pub const TITLE_SM: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges, dates
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS < opacity::GLASS_STRONG);

    // Sizing validation
    assert!(sizing::PHOTO_DETAIL > sizing::PHOTO_CARD);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::SECTION, spacing::XL * 2.0);
    }
}
