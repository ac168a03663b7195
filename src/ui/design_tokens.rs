// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the fixed dark look.
//!
//! The whole app renders on a near-black background with white headings,
//! gray body text and a single blue accent. There is no theme switching;
//! these constants are the one place color and spacing decisions live.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const SURFACE: Color = Color::from_rgb(0.067, 0.067, 0.067);
    pub const CARD: Color = Color::from_rgb(0.051, 0.051, 0.051);
    pub const WHITE: Color = Color::WHITE;

    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Blue accent used for links, topics and the refresh control.
    pub const ACCENT: Color = Color::from_rgb(0.29, 0.62, 1.0);
    /// Correct-answer green.
    pub const SUCCESS: Color = Color::from_rgb(0.133, 0.773, 0.369);
    /// Wrong-answer red.
    pub const DANGER: Color = Color::from_rgb(0.937, 0.267, 0.267);

    pub const BORDER: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const CHIP_OUTLINE: Color = Color::from_rgb(0.333, 0.333, 0.333);
}

// ============================================================================
// Spacing scale (8px grid, with a 4px half step)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Typography scale
// ============================================================================

pub mod typography {
    pub const HERO: f32 = 42.0;
    pub const H1: f32 = 32.0;
    pub const H2: f32 = 24.0;
    pub const TITLE: f32 = 22.0;
    pub const BODY: f32 = 16.0;
    pub const BODY_SM: f32 = 14.0;
    pub const LABEL: f32 = 12.0;
    pub const CAPTION: f32 = 10.0;
}

// ============================================================================
// Border radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Component sizing
// ============================================================================

pub mod sizing {
    /// Diameter of the lettered circle in front of each answer option.
    pub const OPTION_LETTER: f32 = 32.0;
    /// Loading spinner diameter.
    pub const SPINNER: f32 = 48.0;
    /// Active pagination dot width; inactive dots are [`DOT_HEIGHT`] wide.
    pub const DOT_ACTIVE_WIDTH: f32 = 24.0;
    pub const DOT_HEIGHT: f32 = 6.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn text_colors_are_distinct() {
        assert_ne!(palette::TEXT_PRIMARY, palette::TEXT_SECONDARY);
        assert_ne!(palette::TEXT_SECONDARY, palette::TEXT_MUTED);
    }
}
