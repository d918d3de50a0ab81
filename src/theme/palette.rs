use ratatui::style::Color;

use crate::content::TruthTier;
use crate::prefs::ThemeMode;

/// Colors used by rendering code for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Card and modal background.
    pub card: Color,
    /// Card borders.
    pub border: Color,
    /// Headings and primary text.
    pub text: Color,
    /// Secondary text (subtitles, authors).
    pub subtext: Color,
    /// Body copy.
    pub body: Color,
    /// Placeholders and disabled items.
    pub muted: Color,
    /// Brand accent.
    pub saffron: Color,
    /// Brand green; high truth tier.
    pub green: Color,
    /// Informational accent.
    pub blue: Color,
    /// Medium truth tier; XP star.
    pub yellow: Color,
    /// Low truth tier; errors.
    pub red: Color,
    /// Secondary accent.
    pub teal: Color,
}

/// Brand colors shared by both modes.
const SAFFRON: Color = Color::Rgb(0xFF, 0x99, 0x33);
const GREEN: Color = Color::Rgb(0x13, 0x88, 0x08);
const BLUE: Color = Color::Rgb(0x4A, 0x90, 0xE2);
const YELLOW: Color = Color::Rgb(0xFF, 0xD9, 0x3D);
const RED: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
const TEAL: Color = Color::Rgb(0x4E, 0xCD, 0xC4);

impl Palette {
    /// Light mode.
    pub const LIGHT: Self = Self {
        bg: Color::Rgb(0xFF, 0xFD, 0xF5),
        card: Color::Rgb(0xFF, 0xFF, 0xFF),
        border: Color::Rgb(0xE0, 0xE0, 0xE0),
        text: Color::Rgb(0x11, 0x11, 0x11),
        subtext: Color::Rgb(0x66, 0x66, 0x66),
        body: Color::Rgb(0x33, 0x33, 0x33),
        muted: Color::Rgb(0x99, 0x99, 0x99),
        saffron: SAFFRON,
        green: GREEN,
        blue: BLUE,
        yellow: YELLOW,
        red: RED,
        teal: TEAL,
    };

    /// Dark mode.
    pub const DARK: Self = Self {
        bg: Color::Rgb(0x11, 0x11, 0x11),
        card: Color::Rgb(0x1A, 0x1A, 0x1A),
        border: Color::Rgb(0x33, 0x33, 0x33),
        text: Color::Rgb(0xFF, 0xFF, 0xFF),
        subtext: Color::Rgb(0xAA, 0xAA, 0xAA),
        body: Color::Rgb(0xDD, 0xDD, 0xDD),
        muted: Color::Rgb(0x88, 0x88, 0x88),
        saffron: SAFFRON,
        green: GREEN,
        blue: BLUE,
        yellow: YELLOW,
        red: RED,
        teal: TEAL,
    };

    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// Badge color for a truth tier.
    #[must_use]
    pub const fn tier_color(&self, tier: TruthTier) -> Color {
        match tier {
            TruthTier::Green => self.green,
            TruthTier::Yellow => self.yellow,
            TruthTier::Red => self.red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_differ_in_background_but_share_brand() {
        let l = Palette::for_mode(ThemeMode::Light);
        let d = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(l.bg, d.bg);
        assert_eq!(l.saffron, d.saffron);
    }

    #[test]
    fn tier_colors_follow_score() {
        let p = Palette::LIGHT;
        assert_eq!(p.tier_color(TruthTier::classify(0.9)), GREEN);
        assert_eq!(p.tier_color(TruthTier::classify(0.7)), YELLOW);
        assert_eq!(p.tier_color(TruthTier::classify(0.5)), RED);
    }
}
