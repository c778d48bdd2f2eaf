use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Fill for candles with `close >= open`, independent of theme.
pub const UP_COLOR: Color = Color::from_hex(0x0ECB81);
/// Fill for candles with `close < open`, independent of theme.
pub const DOWN_COLOR: Color = Color::from_hex(0xF6465D);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolves a theme name; anything other than `dark` (case-insensitive,
    /// surrounding whitespace ignored) folds to `Light`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette::LIGHT,
            Self::Dark => ThemePalette::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub grid: Color,
}

impl ThemePalette {
    pub const LIGHT: Self = Self {
        background: Color::from_hex(0xF7F9FC),
        foreground: Color::from_hex(0x1E2329),
        muted: Color::from_hex(0x8892A0),
        grid: Color::from_hex(0xD9DEE7),
    };

    pub const DARK: Self = Self {
        background: Color::from_hex(0x0B0E11),
        foreground: Color::from_hex(0xEAECEF),
        muted: Color::from_hex(0x5E6673),
        grid: Color::from_hex(0x1E2329),
    };
}
