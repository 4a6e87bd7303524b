//! Colors and the theme contract used when drawing a pitch.

use std::fmt;
use std::str::FromStr;

use crate::errors::PitchError;

/// Color as handed to a canvas.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// CSS color keyword, stored lowercase
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::Rgba(0, 0, 0, 0);

    /// Alpha in `0.0..=1.0`; named colors are opaque
    pub fn alpha(&self) -> f64 {
        match self {
            Color::Rgba(_, _, _, a) => f64::from(*a) / 255.0,
            Color::Rgb(..) | Color::Named(_) => 1.0,
        }
    }
}

fn hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

impl FromStr for Color {
    type Err = PitchError;

    /// Accepts `#rrggbb`, `#rrggbbaa` and CSS color keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PitchError::InvalidColor {
            value: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| hex_byte(&hex[i..i + 2]).ok_or_else(invalid);
            return match hex.len() {
                6 => Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?)),
                8 => Ok(Color::Rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
                _ => Err(invalid()),
            };
        }

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            let name = trimmed.to_ascii_lowercase();
            if name == "transparent" {
                return Ok(Color::TRANSPARENT);
            }
            return Ok(Color::Named(name));
        }
        Err(invalid())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba(r, g, b, a) => write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

/// Colors a pitch drawing pulls from
pub trait Theme {
    fn background(&self) -> Color;
    fn text(&self) -> Color;
    /// Pitch marking lines
    fn border(&self) -> Color;
    /// Default color of annotation lines
    fn line(&self) -> Color;
    fn home_team(&self) -> Color;
    fn away_team(&self) -> Color;
    /// Shirt numbers drawn over player markers
    fn number(&self) -> Color;
}

/// Light or dark variant of the default theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl FromStr for ThemeVariant {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeVariant::Light),
            "dark" => Ok(ThemeVariant::Dark),
            _ => Err(PitchError::InvalidThemeVariant {
                value: s.to_string(),
            }),
        }
    }
}

// Bootstrap 5.3 palette
const GRAY_100: Color = Color::Rgb(0xf8, 0xf9, 0xfa);
const GRAY_300: Color = Color::Rgb(0xde, 0xe2, 0xe6);
const GRAY_500: Color = Color::Rgb(0xad, 0xb5, 0xbd);
const GRAY_900: Color = Color::Rgb(0x21, 0x25, 0x29);
const RED_500: Color = Color::Rgb(0xdc, 0x35, 0x45);
const BLUE_500: Color = Color::Rgb(0x0d, 0x6e, 0xfd);

/// Bootstrap-colored theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultTheme {
    pub variant: ThemeVariant,
}

impl DefaultTheme {
    pub fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
        }
    }

    pub fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
        }
    }

    fn is_dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }
}

impl Theme for DefaultTheme {
    fn background(&self) -> Color {
        if self.is_dark() { GRAY_900 } else { GRAY_100 }
    }

    fn text(&self) -> Color {
        if self.is_dark() { Color::WHITE } else { Color::BLACK }
    }

    fn border(&self) -> Color {
        GRAY_300
    }

    fn line(&self) -> Color {
        GRAY_500
    }

    fn home_team(&self) -> Color {
        RED_500
    }

    fn away_team(&self) -> Color {
        BLUE_500
    }

    fn number(&self) -> Color {
        Color::WHITE
    }
}
