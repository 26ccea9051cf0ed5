//! Color primitives.
//!
//! Contains the color types the rest of the crate is built on:
//! - Rgb: 24-bit true color with averaging, hex rendering, and record round-trips
//! - NamedColor: the terminal default plus the 16 standard ANSI colors
//! - Color: either a named color or an Rgb value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing colors from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("Unknown color name: {0}")]
    UnknownName(String),

    #[error("Hex color must look like #RRGGBB, got: {0}")]
    MalformedHex(String),
}

/// A 24-bit RGB color.
///
/// Channels are `u8`, so every representable value is a valid terminal
/// true-color triple. Two values with equal channels are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Component-wise mean of two colors.
    pub fn average(self, other: Rgb) -> Rgb {
        let mid = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb {
            red: mid(self.red, other.red),
            green: mid(self.green, other.green),
            blue: mid(self.blue, other.blue),
        }
    }

    /// Render as `#RRGGBB` with uppercase, zero-padded hex digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` (case-insensitive digits, leading `#` required).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseColorError::MalformedHex(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(malformed)?;
        // Exactly six hex digits: from_str_radix alone would also let a
        // leading `+` through.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| malformed())
        };
        Ok(Rgb {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

/// The terminal default plus the 16 standard ANSI colors.
///
/// The mapping to SGR codes is total and static: every name has exactly
/// one foreground code, and the background code is foreground + 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// SGR foreground code for this color.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Default => 39,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// The snake_case name used in records and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }
}

impl FromStr for NamedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "white" => Ok(Self::White),
            "bright_black" => Ok(Self::BrightBlack),
            "bright_red" => Ok(Self::BrightRed),
            "bright_green" => Ok(Self::BrightGreen),
            "bright_yellow" => Ok(Self::BrightYellow),
            "bright_blue" => Ok(Self::BrightBlue),
            "bright_magenta" => Ok(Self::BrightMagenta),
            "bright_cyan" => Ok(Self::BrightCyan),
            "bright_white" => Ok(Self::BrightWhite),
            other => Err(ParseColorError::UnknownName(other.to_string())),
        }
    }
}

/// A style color: either a named terminal color or a true-color value.
///
/// Serialized untagged, so named colors round-trip as their name string
/// and RGB values as a `{red, green, blue}` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb(Rgb),
}

impl Color {
    /// Whether this is the terminal default (the fallback case in merges).
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Color::Named(NamedColor::Default)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Default)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts a color name (`red`, `bright_cyan`, ...) or a `#RRGGBB` value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Ok(Color::Rgb(s.parse()?));
        }
        Ok(Color::Named(s.parse()?))
    }
}
