//! Style descriptors and escape-sequence rendering.
//!
//! A `Style` bundles foreground/background colors with text attributes and
//! renders to a single ANSI escape sequence. Styles are immutable: the
//! `with_*` builders return a new value with one field replaced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Color;

/// Full reset: default foreground, default background, no attributes.
///
/// Emitted before styled text so rendering starts from a known state, and
/// after it when the style's `reset` flag is set.
pub const FULL_RESET: &str = "\x1b[39;49;0m";

/// Reset attributes only (`ESC[0m`).
pub const RESET_ATTRIBUTES: &str = "\x1b[0m";

/// An immutable style descriptor.
///
/// Default construction gives default colors, no attributes, and
/// `reset = true` (a trailing reset after styled text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub fore: Color,
    #[serde(default)]
    pub back: Color,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub dim: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub inverse: bool,
    #[serde(default = "default_reset")]
    pub reset: bool,
}

fn default_reset() -> bool {
    true
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fore: Color::default(),
            back: Color::default(),
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            strikethrough: false,
            inverse: false,
            reset: true,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fore(self, fore: impl Into<Color>) -> Self {
        Self {
            fore: fore.into(),
            ..self
        }
    }

    pub fn with_back(self, back: impl Into<Color>) -> Self {
        Self {
            back: back.into(),
            ..self
        }
    }

    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub fn with_dim(self, dim: bool) -> Self {
        Self { dim, ..self }
    }

    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    pub fn with_underline(self, underline: bool) -> Self {
        Self { underline, ..self }
    }

    pub fn with_strikethrough(self, strikethrough: bool) -> Self {
        Self {
            strikethrough,
            ..self
        }
    }

    pub fn with_inverse(self, inverse: bool) -> Self {
        Self { inverse, ..self }
    }

    /// Whether a trailing `FULL_RESET` is appended by `apply`.
    pub fn with_reset(self, reset: bool) -> Self {
        Self { reset, ..self }
    }

    /// Build the escape sequence for this style.
    ///
    /// Attribute codes come first - bold, italic, underline, strikethrough,
    /// dim, inverse, in that order, each included only when set - then the
    /// foreground sequence, then the background sequence. With no attributes
    /// set the prefix is the plain attribute reset `ESC[0m`.
    pub fn sequence(&self) -> String {
        let mut attrs = String::from("\x1b[0");
        for (on, code) in [
            (self.bold, "1"),
            (self.italic, "3"),
            (self.underline, "4"),
            (self.strikethrough, "9"),
            (self.dim, "2"),
            (self.inverse, "7"),
        ] {
            if on {
                attrs.push(';');
                attrs.push_str(code);
            }
        }
        attrs.push('m');

        let fore = match self.fore {
            Color::Named(name) => format!("\x1b[{}m", name.code()),
            Color::Rgb(c) => format!("\x1b[38;2;{};{};{}m", c.red, c.green, c.blue),
        };
        let back = match self.back {
            Color::Named(name) => format!("\x1b[{}m", name.code() + 10),
            Color::Rgb(c) => format!("\x1b[48;2;{};{};{}m", c.red, c.green, c.blue),
        };

        format!("{attrs}{fore}{back}")
    }

    /// Wrap `text` in this style's escape sequence.
    ///
    /// A full reset is emitted before the styled text so rendering starts
    /// from a known state. A trailing full reset is appended when `reset`
    /// is set; otherwise the style bleeds into whatever follows.
    pub fn apply(&self, text: &str) -> String {
        let trailer = if self.reset { FULL_RESET } else { "" };
        format!("{FULL_RESET}{}{text}{trailer}", self.sequence())
    }

    /// Layer this style on top of `base`.
    ///
    /// Colors keep this style's value unless it is the terminal default, in
    /// which case they fall back to `base`'s. Attribute flags are OR'd.
    /// The `reset` flag is deliberately not merged: the result keeps this
    /// style's `reset`, since the caller picked this style's rendering
    /// behavior.
    pub fn merge(self, base: Style) -> Style {
        Style {
            fore: if self.fore.is_default() {
                base.fore
            } else {
                self.fore
            },
            back: if self.back.is_default() {
                base.back
            } else {
                self.back
            },
            bold: self.bold || base.bold,
            dim: self.dim || base.dim,
            italic: self.italic || base.italic,
            underline: self.underline || base.underline,
            strikethrough: self.strikethrough || base.strikethrough,
            inverse: self.inverse || base.inverse,
            reset: self.reset,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sequence())
    }
}
