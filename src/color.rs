//! RGB colors as used by `fill`, `stroke` and friends.
//!
//! Colors are written as `#rrggbb` and read from either a color keyword
//! (see [`crate::color_names`]) or a `#rgb` / `#rrggbb` hex string. The alpha
//! channel is carried around but never written, so it comes back as 255 after
//! a round trip through text.

use std::fmt;
use std::str::FromStr;

use crate::color_names;
use crate::error::SvgError;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb`. Hex digits may be in either case.
    pub fn from_hex(s: &str) -> Result<Self, SvgError> {
        if s.len() != 4 && s.len() != 7 {
            return Err(SvgError::InvalidFormat(format!(
                "{s:?}: hex color must be 4 or 7 characters long"
            )));
        }

        let bytes = s.as_bytes();
        if bytes[0] != b'#' {
            return Err(SvgError::InvalidFormat(format!(
                "{s:?}: hex color must start with '#'"
            )));
        }

        let mut digits = [0u8; 6];
        let short = bytes.len() == 4;
        for (i, &byte) in bytes[1..].iter().enumerate() {
            let d = (byte as char).to_digit(16).ok_or_else(|| {
                SvgError::InvalidFormat(format!("{s:?}: invalid hex digit {:?}", byte as char))
            })? as u8;

            // #rgb expands each digit by duplication: #25f -> #2255ff
            if short {
                digits[i * 2] = d;
                digits[i * 2 + 1] = d;
            } else {
                digits[i] = d;
            }
        }

        Ok(Self::rgb(
            (digits[0] << 4) | digits[1],
            (digits[2] << 4) | digits[3],
            (digits[4] << 4) | digits[5],
        ))
    }

    /// Look up a color keyword such as `navy`.
    pub fn from_name(name: &str) -> Result<Self, SvgError> {
        let hex = color_names::resolve(name)?;
        Self::from_hex(&format!("#{hex}"))
    }

    /// Format an optional color, giving an empty string for `None`.
    pub fn format_optional(color: Option<&Color>) -> String {
        color.map(Color::to_string).unwrap_or_default()
    }
}

impl FromStr for Color {
    type Err = SvgError;

    /// Color keywords win over hex; if neither matches, the hex error is reported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).or_else(|_| Self::from_hex(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
