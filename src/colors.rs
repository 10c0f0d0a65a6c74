use std::fmt;
use std::str::FromStr;

/// Straight-alpha sRGB color, one byte per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Expected 6 or 8 hex digits.
    Length(usize),
    InvalidDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::Length(n) => write!(f, "expected 6 or 8 hex digits, got {}", n),
            ColorParseError::InvalidDigit(s) => write!(f, "invalid hex color '{}'", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Parses `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::Length(hex.chars().count()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Palette used when the host supplies no colors.
pub fn default_palette() -> Vec<Rgba> {
    vec![
        Rgba::rgb(0xEE, 0xEE, 0xEE),
        Rgba::rgb(0xF5, 0xA6, 0x23),
        Rgba::rgb(0x4A, 0x90, 0xE2),
        Rgba::rgb(0x7E, 0xD3, 0x21),
    ]
}
