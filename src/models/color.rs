//! Display colours for participants.
//!
//! Colour is purely presentational. The apportionment engine never looks
//! at it; the event store asks a [`ColorAssigner`] for one when a person
//! is added.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parses `#rrggbb` (the leading `#` is optional, hex digits are case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'{}' is not a #rrggbb colour", s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Picks a display colour for the `index`-th participant of an event.
pub trait ColorAssigner: Send + Sync {
    /// Returns the colour for the participant at `index` (0-based).
    fn assign(&self, index: usize) -> Color;
}

/// Cycles through a fixed palette.
#[derive(Debug, Clone)]
pub struct PaletteColorAssigner {
    palette: Vec<Color>,
}

impl PaletteColorAssigner {
    /// Fallback palette used when none is configured.
    pub const DEFAULT_PALETTE: [Color; 8] = [
        Color::rgb(0xe6, 0x19, 0x4b),
        Color::rgb(0x3c, 0xb4, 0x4b),
        Color::rgb(0x43, 0x63, 0xd8),
        Color::rgb(0xf5, 0x82, 0x31),
        Color::rgb(0x91, 0x1e, 0xb4),
        Color::rgb(0x46, 0xf0, 0xf0),
        Color::rgb(0xf0, 0x32, 0xe6),
        Color::rgb(0xbc, 0xf6, 0x0c),
    ];

    /// Creates an assigner over `palette`. An empty palette falls back to
    /// [`Self::DEFAULT_PALETTE`].
    pub fn new(palette: Vec<Color>) -> Self {
        if palette.is_empty() {
            Self::default()
        } else {
            Self { palette }
        }
    }
}

impl Default for PaletteColorAssigner {
    fn default() -> Self {
        Self {
            palette: Self::DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ColorAssigner for PaletteColorAssigner {
    fn assign(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }
}
