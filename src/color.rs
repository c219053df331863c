// src/color.rs

//! Defines `PaletteEntry` (a validated 3-digit NES color) and `Rgba8888`,
//! plus the conversion from one to the hex literal the generator prints.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::channel::{self, ALPHA_LEVEL, MAX_LEVEL};
use crate::error::PaletteError;

/// Number of characters in a palette entry: one digit each for R, G and B.
pub const ENTRY_LEN: usize = 3;

/// One palette table entry: red, green and blue levels, each in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteEntry {
    /// Returns the levels in channel order.
    pub fn levels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for PaletteEntry {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Count chars, not bytes, so a multi-byte char can't pass as a digit.
        if s.chars().count() != ENTRY_LEN || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaletteError::InvalidEntryFormat(s.to_string()));
        }

        let mut levels = [0u8; ENTRY_LEN];
        for (slot, c) in levels.iter_mut().zip(s.bytes()) {
            let level = c - b'0';
            if level > MAX_LEVEL {
                return Err(PaletteError::InvalidChannelValue((c as char).to_string()));
            }
            *slot = level;
        }

        Ok(PaletteEntry {
            r: levels[0],
            g: levels[1],
            b: levels[2],
        })
    }
}

/// A 32-bit color with one byte per channel. Alpha is always opaque for
/// colors built from a `PaletteEntry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8888 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Expands R, G, B and then the fixed alpha level, in that order.
    pub fn from_entry(entry: &PaletteEntry) -> Result<Self, PaletteError> {
        Ok(Self::new(
            channel::expand(entry.r)?,
            channel::expand(entry.g)?,
            channel::expand(entry.b)?,
            channel::expand(ALPHA_LEVEL)?,
        ))
    }

    /// Packs the channels as `0xRRGGBBAA`.
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl fmt::Display for Rgba8888 {
    /// Writes the color as a hex literal, e.g. `0x7F7F7FFF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Converts one raw table entry (e.g. `"333"`) into its hex literal
/// (`"0x7F7F7FFF"`).
///
/// # Errors
/// `InvalidEntryFormat` if `entry` is not exactly 3 decimal digits, and
/// `InvalidChannelValue` if one of the digits is above 7.
pub fn format_entry(entry: &str) -> Result<String, PaletteError> {
    let parsed: PaletteEntry = entry.parse()?;
    let color = Rgba8888::from_entry(&parsed)?;
    trace!("{} -> {:?}", entry, color);
    Ok(color.to_string())
}
