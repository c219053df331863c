// src/palette.rs

//! The NES PPU palette as 3-digit RGB levels.
//!
//! Values are taken from http://wiki.nesdev.com/w/index.php/PPU_palettes.
//! The 64 entries form 4 banks of 16. Entries `$xD..$xF` of each bank are
//! black.

use log::debug;

use crate::color::PaletteEntry;
use crate::error::PaletteError;

pub const BANK_SIZE: usize = 16;
pub const BANK_COUNT: usize = 4;
pub const PALETTE_SIZE: usize = BANK_SIZE * BANK_COUNT;

#[rustfmt::skip]
pub const NES_PALETTE: [&str; PALETTE_SIZE] = [
    "333", "014", "006", "326", "403", "503", "510", "420",
    "320", "120", "031", "040", "022", "000", "000", "000",
    "555", "036", "027", "407", "507", "704", "700", "630",
    "430", "140", "040", "053", "044", "000", "000", "000",
    "777", "357", "447", "637", "707", "737", "740", "750",
    "660", "360", "070", "276", "077", "000", "000", "000",
    "777", "567", "657", "757", "747", "755", "764", "772",
    "773", "572", "473", "276", "467", "000", "000", "000",
];

/// Iterates the table one bank (16 entries) at a time. A short final bank
/// is yielded as-is.
pub fn banks<'a>(table: &'a [&'a str]) -> impl Iterator<Item = &'a [&'a str]> {
    table.chunks(BANK_SIZE)
}

/// Checks every entry of `table`, stopping at the first bad one.
///
/// # Errors
/// `PaletteError::InvalidTableEntry` carrying the index of the offending
/// entry and the underlying format or channel error.
pub fn validate(table: &[&str]) -> Result<(), PaletteError> {
    for (index, raw) in table.iter().enumerate() {
        raw.parse::<PaletteEntry>()
            .map_err(|e| e.at_index(index))?;
    }
    debug!(
        "Palette table validated: {} entries in {} bank(s)",
        table.len(),
        banks(table).count()
    );
    Ok(())
}
