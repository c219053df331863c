// src/error.rs

//! Error type shared by the palette table, the channel expander, the color
//! formatter and the emitter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    /// A channel digit was not a decimal digit, or was outside 0-7.
    #[error("invalid channel value '{0}': expected a level in 0..=7")]
    InvalidChannelValue(String),
    /// An entry was not exactly three decimal digits.
    #[error("invalid palette entry '{0}': expected exactly 3 decimal digits")]
    InvalidEntryFormat(String),
    #[error("palette entry #{index} is invalid: {source}")]
    InvalidTableEntry {
        index: usize,
        #[source]
        source: Box<PaletteError>,
    },
    #[error("failed to write palette output: {0}")]
    Io(#[from] std::io::Error),
}

impl PaletteError {
    /// Attaches the table position of the entry that produced this error.
    pub fn at_index(self, index: usize) -> Self {
        PaletteError::InvalidTableEntry {
            index,
            source: Box::new(self),
        }
    }
}
