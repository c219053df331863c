//! nes-palette-gen library crate.
//!
//! Turns the NES PPU palette, stored as 3-bit RGB levels, into `0xRRGGBBAA`
//! literals ready to paste into an array. The binary prints the shipped
//! table; the modules are public so tests can drive them with other tables.

pub mod channel;
pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod palette;

pub use color::{format_entry, PaletteEntry, Rgba8888};
pub use config::EmitterConfig;
pub use emitter::{emit, render};
pub use error::PaletteError;
pub use palette::NES_PALETTE;
