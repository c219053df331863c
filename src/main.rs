// In src/main.rs

use std::io::{self, BufWriter};

use anyhow::Context; // For context on Results
use log::{debug, info};

use nes_palette_gen::{emit, palette, EmitterConfig, NES_PALETTE};

/// Prints the NES palette as rows of `0xRRGGBBAA,` literals on stdout.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout holds nothing but the literals.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Generating RGBA literals for {} palette entries", NES_PALETTE.len());
    for (bank, entries) in palette::banks(&NES_PALETTE).enumerate() {
        debug!("Bank {}: {}", bank, entries.join(","));
    }

    let config = EmitterConfig::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(&NES_PALETTE, &config, &mut out).context("Failed to emit NES palette")?;

    info!("Done.");
    Ok(())
}
