// src/config.rs

//! Layout settings for the emitted array body.
//!
//! The generator has no runtime configuration; `main` always uses
//! `EmitterConfig::default()`. Tests build other layouts directly.

/// Controls how literals are laid out in rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Literals per output row.
    pub columns: usize,
    /// Written after every literal, including the last one in a row.
    pub terminator: String,
    /// Written between two literals on the same row.
    pub separator: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            columns: 4,
            terminator: ",".to_string(),
            separator: " ".to_string(),
        }
    }
}
