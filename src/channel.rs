// src/channel.rs

//! Channel expansion between the NES 3-bit intensity levels and 8-bit
//! display intensities.
//!
//! A level `n` in `0..=7` maps to `(n + 1) * 32 - 1`, which spreads the
//! eight levels evenly over `31..=255` with the top level landing on 255.

use crate::error::PaletteError;

/// Highest 3-bit channel level.
pub const MAX_LEVEL: u8 = 7;

/// Level used for the alpha channel. NES colors carry no alpha; this is the
/// fully opaque value.
pub const ALPHA_LEVEL: u8 = MAX_LEVEL;

const LEVEL_STEP: u16 = 32;

/// Expands a 3-bit channel level to an 8-bit intensity.
///
/// # Errors
/// Returns `PaletteError::InvalidChannelValue` if `level` is above
/// [`MAX_LEVEL`].
pub fn expand(level: u8) -> Result<u8, PaletteError> {
    if level > MAX_LEVEL {
        return Err(PaletteError::InvalidChannelValue(level.to_string()));
    }
    // (7 + 1) * 32 - 1 = 255, so the cast below never truncates.
    Ok(((u16::from(level) + 1) * LEVEL_STEP - 1) as u8)
}

/// Parses a single decimal digit and expands it.
pub fn expand_digit(digit: char) -> Result<u8, PaletteError> {
    let level = digit
        .to_digit(10)
        .ok_or_else(|| PaletteError::InvalidChannelValue(digit.to_string()))?;
    expand(level as u8)
}

/// Inverse of [`expand`]. Returns `None` for intensities `expand` never
/// produces.
pub fn contract(intensity: u8) -> Option<u8> {
    let next = u16::from(intensity) + 1;
    if next % LEVEL_STEP != 0 {
        return None;
    }
    Some((next / LEVEL_STEP - 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_matches_formula_for_every_level() {
        for level in 0..=MAX_LEVEL {
            let expected = (u32::from(level) + 1) * 32 - 1;
            assert_eq!(u32::from(expand(level).unwrap()), expected);
        }
    }

    #[test]
    fn expand_covers_exactly_the_eight_intensities() {
        let produced: Vec<u8> = (0..=MAX_LEVEL).map(|l| expand(l).unwrap()).collect();
        assert_eq!(produced, vec![31, 63, 95, 127, 159, 191, 223, 255]);
    }

    #[test]
    fn alpha_level_expands_to_opaque() {
        assert_eq!(expand(ALPHA_LEVEL).unwrap(), 0xFF);
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        match expand(8) {
            Err(PaletteError::InvalidChannelValue(v)) => assert_eq!(v, "8"),
            other => panic!("Expected InvalidChannelValue, got {:?}", other),
        }
        assert!(expand(200).is_err());
    }

    #[test]
    fn expand_digit_parses_and_rejects() {
        assert_eq!(expand_digit('3').unwrap(), 0x7F);
        assert_eq!(expand_digit('0').unwrap(), 0x1F);
        match expand_digit('x') {
            Err(PaletteError::InvalidChannelValue(v)) => assert_eq!(v, "x"),
            other => panic!("Expected InvalidChannelValue, got {:?}", other),
        }
        assert!(matches!(
            expand_digit('9'),
            Err(PaletteError::InvalidChannelValue(_))
        ));
    }

    #[test]
    fn contract_inverts_expand() {
        for level in 0..=MAX_LEVEL {
            assert_eq!(contract(expand(level).unwrap()), Some(level));
        }
    }

    #[test]
    fn contract_rejects_intermediate_intensities() {
        assert_eq!(contract(0), None);
        assert_eq!(contract(32), None);
        assert_eq!(contract(254), None);
    }
}
