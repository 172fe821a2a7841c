//! Radix codec: maps numeral-string characters to digits and back.
//!
//! Radix 2..=36 uses `0-9a-z` and accepts either letter case on input.
//! Radix 37..=62 uses `0-9a-zA-Z` and is case-sensitive. Larger radices have
//! no character alphabet and must go through the digit-level API.

use crate::types::{FpeError, MAX_ALPHABET_RADIX, MIN_RADIX};

const ALPHABET: &[u8; MAX_ALPHABET_RADIX as usize] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Whether `radix` has a canonical character alphabet.
pub fn has_alphabet(radix: u32) -> bool {
    (MIN_RADIX..=MAX_ALPHABET_RADIX).contains(&radix)
}

fn check_radix(radix: u32) -> Result<(), FpeError> {
    if has_alphabet(radix) {
        Ok(())
    } else {
        Err(FpeError::InvalidRadix(radix))
    }
}

fn char_value(ch: char, radix: u32) -> Option<u16> {
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 10,
        'A'..='Z' if radix <= 36 => ch as u32 - 'A' as u32 + 10,
        'A'..='Z' => ch as u32 - 'A' as u32 + 36,
        _ => return None,
    };
    (value < radix).then_some(value as u16)
}

/// Decode a numeral string into digits.
///
/// # Errors
///
/// `InvalidRadix` if the radix has no alphabet, `InvalidCharacter` for the
/// first character outside it.
pub fn decode(s: &str, radix: u32) -> Result<Vec<u16>, FpeError> {
    check_radix(radix)?;
    s.chars()
        .enumerate()
        .map(|(position, ch)| {
            char_value(ch, radix).ok_or(FpeError::InvalidCharacter { ch, position })
        })
        .collect()
}

/// Encode digits as a numeral string (lower case for radix <= 36).
///
/// # Errors
///
/// `InvalidRadix` if the radix has no alphabet, `InvalidDigit` if a digit is
/// not below the radix.
pub fn encode(digits: &[u16], radix: u32) -> Result<String, FpeError> {
    check_radix(radix)?;
    digits
        .iter()
        .enumerate()
        .map(|(position, &d)| {
            if u32::from(d) < radix {
                Ok(ALPHABET[d as usize] as char)
            } else {
                Err(FpeError::InvalidDigit {
                    digit: d.into(),
                    position,
                })
            }
        })
        .collect()
}

/// Canonical spelling of a numeral string (`encode(decode(s))`).
pub fn normalize(s: &str, radix: u32) -> Result<String, FpeError> {
    encode(&decode(s, radix)?, radix)
}
