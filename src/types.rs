//! Core types and enums for fpe_hex.

use thiserror::Error;

/// Radix used by the command-line tool (hexadecimal).
pub const DEFAULT_RADIX: u32 = 16;

/// Smallest radix FF1 accepts.
pub const MIN_RADIX: u32 = 2;

/// Largest radix FF1 accepts (2^16).
pub const MAX_RADIX: u32 = 1 << 16;

/// Largest radix with a canonical character alphabet (`0-9a-zA-Z`).
pub const MAX_ALPHABET_RADIX: u32 = 62;

/// Number of Feistel rounds.
pub const ROUNDS: u8 = 10;

/// Minimum domain size: `radix^min_len` must reach this value.
pub const MIN_DOMAIN_SIZE: u64 = 100;

/// Maximum numeral string length (the length is encoded in four bytes of `P`).
pub const MAX_LEN: usize = u32::MAX as usize;

/// Maximum tweak length the 64-bit tweak file of the CLI may carry.
pub const CLI_MAX_TWEAK_LEN: usize = 8;

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

/// Construction parameters of an [`crate::Ff1`] context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherOptions {
    /// Alphabet size, `2..=65536`.
    pub radix: u32,
    /// Minimum accepted numeral string length. Never below the domain minimum
    /// of the radix; see [`min_len_for_radix`].
    pub min_len: usize,
    /// Upper bound on tweak length in bytes (`None` = only the 32-bit limit).
    pub max_tweak_len: Option<usize>,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self::for_radix(DEFAULT_RADIX)
    }
}

impl CipherOptions {
    /// Options for `radix` with the smallest admissible `min_len`.
    pub fn for_radix(radix: u32) -> Self {
        Self {
            radix,
            min_len: min_len_for_radix(radix),
            max_tweak_len: None,
        }
    }

    /// Raise the minimum input length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Limit tweaks to `max` bytes.
    pub fn with_max_tweak_len(mut self, max: usize) -> Self {
        self.max_tweak_len = Some(max);
        self
    }
}

/// Smallest `m >= 2` such that `radix^m >= 100`.
///
/// Returns 0 for radices outside `2..=65536`; construction rejects those anyway.
pub fn min_len_for_radix(radix: u32) -> usize {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return 0;
    }
    let mut len = 1;
    let mut domain = radix as u64;
    while domain < MIN_DOMAIN_SIZE {
        domain *= radix as u64;
        len += 1;
    }
    len.max(2)
}

/// Library error type (no panics for expected failures).
#[derive(Error, Debug)]
pub enum FpeError {
    #[error("invalid key length {0}: must be 16, 24 or 32 bytes")]
    InvalidKeyLength(usize),
    #[error("invalid radix {0}")]
    InvalidRadix(u32),
    #[error("invalid input length {len}: must be between {min} and {max}")]
    InvalidLength { len: usize, min: usize, max: usize },
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("invalid digit {digit} at position {position}")]
    InvalidDigit { digit: u32, position: usize },
    #[error("invalid tweak length {len}: must be at most {max} bytes")]
    InvalidTweakLength { len: usize, max: usize },
    #[error("block cipher failure: {0}")]
    PrimitiveFailure(&'static str),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("invalid hex")]
    Hex(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_len_matches_domain_bound() {
        assert_eq!(min_len_for_radix(2), 7);
        assert_eq!(min_len_for_radix(10), 2);
        assert_eq!(min_len_for_radix(16), 2);
        assert_eq!(min_len_for_radix(36), 2);
        assert_eq!(min_len_for_radix(100), 2);
        assert_eq!(min_len_for_radix(65536), 2);
    }

    #[test]
    fn out_of_range_radix_has_no_min_len() {
        assert_eq!(min_len_for_radix(1), 0);
        assert_eq!(min_len_for_radix(65537), 0);
    }

    #[test]
    fn default_options_are_hex() {
        let opts = CipherOptions::default();
        assert_eq!(opts.radix, 16);
        assert_eq!(opts.min_len, 2);
        assert_eq!(opts.max_tweak_len, None);
    }

    // Every variant is reachable from a library call; keep this match exhaustive.
    #[test]
    fn error_variants_render() {
        let errors = [
            FpeError::InvalidKeyLength(10),
            FpeError::InvalidRadix(1),
            FpeError::InvalidLength { len: 1, min: 2, max: 4 },
            FpeError::InvalidCharacter { ch: 'g', position: 3 },
            FpeError::InvalidDigit { digit: 16, position: 0 },
            FpeError::InvalidTweakLength { len: 9, max: 8 },
            FpeError::PrimitiveFailure("key schedule"),
            FpeError::Io(std::io::Error::other("eof")),
            FpeError::Hex(hex::FromHexError::OddLength),
        ];
        for err in &errors {
            let prefix = match err {
                FpeError::InvalidKeyLength(_) => "invalid key length",
                FpeError::InvalidRadix(_) => "invalid radix",
                FpeError::InvalidLength { .. } => "invalid input length",
                FpeError::InvalidCharacter { .. } => "invalid character",
                FpeError::InvalidDigit { .. } => "invalid digit",
                FpeError::InvalidTweakLength { .. } => "invalid tweak length",
                FpeError::PrimitiveFailure(_) => "block cipher failure",
                FpeError::Io(_) => "I/O error",
                FpeError::Hex(_) => "invalid hex",
            };
            assert!(err.to_string().starts_with(prefix), "{err}");
        }
    }
}
