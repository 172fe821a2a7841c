//! Reading key, tweak and input text.
//!
//! Key and tweak files hold hex text. Their lines are joined with `\n` (so
//! a trailing newline or CRLF line ending is harmless) and the text buffer is
//! wiped on drop, on error paths too.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use secrecy::SecretSlice;
use zeroize::Zeroizing;

use crate::types::FpeError;

/// Read all of `reader` and join its lines with `\n`.
///
/// Line terminators (`\n` or `\r\n`) are dropped, so the final line never
/// ends in a newline.
///
/// # Errors
///
/// Returns `FpeError::Io` if reading fails or the data is not UTF-8.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Zeroizing<String>, FpeError> {
    let mut raw = Zeroizing::new(String::new());
    reader.read_to_string(&mut raw)?;
    Ok(Zeroizing::new(raw.lines().collect::<Vec<_>>().join("\n")))
}

/// Read a text file line by line (see [`read_lines`]).
pub fn read_text_file(path: &Path) -> Result<Zeroizing<String>, FpeError> {
    let text = read_lines(BufReader::new(File::open(path)?))?;
    debug!("read {} characters from {}", text.len(), path.display());
    Ok(text)
}

/// Decode hex text into a secret byte buffer.
///
/// # Errors
///
/// Returns `FpeError::Hex` for odd-length text or non-hex characters.
pub fn decode_hex_secret(text: &str) -> Result<SecretSlice<u8>, FpeError> {
    let bytes = hex::decode(text)?;
    Ok(SecretSlice::from(bytes))
}

/// Read and decode a hex key or tweak file.
pub fn load_hex_file(path: &Path) -> Result<SecretSlice<u8>, FpeError> {
    decode_hex_secret(&read_text_file(path)?)
}

/// Read the whole numeral input (lines joined with `\n`).
///
/// The plaintext stays in a zeroizing buffer, like key text.
pub fn read_input<R: BufRead>(reader: R) -> Result<Zeroizing<String>, FpeError> {
    let text = read_lines(reader)?;
    debug!("read {} input characters", text.len());
    Ok(text)
}
