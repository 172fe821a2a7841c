#![forbid(unsafe_code)]
//! # fpe_hex: FF1 format-preserving encryption of numeral strings.
//!
//! `fpe_hex` implements the FF1 mode of NIST SP 800-38G on top of AES and the
//! small amount of text handling the `ff1` command-line tool needs to encrypt
//! hex dumps in place: the ciphertext has the same length and alphabet as the
//! plaintext.
//!
//! ## Features
//! - **FF1** with AES-128/192/256 and any radix from 2 to 65536
//! - **String API** over `0-9a-z` (radix <= 36) or `0-9a-zA-Z` (radix <= 62)
//! - **Digit API** for larger radices
//! - **Per-call tweaks** in addition to the tweak bound at construction
//! - **Key hygiene**: key text, key schedule and round buffers are wiped on drop
//!
//! ## Example: encrypt and decrypt a hex string
//! ```
//! use fpe_hex::{CipherOptions, Ff1};
//!
//! let key = [0x2bu8; 16];
//! let tweak = [0u8; 8];
//! let ff1 = Ff1::new(&key, &tweak, CipherOptions::default()).unwrap();
//!
//! let ct = ff1.encrypt("00112233445566778899aabbccddeeff").unwrap();
//! assert_eq!(ct.len(), 32);
//! assert!(ct.chars().all(|c| c.is_ascii_hexdigit()));
//! assert_eq!(ff1.decrypt(&ct).unwrap(), "00112233445566778899aabbccddeeff");
//! ```
//!
//! ## Example: NIST sample 1 (radix 10)
//! ```
//! use fpe_hex::{CipherOptions, Ff1};
//!
//! let key = hex::decode("2B7E151628AED2A6ABF7158809CF4F3C").unwrap();
//! let ff1 = Ff1::new(&key, &[], CipherOptions::for_radix(10)).unwrap();
//! assert_eq!(ff1.encrypt("0123456789").unwrap(), "2433477484");
//! ```
//!
//! Safety notes
//! - Not audited. FF1 hides values, it does not authenticate them.

mod codec;
mod ff1;
mod file;
mod format;
mod numeral;
mod prf;
mod types;

// Re-export public API from modules
pub use types::*;
pub use codec::{decode as decode_numeral, encode as encode_numeral, has_alphabet, normalize};
pub use ff1::Ff1;
pub use file::{decode_hex_secret, load_hex_file, read_input, read_lines, read_text_file};
pub use format::{TextOptions, prepare_input, transform_text, wrap_lines};
