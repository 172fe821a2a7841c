//! FF1 cipher context (NIST SP 800-38G).
//!
//! An [`Ff1`] binds an AES key schedule, a default tweak and the radix/length
//! parameters. It is immutable after construction and can be shared across
//! threads; every call runs exactly ten Feistel rounds and either returns the
//! whole result or an error, never a partial transform.

use zeroize::Zeroizing;

use crate::codec;
use crate::numeral::{num_radix, radix_pow, str_radix};
use crate::prf::{BlockCipher, RoundFunction};
use crate::types::{
    CipherOptions, Direction, FpeError, MAX_LEN, MAX_RADIX, MIN_RADIX, ROUNDS, min_len_for_radix,
};

/// Largest tweak whose length can be encoded in `P`.
const MAX_TWEAK_LEN: usize = u32::MAX as usize;

/// FF1 format-preserving cipher.
pub struct Ff1 {
    cipher: BlockCipher,
    tweak: Zeroizing<Vec<u8>>,
    options: CipherOptions,
}

impl std::fmt::Debug for Ff1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ff1")
            .field("cipher", &self.cipher)
            .field("radix", &self.options.radix)
            .field("min_len", &self.options.min_len)
            .field("tweak_len", &self.tweak.len())
            .finish_non_exhaustive()
    }
}

impl Ff1 {
    /// Build a context from a 16/24/32-byte AES key and a default tweak.
    ///
    /// # Errors
    ///
    /// - `InvalidRadix` if `options.radix` is outside `2..=65536`
    /// - `InvalidLength` if `options.min_len` is below the domain minimum of
    ///   the radix or above the maximum length
    /// - `InvalidTweakLength` if the tweak exceeds `options.max_tweak_len`
    /// - `InvalidKeyLength` if the key is not 16, 24 or 32 bytes
    pub fn new(key: &[u8], tweak: &[u8], options: CipherOptions) -> Result<Self, FpeError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&options.radix) {
            return Err(FpeError::InvalidRadix(options.radix));
        }
        let floor = min_len_for_radix(options.radix);
        if options.min_len < floor || options.min_len > MAX_LEN {
            return Err(FpeError::InvalidLength {
                len: options.min_len,
                min: floor,
                max: MAX_LEN,
            });
        }
        check_tweak(tweak, &options)?;
        let cipher = BlockCipher::new(key)?;

        Ok(Self {
            cipher,
            tweak: Zeroizing::new(tweak.to_vec()),
            options,
        })
    }

    /// Alphabet size.
    pub fn radix(&self) -> u32 {
        self.options.radix
    }

    /// Shortest accepted input.
    pub fn min_len(&self) -> usize {
        self.options.min_len
    }

    /// Longest accepted input.
    pub fn max_len(&self) -> usize {
        MAX_LEN
    }

    /// Encrypt a numeral string with the tweak bound at construction.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, FpeError> {
        self.transform_str(plaintext, &self.tweak, Direction::Encrypt)
    }

    /// Decrypt a numeral string with the tweak bound at construction.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, FpeError> {
        self.transform_str(ciphertext, &self.tweak, Direction::Decrypt)
    }

    /// Encrypt with a per-call tweak instead of the bound one.
    pub fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String, FpeError> {
        self.transform_str(plaintext, tweak, Direction::Encrypt)
    }

    /// Decrypt with a per-call tweak instead of the bound one.
    pub fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String, FpeError> {
        self.transform_str(ciphertext, tweak, Direction::Decrypt)
    }

    /// Encrypt a digit sequence (each digit below the radix).
    pub fn encrypt_digits(&self, digits: &[u16]) -> Result<Vec<u16>, FpeError> {
        self.transform_digits(digits, &self.tweak, Direction::Encrypt)
    }

    /// Decrypt a digit sequence (each digit below the radix).
    pub fn decrypt_digits(&self, digits: &[u16]) -> Result<Vec<u16>, FpeError> {
        self.transform_digits(digits, &self.tweak, Direction::Decrypt)
    }

    /// Run FF1 over a digit sequence in either direction with an explicit tweak.
    ///
    /// Length, tweak and digit checks all happen before any block cipher call.
    pub fn transform_digits(
        &self,
        digits: &[u16],
        tweak: &[u8],
        direction: Direction,
    ) -> Result<Vec<u16>, FpeError> {
        self.check_len(digits.len())?;
        check_tweak(tweak, &self.options)?;
        let radix = self.options.radix;
        if let Some(position) = digits.iter().position(|&d| u32::from(d) >= radix) {
            return Err(FpeError::InvalidDigit {
                digit: digits[position].into(),
                position,
            });
        }
        Ok(self.feistel(digits, tweak, direction))
    }

    fn transform_str(
        &self,
        input: &str,
        tweak: &[u8],
        direction: Direction,
    ) -> Result<String, FpeError> {
        let radix = self.options.radix;
        let digits = Zeroizing::new(codec::decode(input, radix)?);
        let out = Zeroizing::new(self.transform_digits(&digits, tweak, direction)?);
        codec::encode(&out, radix)
    }

    fn check_len(&self, len: usize) -> Result<(), FpeError> {
        if len < self.options.min_len || len > MAX_LEN {
            return Err(FpeError::InvalidLength {
                len,
                min: self.options.min_len,
                max: MAX_LEN,
            });
        }
        Ok(())
    }

    fn feistel(&self, x: &[u16], tweak: &[u8], direction: Direction) -> Vec<u16> {
        let radix = self.options.radix;
        let n = x.len();
        let u = n / 2;
        let v = n - u;

        let round_fn = RoundFunction::new(&self.cipher, radix, n, u, tweak);
        let modulus_u = radix_pow(radix, u);
        let modulus_v = radix_pow(radix, v);

        let mut a = num_radix(&x[..u], radix);
        let mut b = num_radix(&x[u..], radix);

        match direction {
            Direction::Encrypt => {
                for round in 0..ROUNDS {
                    let modulus = if round % 2 == 0 { &modulus_u } else { &modulus_v };
                    let y = round_fn.apply(round, &b);
                    let c = (a + y) % modulus;
                    a = std::mem::replace(&mut b, c);
                }
            }
            Direction::Decrypt => {
                for round in (0..ROUNDS).rev() {
                    let modulus = if round % 2 == 0 { &modulus_u } else { &modulus_v };
                    let y = round_fn.apply(round, &a);
                    let c = (b + modulus - y % modulus) % modulus;
                    b = std::mem::replace(&mut a, c);
                }
            }
        }

        let mut out = str_radix(&a, radix, u);
        out.extend(str_radix(&b, radix, v));
        out
    }
}

fn check_tweak(tweak: &[u8], options: &CipherOptions) -> Result<(), FpeError> {
    let max = options
        .max_tweak_len
        .map_or(MAX_TWEAK_LEN, |m| m.min(MAX_TWEAK_LEN));
    if tweak.len() > max {
        return Err(FpeError::InvalidTweakLength {
            len: tweak.len(),
            max,
        });
    }
    Ok(())
}
