//! Conversions between digit strings, byte strings and integers.
//!
//! These are the `NUM_radix`, `STR_radix^m`, `NUM` and `[x]^s` helpers of
//! NIST SP 800-38G, working on big-endian representations throughout.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// `NUM_radix(X)`: the integer whose base-`radix` big-endian digits are `digits`.
///
/// Digits must already be below `radix`.
pub fn num_radix(digits: &[u16], radix: u32) -> BigUint {
    if radix <= 256 {
        let narrow: Vec<u8> = digits.iter().map(|&d| d as u8).collect();
        if let Some(value) = BigUint::from_radix_be(&narrow, radix) {
            return value;
        }
    }
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &d| acc * radix + u32::from(d))
}

/// `STR_radix^m(x)`: `x` as exactly `m` base-`radix` digits, zero-padded on the left.
///
/// Requires `x < radix^m`; higher digits are dropped otherwise.
pub fn str_radix(x: &BigUint, radix: u32, m: usize) -> Vec<u16> {
    let mut out = vec![0u16; m];
    if radix <= 256 {
        let digits = x.to_radix_be(radix);
        let take = digits.len().min(m);
        for (slot, &d) in out[m - take..].iter_mut().zip(&digits[digits.len() - take..]) {
            *slot = d.into();
        }
        return out;
    }

    let mut rest = x.clone();
    for slot in out.iter_mut().rev() {
        if rest.is_zero() {
            break;
        }
        *slot = (&rest % radix).to_u16().unwrap_or_default();
        rest /= radix;
    }
    out
}

/// `radix^m`.
pub fn radix_pow(radix: u32, m: usize) -> BigUint {
    if radix.is_power_of_two() {
        let bits = radix.trailing_zeros() as usize * m;
        return BigUint::one() << bits;
    }
    let mut acc = BigUint::one();
    let mut base = BigUint::from(radix);
    let mut exp = m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }
    acc
}

/// `b = ceil(ceil(v * log2(radix)) / 8)`: bytes needed for any `v`-digit numeral.
pub fn byte_len(radix: u32, v: usize) -> usize {
    let bits = (radix_pow(radix, v) - 1u32).bits();
    bits.div_ceil(8) as usize
}

/// `[x]^len`: `x` as `len` big-endian bytes, keeping only the low `len` bytes.
pub fn to_fixed_be(x: &BigUint, len: usize) -> Vec<u8> {
    let bytes = x.to_bytes_be();
    let mut out = vec![0u8; len];
    let take = bytes.len().min(len);
    out[len - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    out
}
