//! AES key schedule and the FF1 Feistel round function.

use aes::cipher::{BlockEncrypt, InvalidLength, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};
use num_bigint::BigUint;
use zeroize::{Zeroize, Zeroizing};

use crate::numeral::{byte_len, to_fixed_be};
use crate::types::{FpeError, ROUNDS};

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// AES with the key size picked from the key length.
///
/// Key schedules are wiped on drop (`aes` crate `zeroize` feature).
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

fn schedule_failure(_: InvalidLength) -> FpeError {
    FpeError::PrimitiveFailure("AES key schedule")
}

impl BlockCipher {
    pub(crate) fn new(key: &[u8]) -> Result<Self, FpeError> {
        match key.len() {
            16 => Aes128::new_from_slice(key)
                .map(Self::Aes128)
                .map_err(schedule_failure),
            24 => Aes192::new_from_slice(key)
                .map(Self::Aes192)
                .map_err(schedule_failure),
            32 => Aes256::new_from_slice(key)
                .map(Self::Aes256)
                .map_err(schedule_failure),
            n => Err(FpeError::InvalidKeyLength(n)),
        }
    }

    /// Encrypt one block in place (ECB, single block).
    pub(crate) fn encrypt_block(&self, block: &mut [u8; BLOCK_LENGTH]) {
        let block = Block::from_mut_slice(&mut block[..]);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    pub(crate) fn key_bits(&self) -> usize {
        match self {
            Self::Aes128(_) => 128,
            Self::Aes192(_) => 192,
            Self::Aes256(_) => 256,
        }
    }
}

impl std::fmt::Debug for BlockCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aes{}", self.key_bits())
    }
}

#[inline]
fn xor_block(dst: &mut [u8; BLOCK_LENGTH], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Round function for one message shape `(n, u, t)`.
///
/// The CBC-MAC state after the fixed block `P` is computed once here and
/// reused by every round.
pub(crate) struct RoundFunction<'a> {
    cipher: &'a BlockCipher,
    tweak: &'a [u8],
    after_p: [u8; BLOCK_LENGTH],
    b: usize,
    d: usize,
    pad_len: usize,
}

impl<'a> RoundFunction<'a> {
    /// `n` and `tweak.len()` must fit in 32 bits and `radix` in 24 bits.
    pub(crate) fn new(
        cipher: &'a BlockCipher,
        radix: u32,
        n: usize,
        u: usize,
        tweak: &'a [u8],
    ) -> Self {
        let v = n - u;
        let b = byte_len(radix, v);
        let d = 4 * b.div_ceil(4) + 4;
        let t = tweak.len();

        let mut p = [0u8; BLOCK_LENGTH];
        p[..3].copy_from_slice(&[1, 2, 1]);
        p[3..6].copy_from_slice(&radix.to_be_bytes()[1..]);
        p[6] = ROUNDS;
        p[7] = (u % 256) as u8;
        p[8..12].copy_from_slice(&(n as u32).to_be_bytes());
        p[12..].copy_from_slice(&(t as u32).to_be_bytes());
        cipher.encrypt_block(&mut p);

        Self {
            cipher,
            tweak,
            after_p: p,
            b,
            d,
            pad_len: (BLOCK_LENGTH - (t + b + 1) % BLOCK_LENGTH) % BLOCK_LENGTH,
        }
    }

    /// `y = NUM(S)` for round `round`, where `source` is the numeral value of
    /// the half that is not being updated.
    pub(crate) fn apply(&self, round: u8, source: &BigUint) -> BigUint {
        let mut q = Zeroizing::new(Vec::with_capacity(
            self.tweak.len() + self.pad_len + 1 + self.b,
        ));
        q.extend_from_slice(self.tweak);
        q.resize(self.tweak.len() + self.pad_len, 0);
        q.push(round);
        q.extend_from_slice(&Zeroizing::new(to_fixed_be(source, self.b)));
        debug_assert_eq!(q.len() % BLOCK_LENGTH, 0);

        let mut r = self.after_p;
        for chunk in q.chunks_exact(BLOCK_LENGTH) {
            xor_block(&mut r, chunk);
            self.cipher.encrypt_block(&mut r);
        }

        let blocks = self.d.div_ceil(BLOCK_LENGTH);
        let mut s = Zeroizing::new(Vec::with_capacity(blocks * BLOCK_LENGTH));
        s.extend_from_slice(&r);
        for j in 1..blocks {
            let mut block = r;
            xor_block(&mut block, &(j as u128).to_be_bytes());
            self.cipher.encrypt_block(&mut block);
            s.extend_from_slice(&block);
            block.zeroize();
        }
        r.zeroize();

        BigUint::from_bytes_be(&s[..self.d])
    }
}
